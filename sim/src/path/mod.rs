//! Arc-length queries on a smoothed rail path

use crate::my_float::{wrap_offset, Fpt, Point2, EPSILON};

mod curvature;

pub use curvature::{curvature, signed_turn};

/// Sum of the distances between consecutive points
pub fn total_length(points: &[Point2]) -> Fpt {
    points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
}

/// The rail path, immutable between rebuilds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SmoothedPath {
    points: Vec<Point2>,
    total_length: Fpt,
}

/// Where an arc-length offset lands on the path
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSample {
    pub position: Point2,
    /// `atan2` of the segment direction, radians
    pub tangent_angle: Fpt,
    pub segment_index: usize,
    pub segment_length: Fpt,
}

impl SmoothedPath {
    pub fn new(points: Vec<Point2>) -> Self {
        let total_length = total_length(&points);
        Self {
            points,
            total_length,
        }
    }

    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn total_length(&self) -> Fpt {
        self.total_length
    }

    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Too short to ride on, carts skip the tick
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2 || self.total_length <= EPSILON
    }

    /// Direction of segment `i`, `None` for a zero-length segment
    pub fn segment_angle(&self, i: usize) -> Option<Fpt> {
        let d = self.points.get(i + 1)? - self.points.get(i)?;
        if d.norm() > 0.0 {
            Some(d.y.atan2(d.x))
        } else {
            None
        }
    }

    /// Position, direction and segment at arc length `offset`
    ///
    /// The offset wraps around the path in both directions. Zero-length
    /// segments never answer a query. Returns `None` for paths with fewer than
    /// two points.
    pub fn sample(&self, offset: Fpt) -> Option<PathSample> {
        if self.points.len() < 2 {
            return None;
        }
        let o = wrap_offset(offset, self.total_length);
        let mut traveled = 0.0;
        for (i, w) in self.points.windows(2).enumerate() {
            let d = w[1] - w[0];
            let len = d.norm();
            if len <= 0.0 {
                continue;
            }
            if traveled + len >= o {
                let t = ((o - traveled) / len).clamp(0.0, 1.0);
                return Some(PathSample {
                    position: w[0] + d * t,
                    tangent_angle: d.y.atan2(d.x),
                    segment_index: i,
                    segment_length: len,
                });
            }
            traveled += len;
        }
        // rounding left the offset past the end, or every segment is empty
        Some(PathSample {
            position: self.points[self.points.len() - 1],
            tangent_angle: 0.0,
            segment_index: self.points.len() - 2,
            segment_length: 0.0,
        })
    }

    /// Two polylines displaced by `offset` to either side of the path
    ///
    /// The side direction at each point comes from its neighbours, so the
    /// duplicated junction points get the same displacement.
    pub fn rails(&self, offset: Fpt) -> (Vec<Point2>, Vec<Point2>) {
        let n = self.points.len();
        let mut left = Vec::with_capacity(n);
        let mut right = Vec::with_capacity(n);
        for i in 0..n {
            let ahead = self.points[(i + 1).min(n - 1)];
            let behind = self.points[i.saturating_sub(1)];
            let d = ahead - behind;
            let len = d.norm();
            let side = if len > 0.0 {
                Point2::new(-d.y, d.x) / len
            } else {
                Point2::zeros()
            };
            left.push(self.points[i] + side * offset);
            right.push(self.points[i] - side * offset);
        }
        (left, right)
    }
}
