//! The drawn track: raw points in, one shared path snapshot out

use coaster_config::SimConfig;

use crate::curve::{self, SegmentCount};
use crate::my_float::{Fpt, Point2};
use crate::path::SmoothedPath;

/// Single writer (the drawing interaction), read by every cart
#[derive(Debug, Clone)]
pub struct Track {
    raw: Vec<Point2>,
    segments: SegmentCount,
    min_point_distance: Fpt,
    path: SmoothedPath,
    dirty: bool,
}

impl Track {
    pub fn new(segments: SegmentCount, min_point_distance: Fpt) -> Self {
        Self {
            raw: vec![],
            segments,
            min_point_distance,
            path: SmoothedPath::default(),
            dirty: false,
        }
    }

    pub fn from_config(c: &SimConfig) -> Self {
        Self::new(
            SegmentCount::from_config(&c.smoothing),
            c.input.min_point_distance,
        )
    }

    pub fn raw_points(&self) -> &[Point2] {
        &self.raw
    }

    /// Records a drawn point if it is far enough from the previous one
    ///
    /// Returns whether the point was kept.
    pub fn add_point(&mut self, p: Point2) -> bool {
        if let Some(last) = self.raw.last() {
            if (p - last).norm() < self.min_point_distance {
                return false;
            }
        }
        self.push_point(p);
        true
    }

    /// Records a point without the distance check
    pub fn push_point(&mut self, p: Point2) {
        self.raw.push(p);
        self.dirty = true;
    }

    pub fn extend(&mut self, points: impl IntoIterator<Item = Point2>) {
        self.raw.extend(points);
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        self.raw.clear();
        self.path = SmoothedPath::default();
        self.dirty = false;
    }

    /// Rebuilds the snapshot if the raw points changed since the last rebuild
    pub fn refresh(&mut self) -> &SmoothedPath {
        if self.dirty {
            self.path = curve::build(&self.raw, &self.segments);
            self.dirty = false;
        }
        &self.path
    }

    /// The last built snapshot, stale until the next `refresh`
    pub fn path(&self) -> &SmoothedPath {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track::new(SegmentCount::Adaptive { resolution: 25.0 }, 10.0)
    }

    #[test]
    fn close_points_are_ignored() {
        let mut t = track();
        assert!(t.add_point(Point2::new(0.0, 0.0)));
        assert!(!t.add_point(Point2::new(3.0, 4.0)));
        assert!(t.add_point(Point2::new(6.0, 8.0)));
        assert_eq!(t.raw_points().len(), 2);
    }

    #[test]
    fn path_is_rebuilt_lazily() {
        let mut t = track();
        t.extend([Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]);
        assert!(t.path().is_empty());
        let len = t.refresh().total_length();
        assert!((len - 100.0).abs() < 1e-9);
        t.push_point(Point2::new(200.0, 0.0));
        // old snapshot until the next refresh
        assert!((t.path().total_length() - 100.0).abs() < 1e-9);
        assert!((t.refresh().total_length() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn clear_empties_everything() {
        let mut t = track();
        t.extend([Point2::new(0.0, 0.0), Point2::new(100.0, 0.0)]);
        t.refresh();
        t.clear();
        assert!(t.raw_points().is_empty());
        assert!(t.path().is_empty());
        assert!(t.refresh().is_empty());
    }
}
