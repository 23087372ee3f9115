//! Turning a drawn polyline into a smooth rail path
//!
//! Every pair of consecutive raw points is interpolated with a Catmull-Rom
//! cubic, the outer control points being duplicated at both ends of the
//! drawing. Each interval is sampled at `segments + 1` evenly spaced `t`
//! values, so the point shared by two intervals is emitted twice.

// ensure segment counts are never zero
use std::num::NonZeroU32;

use coaster_config::{SmoothingConfig, MAX_SEGMENTS_PER_INTERVAL};
use matrix::{catmull_rom_matrix, weights};

use crate::my_float::{Fpt, Point2, EPSILON};
use crate::path::{total_length, SmoothedPath};

mod matrix;

/// How many segments each raw interval is split into
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentCount {
    Fixed(NonZeroU32),
    /// `floor(total raw length / resolution)`, at least one
    Adaptive { resolution: Fpt },
}

impl SegmentCount {
    pub fn from_config(c: &SmoothingConfig) -> Self {
        match c.fixed_segments.and_then(NonZeroU32::new) {
            Some(n) => Self::Fixed(n),
            None => Self::Adaptive {
                resolution: c.resolution,
            },
        }
    }

    /// Segment count for the current drawing, recomputed on every rebuild
    pub fn per_interval(&self, raw: &[Point2]) -> NonZeroU32 {
        match self {
            Self::Fixed(n) => (*n).min(cap()),
            Self::Adaptive { resolution } => {
                let n = (total_length(raw) / resolution.max(EPSILON)).floor();
                let n = if n.is_finite() {
                    (n as u32).clamp(1, MAX_SEGMENTS_PER_INTERVAL)
                } else {
                    1
                };
                NonZeroU32::new(n).unwrap_or(NonZeroU32::MIN)
            }
        }
    }
}

fn cap() -> NonZeroU32 {
    NonZeroU32::new(MAX_SEGMENTS_PER_INTERVAL).unwrap_or(NonZeroU32::MIN)
}

/// Samples the Catmull-Rom curve through `raw`, before spacing clamping
pub fn interpolate(raw: &[Point2], segments: NonZeroU32) -> Vec<Point2> {
    if raw.len() < 2 {
        return vec![];
    }
    let m = catmull_rom_matrix();
    let n = segments.get();
    let last = raw.len() - 2;
    // precompute the weights, they only depend on t
    let ws: Vec<_> = (0..=n).map(|j| weights(&m, j as Fpt / n as Fpt)).collect();

    let mut out = Vec::with_capacity((raw.len() - 1) * (n as usize + 1));
    for i in 0..=last {
        let p1 = raw[i];
        let p2 = raw[i + 1];
        let p0 = if i == 0 { p1 } else { raw[i - 1] };
        let p3 = if i == last { p2 } else { raw[i + 2] };
        for w in &ws {
            out.push(p0 * w[0] + p1 * w[1] + p2 * w[2] + p3 * w[3]);
        }
    }
    out
}

/// Spacing guard over an interpolated sequence
///
/// The first point is kept. A later point whose distance to the previous kept
/// point is not positive is replaced by an exact copy of that point, every
/// other point passes through untouched.
pub fn clamp_spacing(points: &[Point2]) -> Vec<Point2> {
    let mut out: Vec<Point2> = Vec::with_capacity(points.len());
    for p in points {
        let kept = match out.last() {
            Some(prev) if (p - prev).norm() <= 0.0 => *prev,
            _ => *p,
        };
        out.push(kept);
    }
    out
}

/// Builds the rail path from the current raw points
///
/// Fewer than two raw points give an empty path.
pub fn build(raw: &[Point2], segments: &SegmentCount) -> SmoothedPath {
    if raw.len() < 2 {
        return SmoothedPath::default();
    }
    let n = segments.per_interval(raw);
    let path = SmoothedPath::new(clamp_spacing(&interpolate(raw, n)));
    log::debug!(
        "rebuilt path: {} raw points, {} segments per interval, {} path points, length {:.2}",
        raw.len(),
        n,
        path.len(),
        path.total_length()
    );
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(Fpt, Fpt)]) -> Vec<Point2> {
        v.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn adaptive(resolution: Fpt) -> SegmentCount {
        SegmentCount::Adaptive { resolution }
    }

    #[test]
    fn short_input_gives_empty_path() {
        assert!(build(&[], &adaptive(10.0)).is_empty());
        assert!(build(&pts(&[(3.0, 4.0)]), &adaptive(10.0)).is_empty());
    }

    #[test]
    fn adaptive_count_uses_total_raw_length() {
        let raw = pts(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
        assert_eq!(adaptive(50.0).per_interval(&raw).get(), 4);
        assert_eq!(adaptive(60.0).per_interval(&raw).get(), 3);
        assert_eq!(adaptive(500.0).per_interval(&raw).get(), 1);
        assert_eq!(adaptive(1e-9).per_interval(&raw).get(), MAX_SEGMENTS_PER_INTERVAL);
    }

    #[test]
    fn fixed_count_shares_the_cap() {
        let raw = pts(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
        let huge = SegmentCount::Fixed(NonZeroU32::MAX);
        assert_eq!(huge.per_interval(&raw).get(), MAX_SEGMENTS_PER_INTERVAL);
        let path = build(&raw, &huge);
        assert_eq!(path.len(), 2 * (MAX_SEGMENTS_PER_INTERVAL as usize + 1));
    }

    #[test]
    fn from_config_prefers_fixed_count() {
        let mut c = SmoothingConfig::default();
        assert_eq!(
            SegmentCount::from_config(&c),
            SegmentCount::Adaptive {
                resolution: c.resolution
            }
        );
        c.fixed_segments = Some(6);
        assert_eq!(
            SegmentCount::from_config(&c),
            SegmentCount::Fixed(NonZeroU32::new(6).unwrap())
        );
        c.fixed_segments = Some(0);
        assert!(matches!(SegmentCount::from_config(&c), SegmentCount::Adaptive { .. }));
    }

    #[test]
    fn passes_through_raw_points_and_duplicates_junctions() {
        let raw = pts(&[(0.0, 0.0), (50.0, 40.0), (120.0, -10.0), (200.0, 30.0)]);
        let n = NonZeroU32::new(5).unwrap();
        let out = interpolate(&raw, n);
        assert_eq!(out.len(), 3 * 6);
        for (i, r) in raw.iter().enumerate().take(3) {
            assert!((out[i * 6] - r).norm() < 1e-9);
        }
        assert!((out[17] - raw[3]).norm() < 1e-9);
        // end of interval 0 and start of interval 1 coincide
        assert!((out[5] - out[6]).norm() < 1e-9);
    }

    #[test]
    fn straight_line_keeps_its_length() {
        let raw = pts(&[(0.0, 0.0), (100.0, 0.0), (200.0, 0.0)]);
        let path = build(&raw, &adaptive(50.0));
        assert_eq!(path.len(), 10);
        assert!((path.total_length() - 200.0).abs() < 1e-9);
        for p in path.points() {
            assert!(p.y.abs() < 1e-12);
        }
    }

    #[test]
    fn rebuild_is_pure() {
        let raw = pts(&[(0.0, 0.0), (30.0, 80.0), (90.0, 20.0), (140.0, 60.0), (180.0, 0.0)]);
        let a = build(&raw, &adaptive(15.0));
        let b = build(&raw, &adaptive(15.0));
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn clamping_never_stretches_spacing() {
        let raw = pts(&[(0.0, 0.0), (0.0, 0.0), (40.0, 10.0), (40.0, 10.0), (90.0, -30.0)]);
        let pre = interpolate(&raw, NonZeroU32::new(7).unwrap());
        let post = clamp_spacing(&pre);
        assert_eq!(pre.len(), post.len());
        assert_eq!(post[0], pre[0]);
        for (a, b) in pre.windows(2).zip(post.windows(2)) {
            let before = (a[1] - a[0]).norm();
            let after = (b[1] - b[0]).norm();
            assert!(after >= 0.0);
            assert!(after <= before + 1e-12);
        }
    }

    #[test]
    fn clamping_collapses_coincident_points() {
        let p = pts(&[(1.0, 1.0), (1.0, 1.0), (2.0, 1.0)]);
        let out = clamp_spacing(&p);
        assert_eq!(out, p);
        assert_eq!(out[1], out[0]);
    }
}
