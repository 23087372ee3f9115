//! Discrete curvature from the turn between neighbouring segments

use crate::my_float::{wrap_angle, Fpt, EPSILON};

use super::SmoothedPath;

/// Signed turn (radians) into segment `segment_index` from the one before it
///
/// Zero-length segments are looked through, both ways. `None` on the first
/// and last segment, curvature needs a neighbour on each side.
pub fn signed_turn(path: &SmoothedPath, segment_index: usize) -> Option<Fpt> {
    let count = path.segment_count();
    if segment_index == 0 || segment_index + 1 >= count {
        return None;
    }
    let before = (0..segment_index)
        .rev()
        .find_map(|i| path.segment_angle(i))?;
    let at = (segment_index..count).find_map(|i| path.segment_angle(i))?;
    Some(wrap_angle(at - before))
}

/// Curvature (1 / path unit) at a sample on `segment_index`
///
/// Always `>= 0`, and 0 on boundary segments.
pub fn curvature(path: &SmoothedPath, segment_index: usize, segment_length: Fpt) -> Fpt {
    signed_turn(path, segment_index)
        .map(|turn| turn.abs() / segment_length.max(EPSILON))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::my_float::Point2;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn path(v: &[(Fpt, Fpt)]) -> SmoothedPath {
        SmoothedPath::new(v.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    #[test]
    fn straight_path_has_no_curvature() {
        let p = path(&[(0.0, 0.0), (10.0, 0.0), (20.0, 0.0), (30.0, 0.0)]);
        assert_eq!(curvature(&p, 1, 10.0), 0.0);
        assert_eq!(signed_turn(&p, 1), Some(0.0));
    }

    #[test]
    fn boundary_segments_are_flat() {
        let p = path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert_eq!(curvature(&p, 0, 10.0), 0.0);
        assert_eq!(curvature(&p, 2, 10.0), 0.0);
        assert!(signed_turn(&p, 0).is_none());
        assert!(signed_turn(&p, 2).is_none());
    }

    #[test]
    fn right_angle_turn() {
        let p = path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (10.0, 20.0)]);
        assert!((signed_turn(&p, 1).unwrap() - FRAC_PI_2).abs() < 1e-12);
        assert!((curvature(&p, 1, 10.0) - FRAC_PI_2 / 10.0).abs() < 1e-12);
        // turning the other way flips the sign, not the curvature
        let q = path(&[(0.0, 0.0), (10.0, 0.0), (10.0, -10.0), (10.0, -20.0)]);
        assert!((signed_turn(&q, 1).unwrap() + FRAC_PI_2).abs() < 1e-12);
        assert!((curvature(&q, 1, 10.0) - curvature(&p, 1, 10.0)).abs() < 1e-12);
    }

    #[test]
    fn takes_the_short_way_across_pi() {
        // heading ~ +170deg then ~ -170deg is a 20deg turn, not 340deg
        let a = 170.0_f64.to_radians();
        let p = path(&[
            (0.0, 0.0),
            (10.0 * a.cos(), 10.0 * a.sin()),
            (10.0 * a.cos() + 10.0 * a.cos(), 10.0 * a.sin() - 10.0 * a.sin()),
            (0.0, 0.0),
        ]);
        let turn = signed_turn(&p, 1).unwrap();
        assert!(turn.abs() < PI / 2.0);
        assert!((turn.abs() - 20.0_f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn looks_through_duplicated_points() {
        let p = path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 0.0), (10.0, 10.0), (10.0, 20.0)]);
        assert!((signed_turn(&p, 2).unwrap() - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn tiny_segment_length_is_floored() {
        let p = path(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (10.0, 20.0)]);
        let k = curvature(&p, 1, 0.0);
        assert!(k.is_finite());
        assert!((k - FRAC_PI_2 / EPSILON).abs() < 1e-3);
    }
}
