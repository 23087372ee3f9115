//! Float type and the small scalar helpers shared by the whole core

use core::f64::consts::{PI, TAU};

pub type Fpt = f64;

/// A 2D position in path units, y pointing down the screen
pub type Point2 = na::Vector2<Fpt>;

/// Floor used whenever a length ends up in a denominator
pub const EPSILON: Fpt = 1e-6;

pub fn lerp(a: Fpt, b: Fpt, t: Fpt) -> Fpt {
    a + (b - a) * t
}

/// Wraps an angle difference into `[-PI, PI]`
pub fn wrap_angle(a: Fpt) -> Fpt {
    let w = (a + PI).rem_euclid(TAU) - PI;
    // rem_euclid maps +PI to -PI, keep the sign of the input
    if w == -PI && a > 0.0 {
        PI
    } else {
        w
    }
}

/// Wraps an arc-length offset into `[0, length)`
///
/// Returns 0 for a degenerate length.
pub fn wrap_offset(offset: Fpt, length: Fpt) -> Fpt {
    if length <= EPSILON || !offset.is_finite() {
        return 0.0;
    }
    let o = (offset % length + length) % length;
    // `(-tiny % l) + l` can round up to exactly `l`
    if o >= length {
        0.0
    } else {
        o
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_angle_takes_short_way() {
        assert!((wrap_angle(1.5 * PI) + 0.5 * PI).abs() < 1e-12);
        assert!((wrap_angle(-1.5 * PI) - 0.5 * PI).abs() < 1e-12);
        assert!((wrap_angle(0.25) - 0.25).abs() < 1e-12);
        assert!((wrap_angle(PI) - PI).abs() < 1e-12);
        assert!((wrap_angle(-PI) + PI).abs() < 1e-12);
    }

    #[test]
    fn wrap_offset_handles_both_directions() {
        assert!((wrap_offset(250.0, 200.0) - 50.0).abs() < 1e-12);
        assert!((wrap_offset(-50.0, 200.0) - 150.0).abs() < 1e-12);
        assert!((wrap_offset(-450.0, 200.0) - 150.0).abs() < 1e-12);
        assert_eq!(wrap_offset(200.0, 200.0), 0.0);
        assert_eq!(wrap_offset(-1e-18, 200.0), 0.0);
        assert_eq!(wrap_offset(10.0, 0.0), 0.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }
}
