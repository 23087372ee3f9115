//! Cart physics along the rail path
//!
//! ### Overview
//! One configurable model covers both the pixel-unit and the meter-converted
//! setups: gravity is given in m/s^2 and scaled by `pixels_per_meter`, so
//! every quantity below is in path units (pixels) and seconds.
//!
//! Per tick, for a cart at angle `a` (y down, `sin(a) > 0` is downhill):
//! `a_t = (m * g * sin(a) - k1 * v - k2 * v * |v|) / m`
//! `a_n = min(v^2 * kappa, max_normal) + g * |cos(a)|`
//! `g_instant = |(a_t, a_n)| / g`
//!
//! `g_instant` is smoothed exponentially before it is compared with the
//! detach threshold.

use coaster_config::SimConfig;

use crate::my_float::{lerp, Fpt, EPSILON};

mod cart;
mod info;

pub use cart::{Cart, CartState, DetachContext, VisualHandle};
pub use info::CartInfo;

/// Carts slower than this never detach
pub const DETACH_MIN_SPEED: Fpt = 0.01;

/// Constants of the cart model, in path units
#[derive(Debug, Clone, PartialEq, getset::CopyGetters)]
#[getset(get_copy = "pub")]
pub struct PhysicsModel {
    gravity: Fpt,
    mass: Fpt,
    drag_linear: Fpt,
    drag_quadratic: Fpt,
    max_speed: Fpt,
    g_smoothing: Fpt,
    max_normal_accel: Fpt,
    detach_threshold: Fpt,
}

impl PhysicsModel {
    pub fn from_config(c: &SimConfig) -> Self {
        let gravity = c.physics.gravity_px();
        Self {
            gravity,
            mass: c.carts.mass.max(EPSILON),
            drag_linear: c.physics.drag_linear,
            drag_quadratic: c.physics.drag_quadratic,
            max_speed: c.carts.max_speed.max(0.0),
            g_smoothing: c.physics.g_smoothing.clamp(0.0, 1.0),
            max_normal_accel: c.physics.max_normal_g * gravity.abs(),
            detach_threshold: c.physics.detach_threshold,
        }
    }

    /// Gravity along the track minus drag, per unit mass
    pub fn tangential_accel(&self, angle: Fpt, speed: Fpt) -> Fpt {
        let gravity_force = self.mass * self.gravity * angle.sin();
        let drag = self.drag_linear * speed + self.drag_quadratic * speed * speed.abs();
        (gravity_force - drag) / self.mass.max(EPSILON)
    }

    /// Centripetal term (bounded) plus the part of gravity the track carries
    ///
    /// Both terms are magnitudes: a crest and a valley of the same curvature
    /// load the cart the same. The detach threshold is read against this
    /// combined magnitude, so a fast crest can still throw a cart off.
    pub fn normal_accel(&self, angle: Fpt, speed: Fpt, curvature: Fpt) -> Fpt {
        let centripetal = (speed * speed * curvature).clamp(0.0, self.max_normal_accel);
        centripetal + self.gravity * angle.cos().abs()
    }

    /// Combined acceleration as a multiple of gravity
    pub fn g_force(&self, tangential: Fpt, normal: Fpt) -> Fpt {
        let g = self.gravity.abs();
        if g <= EPSILON {
            return 0.0;
        }
        tangential.hypot(normal) / g
    }

    pub fn smooth_g(&self, smoothed: Fpt, instant: Fpt) -> Fpt {
        lerp(smoothed, instant, self.g_smoothing)
    }

    pub fn integrate_speed(&self, speed: Fpt, accel: Fpt, dt: Fpt) -> Fpt {
        (speed + accel * dt).clamp(-self.max_speed, self.max_speed)
    }

    pub fn should_detach(&self, speed: Fpt, smoothed_g: Fpt) -> bool {
        speed.abs() > DETACH_MIN_SPEED && smoothed_g > self.detach_threshold
    }
}
