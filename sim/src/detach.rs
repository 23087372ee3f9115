//! Turning a released cart into a free-flying body
//!
//! The launch direction is the direction of travel plus the outward normal
//! (away from the centre of curvature), scaled by the cart's speed and the
//! ejection multiplier. The host engine owns the resulting rigid body, this
//! module only decides how it starts out.

use coaster_config::{EjectStrategy, SimConfig};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::my_float::{Fpt, Point2, EPSILON};
use crate::physics::{DetachContext, VisualHandle};

/// How the free body gets its initial motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kick {
    /// Apply once as an impulse (mass times velocity)
    Impulse(Point2),
    /// Set as the body's linear velocity
    Velocity(Point2),
}

/// A cart that left the track, ready to hand to a physics engine
#[derive(Debug, Clone, PartialEq)]
pub struct FreeBody {
    pub cart_index: usize,
    pub position: Point2,
    pub rotation: Fpt,
    pub kick: Kick,
    /// rad/s
    pub angular_velocity: Fpt,
    /// Visual nodes to reparent onto the body
    pub visual: Option<VisualHandle>,
    pub g_at_release: Fpt,
}

/// Unit normal pointing away from the centre of curvature
///
/// `turn > 0` means the track bends toward increasing angles. On straight
/// track the normal pointing up the screen (negative y) is used.
pub fn outward_normal(angle: Fpt, turn: Fpt) -> Point2 {
    // rotated a quarter turn toward increasing angles
    let left = Point2::new(-angle.sin(), angle.cos());
    if turn > 0.0 {
        -left
    } else if turn < 0.0 {
        left
    } else if left.y > 0.0 {
        -left
    } else {
        left
    }
}

/// Launch velocity for a release context, before the impulse conversion
pub fn launch_velocity(ctx: &DetachContext, force_multiplier: Fpt) -> Point2 {
    let travel = Point2::new(ctx.tangent_angle.cos(), ctx.tangent_angle.sin()) * ctx.speed.signum();
    let dir = travel + outward_normal(ctx.tangent_angle, ctx.turn);
    let norm = dir.norm();
    if norm <= EPSILON {
        return Point2::zeros();
    }
    dir / norm * ctx.speed.abs() * force_multiplier
}

/// Builds free bodies from release contexts
#[derive(Debug, Clone)]
pub struct Ejector {
    force_multiplier: Fpt,
    spin_range: Fpt,
    strategy: EjectStrategy,
    mass: Fpt,
    rng: StdRng,
}

impl Ejector {
    pub fn from_config(c: &SimConfig) -> Self {
        let rng = match c.ejection.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            force_multiplier: c.ejection.force_multiplier,
            spin_range: c.ejection.spin_range.max(0.0),
            strategy: c.ejection.strategy,
            mass: c.carts.mass,
            rng,
        }
    }

    /// Consumes the context, so a cart can only ever be ejected once
    pub fn eject(&mut self, ctx: DetachContext) -> FreeBody {
        let velocity = launch_velocity(&ctx, self.force_multiplier);
        let kick = match self.strategy {
            EjectStrategy::Impulse => Kick::Impulse(velocity * self.mass),
            EjectStrategy::Velocity => Kick::Velocity(velocity),
        };
        let angular_velocity = if self.spin_range > 0.0 {
            self.rng.gen_range(-self.spin_range..=self.spin_range)
        } else {
            0.0
        };
        log::info!(
            "cart {} detached at {:.2}g, speed {:.1}, launch ({:.1}, {:.1})",
            ctx.cart_index,
            ctx.smoothed_g,
            ctx.speed,
            velocity.x,
            velocity.y
        );
        FreeBody {
            cart_index: ctx.cart_index,
            position: ctx.position,
            rotation: ctx.tangent_angle,
            kick,
            angular_velocity,
            visual: ctx.visual,
            g_at_release: ctx.smoothed_g,
        }
    }
}
