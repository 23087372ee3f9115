use godot::prelude::*;

use coaster_sim::detach::{FreeBody, Kick};

use super::point_to_gd;

/// A cart that just left the track
///
/// Build a rigid body from it: place it at `position` with `rotation`, then
/// either apply `kick` as a central impulse or set it as the linear velocity
/// depending on `is_impulse`.
#[derive(GodotClass)]
#[class(no_init)]
pub struct Ejection {
    body: FreeBody,
}

impl Ejection {
    pub fn new_gd(body: FreeBody) -> Gd<Self> {
        Gd::from_object(Self { body })
    }
}

#[godot_api]
impl Ejection {
    #[func]
    fn cart_index(&self) -> i64 {
        self.body.cart_index as i64
    }

    #[func]
    fn position(&self) -> Vector2 {
        point_to_gd(&self.body.position)
    }

    #[func]
    fn rotation(&self) -> f64 {
        self.body.rotation
    }

    #[func]
    fn is_impulse(&self) -> bool {
        matches!(self.body.kick, Kick::Impulse(_))
    }

    #[func]
    fn kick(&self) -> Vector2 {
        match &self.body.kick {
            Kick::Impulse(v) | Kick::Velocity(v) => point_to_gd(v),
        }
    }

    #[func]
    fn angular_velocity(&self) -> f64 {
        self.body.angular_velocity
    }

    /// Id of the cart's visual node, -1 if it had none
    #[func]
    fn visual_id(&self) -> i64 {
        self.body.visual.map_or(-1, |v| v.0 as i64)
    }

    #[func]
    fn g_at_release(&self) -> f64 {
        self.body.g_at_release
    }
}
