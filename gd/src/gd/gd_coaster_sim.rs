use godot::prelude::*;

use coaster_sim::config::SimConfig;
use coaster_sim::my_float::Fpt;
use coaster_sim::physics::Cart;
use coaster_sim::simulation::CartView;
use coaster_sim::Simulation;

use super::{gd_to_point, point_to_gd, points_to_gd, Ejection};
use crate::persist;

/// Wrapper around coaster_sim::Simulation
///
/// Call `tick` from `_physics_process` and spawn a rigid body for every
/// returned `Ejection`.
#[derive(GodotClass)]
#[class(init)]
pub struct CoasterSim {
    inner: Option<Simulation>,
}

macro_rules! impl_cart_getter {
    ($self:ident, $index:expr, $closure:expr) => {
        match $self
            .inner
            .as_ref()
            .zip(usize::try_from($index).ok())
            .and_then(|(sim, i)| sim.carts().get(i))
        {
            Some(cart) => Variant::from($closure(cart)),
            None => Variant::nil(),
        }
    };
}

macro_rules! impl_view_getter {
    ($self:ident, $index:expr, $closure:expr) => {
        match $self.view($index) {
            Some(view) => Variant::from($closure(view)),
            None => Variant::nil(),
        }
    };
}

impl CoasterSim {
    fn view(&self, index: i64) -> Option<CartView> {
        let sim = self.inner.as_ref()?;
        sim.cart_view(usize::try_from(index).ok()?)
    }
}

#[godot_api]
impl CoasterSim {
    /// Build from a JSON config string, `""` or invalid JSON gives the defaults
    #[func]
    fn create(config_json: String) -> Gd<Self> {
        let config = if config_json.trim().is_empty() {
            SimConfig::default()
        } else {
            SimConfig::from_json(&config_json).unwrap_or_else(|e| {
                log::error!("bad config json, using defaults: {e}");
                SimConfig::default()
            })
        };
        Gd::from_object(Self {
            inner: Some(Simulation::new(config)),
        })
    }

    /// Build from a JSON config file on disk, falls back to the defaults
    #[func]
    fn create_from_file(path: String) -> Gd<Self> {
        let config = persist::load(&path).unwrap_or_else(|e| {
            log::error!("{e:#}, using default config");
            SimConfig::default()
        });
        Gd::from_object(Self {
            inner: Some(Simulation::new(config)),
        })
    }

    #[func]
    fn save_config(&self, path: String) -> bool {
        let Some(sim) = &self.inner else {
            return false;
        };
        match persist::save(&path, sim.config()) {
            Ok(()) => true,
            Err(e) => {
                log::error!("{e:#}");
                false
            }
        }
    }

    /// Feed a drawn point, returns false if it was too close to the last one
    #[func]
    fn add_point(&mut self, p: Vector2) -> bool {
        match &mut self.inner {
            Some(sim) => sim.add_point(gd_to_point(p)),
            None => false,
        }
    }

    #[func]
    fn clear_track(&mut self) {
        if let Some(sim) = &mut self.inner {
            sim.clear_track();
        }
    }

    #[func]
    fn reset(&mut self) {
        if let Some(sim) = &mut self.inner {
            sim.reset();
        }
    }

    #[func]
    fn tick(&mut self, delta: Fpt) -> Array<Gd<Ejection>> {
        match &mut self.inner {
            Some(sim) => sim.tick(delta).into_iter().map(Ejection::new_gd).collect(),
            None => Array::new(),
        }
    }

    /// Smoothed path as of the last tick
    #[func]
    fn path_points(&self) -> Array<Vector2> {
        match &self.inner {
            Some(sim) => points_to_gd(sim.path().points()),
            None => Array::new(),
        }
    }

    /// `[left, right]` rail polylines for drawing
    #[func]
    fn rails(&self) -> VariantArray {
        let Some(sim) = &self.inner else {
            return VariantArray::new();
        };
        let (left, right) = sim.rails();
        [left, right]
            .iter()
            .map(|rail| points_to_gd(rail).to_variant())
            .collect()
    }

    #[func]
    fn cart_count(&self) -> i64 {
        self.inner.as_ref().map_or(0, |sim| sim.carts().len() as i64)
    }

    #[func]
    fn cart_pos(&self, index: i64) -> Variant {
        impl_view_getter!(self, index, |v: CartView| point_to_gd(&v.position))
    }

    #[func]
    fn cart_rotation(&self, index: i64) -> Variant {
        impl_view_getter!(self, index, |v: CartView| v.rotation)
    }

    #[func]
    fn cart_g(&self, index: i64) -> Variant {
        impl_cart_getter!(self, index, |c: &Cart| c.smoothed_g())
    }

    #[func]
    fn cart_speed(&self, index: i64) -> Variant {
        impl_cart_getter!(self, index, |c: &Cart| c.speed())
    }

    #[func]
    fn cart_detached(&self, index: i64) -> Variant {
        impl_cart_getter!(self, index, |c: &Cart| c.is_detached())
    }

    #[func]
    fn cart_description(&self, index: i64) -> Variant {
        impl_cart_getter!(self, index, |c: &Cart| c.description())
    }

    #[func]
    fn highest_g(&self) -> Fpt {
        self.inner.as_ref().map_or(0.0, |sim| sim.highest_g_overall())
    }

    #[func]
    fn description(&self) -> String {
        let Some(sim) = &self.inner else {
            return String::new();
        };
        format!(
            "points: {} raw, {} smoothed\nlength: {:.1}\ncarts: {} ({} detached)\nrecord: {:.2}g",
            sim.track().raw_points().len(),
            sim.path().len(),
            sim.path().total_length(),
            sim.carts().len(),
            sim.carts().iter().filter(|c| c.is_detached()).count(),
            sim.highest_g_overall()
        )
    }
}
