//! The scene-level context: one track, its carts, and the tick loop
//!
//! The host calls `tick(dt)` once per frame. The path is rebuilt (if it was
//! edited) at the start of the tick and that single snapshot is shared by all
//! carts stepped in the same tick.

use coaster_config::SimConfig;

use crate::detach::{Ejector, FreeBody};
use crate::my_float::{Fpt, Point2};
use crate::path::SmoothedPath;
use crate::physics::{Cart, PhysicsModel, VisualHandle};
use crate::track::Track;

/// What the renderer needs for one cart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartView {
    pub position: Point2,
    pub rotation: Fpt,
    pub g: Fpt,
    pub detached: bool,
}

type DetachHook = Box<dyn FnMut(&FreeBody)>;

pub struct Simulation {
    config: SimConfig,
    track: Track,
    carts: Vec<Cart>,
    model: PhysicsModel,
    ejector: Ejector,
    highest_g_overall: Fpt,
    detach_hook: Option<DetachHook>,
}

impl Simulation {
    /// Starts with an empty track and freshly reset carts
    pub fn new(config: SimConfig) -> Self {
        let config = config.clamped();
        let mut sim = Self {
            track: Track::from_config(&config),
            model: PhysicsModel::from_config(&config),
            ejector: Ejector::from_config(&config),
            carts: vec![],
            highest_g_overall: 0.0,
            detach_hook: None,
            config,
        };
        sim.reset();
        sim
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn carts(&self) -> &[Cart] {
        &self.carts
    }

    /// Highest smoothed g any cart has reached, kept across resets
    pub fn highest_g_overall(&self) -> Fpt {
        self.highest_g_overall
    }

    /// Drawing input, see `Track::add_point`
    pub fn add_point(&mut self, p: Point2) -> bool {
        self.track.add_point(p)
    }

    pub fn extend_track(&mut self, points: impl IntoIterator<Item = Point2>) {
        self.track.extend(points);
    }

    pub fn clear_track(&mut self) {
        self.track.clear();
        log::debug!("track cleared");
    }

    /// Puts every cart back at `i * spacing` with the initial speed
    pub fn reset(&mut self) {
        let c = &self.config.carts;
        self.carts = (0..c.count)
            .map(|i| {
                Cart::new(
                    i,
                    i as Fpt * c.spacing,
                    c.initial_speed,
                    Some(VisualHandle(i as u64)),
                )
            })
            .collect();
        log::debug!("reset {} carts", self.carts.len());
    }

    /// Rebuilds the path now instead of waiting for the next tick
    pub fn refresh_path(&mut self) -> &SmoothedPath {
        self.track.refresh()
    }

    /// Path used by the last tick
    pub fn path(&self) -> &SmoothedPath {
        self.track.path()
    }

    /// Rails for drawing, offset by the configured rail distance
    pub fn rails(&self) -> (Vec<Point2>, Vec<Point2>) {
        self.track.path().rails(self.config.render.rail_offset)
    }

    pub fn cart_view(&self, index: usize) -> Option<CartView> {
        let cart = self.carts.get(index)?;
        let sample = self.track.path().sample(cart.arc_offset())?;
        Some(CartView {
            position: sample.position,
            rotation: sample.tangent_angle,
            g: cart.smoothed_g(),
            detached: cart.is_detached(),
        })
    }

    /// Runs after every detachment, for cosmetic effects
    pub fn set_detach_hook(&mut self, hook: impl FnMut(&FreeBody) + 'static) {
        self.detach_hook = Some(Box::new(hook));
    }

    /// Advances every tracking cart by `dt` seconds
    ///
    /// Returns the bodies of carts that detached during this tick. The whole
    /// tick is skipped while the path is too short to ride.
    pub fn tick(&mut self, dt: Fpt) -> Vec<FreeBody> {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("ignoring tick with dt = {}", dt);
            return vec![];
        }
        let path = self.track.refresh();
        if path.is_degenerate() {
            log::trace!("skipping tick, path has {} points", path.len());
            return vec![];
        }

        let mut released = vec![];
        for cart in self.carts.iter_mut() {
            if let Some(ctx) = cart.step(path, &self.model, dt) {
                released.push(self.ejector.eject(ctx));
            }
            if cart.max_g_recorded() > self.highest_g_overall {
                if cart.max_g_recorded().floor() > self.highest_g_overall.floor() {
                    log::debug!(
                        "new g record {:.2} by cart {}",
                        cart.max_g_recorded(),
                        cart.index()
                    );
                }
                self.highest_g_overall = cart.max_g_recorded();
            }
        }

        if let Some(hook) = self.detach_hook.as_mut() {
            for body in &released {
                hook(body);
            }
        }
        released
    }
}
