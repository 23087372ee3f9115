use crate::my_float::{wrap_offset, Fpt, Point2};
use crate::path::{curvature, signed_turn, SmoothedPath};

use super::{CartInfo, PhysicsModel};

/// Opaque id of the node drawing a cart, owned by the host engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisualHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartState {
    /// Following the rail path
    Tracking,
    /// Flew off, never simulated on the track again
    Detached,
}

/// A cart riding the track
#[derive(Debug, Clone, getset::CopyGetters)]
#[getset(get_copy = "pub")]
pub struct Cart {
    index: usize,
    arc_offset: Fpt,
    speed: Fpt,
    smoothed_g: Fpt,
    max_g_recorded: Fpt,
    state: CartState,
    visual: Option<VisualHandle>,
    info: CartInfo,
}

/// Everything the detachment handler needs, produced once per cart
///
/// Not `Clone`: it carries the cart's visual handle away with it.
#[derive(Debug)]
pub struct DetachContext {
    pub cart_index: usize,
    pub position: Point2,
    pub tangent_angle: Fpt,
    /// Signed turn of the track at the release point, 0 on straight track
    pub turn: Fpt,
    pub speed: Fpt,
    pub smoothed_g: Fpt,
    pub visual: Option<VisualHandle>,
}

impl Cart {
    pub fn new(index: usize, arc_offset: Fpt, speed: Fpt, visual: Option<VisualHandle>) -> Self {
        Self {
            index,
            arc_offset,
            speed,
            smoothed_g: 0.0,
            max_g_recorded: 0.0,
            state: CartState::Tracking,
            visual,
            info: CartInfo::default(),
        }
    }

    pub fn is_detached(&self) -> bool {
        self.state == CartState::Detached
    }

    /// Where the cart currently sits on `path`
    pub fn position(&self, path: &SmoothedPath) -> Option<Point2> {
        path.sample(self.arc_offset).map(|s| s.position)
    }

    /// Advances the cart by `dt` along `path`
    ///
    /// Returns the release context on the tick the cart detaches. A detached
    /// cart is left untouched and never returns a context again.
    pub fn step(
        &mut self,
        path: &SmoothedPath,
        model: &PhysicsModel,
        dt: Fpt,
    ) -> Option<DetachContext> {
        if self.is_detached() {
            return None;
        }
        let sample = path.sample(self.arc_offset)?;
        let angle = sample.tangent_angle;
        let kappa = curvature(path, sample.segment_index, sample.segment_length);

        let tangential = model.tangential_accel(angle, self.speed);
        let normal = model.normal_accel(angle, self.speed, kappa);
        let g_instant = model.g_force(tangential, normal);
        self.smoothed_g = model.smooth_g(self.smoothed_g, g_instant);

        // semi-implicit: the new speed moves the cart
        self.speed = model.integrate_speed(self.speed, tangential, dt);
        self.arc_offset = wrap_offset(self.arc_offset + self.speed * dt, path.total_length());
        self.max_g_recorded = self.max_g_recorded.max(self.smoothed_g);

        self.info = CartInfo {
            tangent_angle: angle,
            segment_index: sample.segment_index,
            curvature: kappa,
            tangential_accel: tangential,
            normal_accel: normal,
            g_instant,
            ticks: self.info.ticks + 1,
        };

        if !model.should_detach(self.speed, self.smoothed_g) {
            return None;
        }
        self.state = CartState::Detached;
        Some(DetachContext {
            cart_index: self.index,
            position: sample.position,
            tangent_angle: angle,
            turn: signed_turn(path, sample.segment_index).unwrap_or(0.0),
            speed: self.speed,
            smoothed_g: self.smoothed_g,
            visual: self.visual.take(),
        })
    }

    pub fn description(&self) -> String {
        format!(
            "cart {} ({:?})\ns: {:.1}\nv: {:.1}\ng~: {:.2} (max {:.2})\n{}",
            self.index,
            self.state,
            self.arc_offset,
            self.speed,
            self.smoothed_g,
            self.max_g_recorded,
            self.info.description()
        )
    }
}
