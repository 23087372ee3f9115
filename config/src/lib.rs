//! Tunables for the drawn-track coaster
//!
//! Everything is optional in the JSON form, missing fields take their
//! defaults. Values are never rejected, `SimConfig::clamped` pulls them back
//! into a usable range instead.

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SimConfig {
    pub smoothing: SmoothingConfig,
    pub input: InputConfig,
    pub render: RenderConfig,
    pub carts: CartConfig,
    pub physics: PhysicsConfig,
    pub ejection: EjectionConfig,
}

/// How the drawn polyline is turned into a rail path
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Target path units (pixels) per interpolated segment
    pub resolution: f64,
    /// Use a constant segment count per raw interval instead of deriving it
    /// from `resolution`
    pub fixed_segments: Option<u32>,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            resolution: 20.0,
            fixed_segments: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    /// Minimum distance between two recorded raw points
    pub min_point_distance: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            min_point_distance: 10.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderConfig {
    /// Perpendicular distance of each rail from the path
    pub rail_offset: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { rail_offset: 6.0 }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CartConfig {
    pub count: usize,
    /// Arc length between consecutive carts at reset
    pub spacing: f64,
    pub initial_speed: f64,
    pub max_speed: f64,
    pub mass: f64,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            count: 3,
            spacing: 150.0,
            initial_speed: 100.0,
            max_speed: 2000.0,
            mass: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// m/s^2
    pub gravity: f64,
    /// Path units per meter, gravity is scaled by this before integration
    pub pixels_per_meter: f64,
    pub drag_linear: f64,
    /// Zero gives the linear-only drag model
    pub drag_quadratic: f64,
    /// Weight of the newest g sample in the exponential smoothing
    pub g_smoothing: f64,
    /// Upper bound of the centripetal term, in g
    pub max_normal_g: f64,
    /// Smoothed g above which a moving cart leaves the track
    pub detach_threshold: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 9.8,
            pixels_per_meter: 100.0,
            drag_linear: 0.05,
            drag_quadratic: 0.0,
            g_smoothing: 0.1,
            max_normal_g: 20.0,
            detach_threshold: 4.0,
        }
    }
}

impl PhysicsConfig {
    /// Gravity in path units per second squared
    pub fn gravity_px(&self) -> f64 {
        self.gravity * self.pixels_per_meter
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EjectStrategy {
    /// Hand the free body an impulse (velocity times mass)
    Impulse,
    /// Set the free body's velocity directly
    Velocity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EjectionConfig {
    pub force_multiplier: f64,
    /// Spin is drawn from `[-spin_range, spin_range]` rad/s
    pub spin_range: f64,
    pub strategy: EjectStrategy,
    /// Fixed seed for reproducible spins
    pub seed: Option<u64>,
}

impl Default for EjectionConfig {
    fn default() -> Self {
        Self {
            force_multiplier: 1.5,
            spin_range: 6.0,
            strategy: EjectStrategy::Velocity,
            seed: None,
        }
    }
}

/// Smallest resolution / mass accepted, keeps divisions finite
const POSITIVE_FLOOR: f64 = 1e-3;

/// Upper bound on segments per raw interval, fixed or adaptive
pub const MAX_SEGMENTS_PER_INTERVAL: u32 = 4096;

pub const MAX_CARTS: usize = 1024;

/// Clamps a field in place, warning when the value had to move
macro_rules! clamp_field {
    ($self:ident . $section:ident . $field:ident, $min:expr, $max:expr) => {{
        let v = $self.$section.$field;
        let c = if v.is_nan() { $min } else { v.clamp($min, $max) };
        if c != v {
            log::warn!(
                "config {}.{} = {} out of range, using {}",
                stringify!($section),
                stringify!($field),
                v,
                c
            );
            $self.$section.$field = c;
        }
    }};
}

impl SimConfig {
    pub fn from_json(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Pull every value into its valid range
    pub fn clamped(mut self) -> Self {
        clamp_field!(self.smoothing.resolution, POSITIVE_FLOOR, f64::MAX);
        if let Some(n) = self.smoothing.fixed_segments {
            let c = n.clamp(1, MAX_SEGMENTS_PER_INTERVAL);
            if c != n {
                log::warn!("config smoothing.fixed_segments = {n} out of range, using {c}");
                self.smoothing.fixed_segments = Some(c);
            }
        }
        if self.carts.count > MAX_CARTS {
            log::warn!(
                "config carts.count = {} out of range, using {MAX_CARTS}",
                self.carts.count
            );
            self.carts.count = MAX_CARTS;
        }
        clamp_field!(self.input.min_point_distance, 0.0, f64::MAX);
        clamp_field!(self.render.rail_offset, 0.0, f64::MAX);
        clamp_field!(self.carts.spacing, 0.0, f64::MAX);
        clamp_field!(self.carts.max_speed, 0.0, f64::MAX);
        let max_speed = self.carts.max_speed;
        clamp_field!(self.carts.initial_speed, -max_speed, max_speed);
        clamp_field!(self.carts.mass, POSITIVE_FLOOR, f64::MAX);
        clamp_field!(self.physics.pixels_per_meter, 0.0, f64::MAX);
        clamp_field!(self.physics.drag_linear, 0.0, f64::MAX);
        clamp_field!(self.physics.drag_quadratic, 0.0, f64::MAX);
        clamp_field!(self.physics.g_smoothing, 0.0, 1.0);
        clamp_field!(self.physics.max_normal_g, 0.0, f64::MAX);
        clamp_field!(self.physics.detach_threshold, 0.0, f64::MAX);
        clamp_field!(self.ejection.force_multiplier, 0.0, f64::MAX);
        clamp_field!(self.ejection.spin_range, 0.0, f64::MAX);
        self
    }
}
