use crate::my_float::Fpt;

/// What the integrator saw on a cart's most recent tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CartInfo {
    pub tangent_angle: Fpt,
    pub segment_index: usize,
    pub curvature: Fpt,
    pub tangential_accel: Fpt,
    pub normal_accel: Fpt,
    pub g_instant: Fpt,
    pub ticks: u64,
}

impl CartInfo {
    pub fn description(&self) -> String {
        format!(
            "angle: {:.1}deg\nsegment: {}\nkappa: {:.5}\na_t: {:.1}\na_n: {:.1}\ng: {:.2}\nticks: {}",
            self.tangent_angle.to_degrees(),
            self.segment_index,
            self.curvature,
            self.tangential_accel,
            self.normal_accel,
            self.g_instant,
            self.ticks,
        )
    }
}
