use crate::my_float::Fpt;

/// Uniform Catmull-Rom basis
/// Rows are the `t^3, t^2, t, 1` coefficients, columns the control points
/// `p0..p3`.
#[rustfmt::skip]
pub fn catmull_rom_matrix() -> na::Matrix4<Fpt> {
    na::Matrix4::new(
        -0.5,  1.5, -1.5,  0.5,
         1.0, -2.5,  2.0, -0.5,
        -0.5,  0.0,  0.5,  0.0,
         0.0,  1.0,  0.0,  0.0,
    )
}

/// Blending weights `f1..f4` of the four control points at `t`
pub fn weights(m: &na::Matrix4<Fpt>, t: Fpt) -> na::RowVector4<Fpt> {
    let powers = na::RowVector4::new(t * t * t, t * t, t, 1.0);
    powers * m
}
