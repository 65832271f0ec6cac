//! Perifocal → inertial rotation builder and angle normalization.

use nalgebra::Matrix3;

use crate::constants::{Radian, DPI};

/// Build the perifocal→inertial rotation `Rz(Ω)·Rx(inc)·Rz(ω)` in closed
/// form (classical orbital-element rotation).
///
/// The perifocal frame has its x-axis toward periapsis and its z-axis
/// along the orbit normal. The returned matrix is a proper orthonormal
/// rotation for any input angles.
///
/// Arguments
/// ---------
/// * `raan`: right ascension of the ascending node Ω, radians
/// * `inc`: inclination, radians
/// * `arg_pericenter`: argument of pericenter ω, radians
pub(crate) fn perifocal_to_inertial(
    raan: Radian,
    inc: Radian,
    arg_pericenter: Radian,
) -> Matrix3<f64> {
    let (s_node, c_node) = raan.sin_cos();
    let (s_inc, c_inc) = inc.sin_cos();
    let (s_peri, c_peri) = arg_pericenter.sin_cos();

    Matrix3::new(
        c_node * c_peri - s_node * c_inc * s_peri,
        -c_node * s_peri - s_node * c_inc * c_peri,
        s_node * s_inc,
        s_node * c_peri + c_node * c_inc * s_peri,
        -s_node * s_peri + c_node * c_inc * c_peri,
        -c_node * s_inc,
        s_inc * s_peri,
        s_inc * c_peri,
        c_inc,
    )
}

/// Principal value of an angle in radians, in [0, 2π).
pub(crate) fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}
