//! Processed orbit descriptors and the conic shape function.

use nalgebra::{Matrix3, Vector3};

use crate::constants::{Kilometer, Polyline, Radian, SimUnit, UnixMillis, DPI, KM_PER_UNIT};
use crate::constellation::Constellation;

/// Immutable, preprocessed description of one tracked object's orbit.
///
/// Built once per valid catalog record by
/// [`preprocess`](crate::preprocess::preprocess) and read every frame by
/// the position evaluator; never mutated afterwards.
///
/// Units:
/// * `semi_major_axis`: km
/// * `inclination`, `raan`, `arg_pericenter`, `mean_anomaly`: radians
/// * `mean_motion`: rad/s
/// * `epoch_millis`: milliseconds since the Unix epoch
#[derive(Debug, Clone)]
pub struct OrbitDescriptor {
    pub name: String,
    pub norad_cat_id: Option<u32>,
    pub classification: String,
    pub constellation: Constellation,

    pub semi_major_axis: Kilometer,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub raan: Radian,
    pub arg_pericenter: Radian,
    pub mean_motion: f64,
    /// Mean anomaly at epoch. Absent when the upstream record omitted it;
    /// only consumed by the optional epoch-alignment offset.
    pub mean_anomaly: Option<Radian>,
    pub epoch_millis: UnixMillis,

    /// Perifocal → inertial rotation, `Rz(Ω)·Rx(inc)·Rz(ω)`.
    pub rotation: Matrix3<f64>,

    /// Static closed polyline sampling one revolution, in simulation
    /// units and in the inertial frame (the scene tilt is applied by the
    /// consumer, once per point).
    pub polyline: Polyline,
}

impl OrbitDescriptor {
    /// Position on the orbit at true anomaly `nu`, in simulation units,
    /// inertial frame.
    ///
    /// Conic radius `r = a(1−e²)/(1+e·cos ν)`, evaluated in the perifocal
    /// plane and rotated with the precomputed matrix. Only the first two
    /// matrix columns contribute since the perifocal z component is zero.
    pub fn position_at_true_anomaly(&self, nu: Radian) -> Vector3<SimUnit> {
        let (sin_nu, cos_nu) = nu.sin_cos();

        let a = self.semi_major_axis;
        let e = self.eccentricity;
        let r_km = a * (1.0 - e * e) / (1.0 + e * cos_nu);

        let x_pf = r_km * cos_nu;
        let y_pf = r_km * sin_nu;

        let r = &self.rotation;
        Vector3::new(
            (r[(0, 0)] * x_pf + r[(0, 1)] * y_pf) / KM_PER_UNIT,
            (r[(1, 0)] * x_pf + r[(1, 1)] * y_pf) / KM_PER_UNIT,
            (r[(2, 0)] * x_pf + r[(2, 1)] * y_pf) / KM_PER_UNIT,
        )
    }

    /// Orbital period in seconds, `T = 2π/|n|`.
    pub fn period_seconds(&self) -> f64 {
        DPI / self.mean_motion.abs()
    }

    /// Sample `samples` equally spaced true anomalies over [0, 2π) and
    /// close the loop by repeating the first point.
    pub(crate) fn sample_polyline(&self, samples: usize) -> Polyline {
        let mut points = Vec::with_capacity(samples + 1);
        for i in 0..samples {
            let nu = DPI * (i as f64 / samples as f64);
            points.push(self.position_at_true_anomaly(nu));
        }
        if let Some(first) = points.first().copied() {
            points.push(first);
        }
        points
    }
}
