//! Per-frame position evaluation.
//!
//! The evaluator maps wall-clock time to an orbital phase angle and feeds
//! it to the conic shape function. The phase advances linearly at the mean
//! angular rate: true anomaly is *not* obtained by solving Kepler's
//! equation. That is visually adequate for the near-circular constellation
//! orbits this crate targets and physically inexact for eccentric ones;
//! it is the intended behavior, not a shortcut to fix.

use nalgebra::Vector3;

use crate::constants::{Radian, SimUnit, UnixMillis, DPI};
use crate::frame::principal_angle;
use crate::orbit::OrbitDescriptor;

/// Options for one evaluation call.
#[derive(Debug, Clone)]
pub struct EvalOptions {
    /// Reference instant overriding the descriptor's own epoch.
    pub t0_millis: Option<UnixMillis>,
    /// Scales the elapsed-time-to-phase mapping (simulation speed-up).
    pub speed_multiplier: f64,
    /// Offset the phase by the descriptor's mean anomaly at epoch, so
    /// that objects of one constellation spread over their orbits instead
    /// of all starting at periapsis. Descriptors without a stored mean
    /// anomaly get a zero offset.
    pub align_with_mean_anomaly: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            t0_millis: None,
            speed_multiplier: 1.0,
            align_with_mean_anomaly: false,
        }
    }
}

/// Instantaneous position at `t_millis`, in simulation units, inertial
/// frame.
///
/// Stateless and side-effect-free: safe to call once per displayed object
/// per animation frame.
pub fn position_at_time(
    descriptor: &OrbitDescriptor,
    t_millis: UnixMillis,
    options: &EvalOptions,
) -> Vector3<SimUnit> {
    descriptor.position_at_true_anomaly(true_anomaly_at_time(descriptor, t_millis, options))
}

/// Linear phase law: `f = frac(dt/T × speed)`, optionally shifted by the
/// mean-anomaly fraction, then `ν = 2π·f`.
fn true_anomaly_at_time(
    descriptor: &OrbitDescriptor,
    t_millis: UnixMillis,
    options: &EvalOptions,
) -> Radian {
    let epoch_millis = options.t0_millis.unwrap_or(descriptor.epoch_millis);

    let period = descriptor.period_seconds();
    let dt = (t_millis - epoch_millis) / 1000.0;

    let mut f = (dt / period * options.speed_multiplier).rem_euclid(1.0);
    if options.align_with_mean_anomaly {
        if let Some(m0) = descriptor.mean_anomaly {
            f = (f + principal_angle(m0) / DPI).rem_euclid(1.0);
        }
    }

    DPI * f
}

#[cfg(test)]
mod propagation_test {
    use super::*;
    use crate::orbit::orbit_test::circular_descriptor;

    #[test]
    fn test_position_at_epoch_starts_at_periapsis() {
        let desc = circular_descriptor(7000.0);
        let at_epoch = position_at_time(&desc, desc.epoch_millis, &EvalOptions::default());
        assert!((at_epoch - desc.position_at_true_anomaly(0.0)).norm() < 1e-12);
    }

    #[test]
    fn test_periodicity() {
        let desc = circular_descriptor(7000.0);
        let options = EvalOptions::default();
        let period_millis = desc.period_seconds() * 1000.0;

        for t in [0.0, 123_456.0, 98_765_432.0] {
            let p = position_at_time(&desc, t, &options);
            let p_next = position_at_time(&desc, t + period_millis, &options);
            assert!((p - p_next).norm() < 1e-9, "not periodic at t={t}");
        }
    }

    #[test]
    fn test_periodicity_with_speed_multiplier() {
        let desc = circular_descriptor(7000.0);
        let options = EvalOptions {
            speed_multiplier: 4.0,
            ..Default::default()
        };
        let scaled_period_millis = desc.period_seconds() * 1000.0 / 4.0;

        let p = position_at_time(&desc, 5000.0, &options);
        let p_next = position_at_time(&desc, 5000.0 + scaled_period_millis, &options);
        assert!((p - p_next).norm() < 1e-9);
    }

    #[test]
    fn test_quarter_period_advances_quarter_turn() {
        let desc = circular_descriptor(7000.0);
        let quarter_millis = desc.period_seconds() * 250.0;

        let p = position_at_time(&desc, quarter_millis, &EvalOptions::default());
        let expected = desc.position_at_true_anomaly(DPI / 4.0);
        assert!((p - expected).norm() < 1e-9);
    }

    #[test]
    fn test_phase_fraction_stays_in_range_before_epoch() {
        let desc = circular_descriptor(7000.0);
        // Times earlier than the epoch still yield a phase in [0, 2π).
        let nu = true_anomaly_at_time(&desc, -1.0e12, &EvalOptions::default());
        assert!((0.0..DPI).contains(&nu), "nu = {nu}");
    }

    #[test]
    fn test_mean_anomaly_alignment_offsets_phase() {
        let mut desc = circular_descriptor(7000.0);
        desc.mean_anomaly = Some(std::f64::consts::PI);
        let options = EvalOptions {
            align_with_mean_anomaly: true,
            ..Default::default()
        };

        let p = position_at_time(&desc, desc.epoch_millis, &options);
        let expected = desc.position_at_true_anomaly(std::f64::consts::PI);
        assert!((p - expected).norm() < 1e-9);
    }

    #[test]
    fn test_alignment_normalizes_negative_mean_anomaly() {
        let mut desc = circular_descriptor(7000.0);
        desc.mean_anomaly = Some(-std::f64::consts::FRAC_PI_2);
        let options = EvalOptions {
            align_with_mean_anomaly: true,
            ..Default::default()
        };

        let p = position_at_time(&desc, desc.epoch_millis, &options);
        let expected = desc.position_at_true_anomaly(1.5 * std::f64::consts::PI);
        assert!((p - expected).norm() < 1e-9);
    }

    #[test]
    fn test_alignment_without_mean_anomaly_is_zero_offset() {
        let mut desc = circular_descriptor(7000.0);
        desc.mean_anomaly = None;
        let aligned = EvalOptions {
            align_with_mean_anomaly: true,
            ..Default::default()
        };

        let p = position_at_time(&desc, 42_000.0, &aligned);
        let p_plain = position_at_time(&desc, 42_000.0, &EvalOptions::default());
        assert_eq!(p, p_plain);
    }

    #[test]
    fn test_t0_override_shifts_reference_epoch() {
        let mut desc = circular_descriptor(7000.0);
        desc.epoch_millis = 1.0e9;
        let options = EvalOptions {
            t0_millis: Some(0.0),
            ..Default::default()
        };

        let quarter_millis = desc.period_seconds() * 250.0;
        let p = position_at_time(&desc, quarter_millis, &options);
        let expected = desc.position_at_true_anomaly(DPI / 4.0);
        assert!((p - expected).norm() < 1e-9);
    }
}
