//! Orbit preprocessor: raw element records → immutable orbit descriptors.
//!
//! Runs once at catalog load time. Each record is validated, converted to
//! SI-ish working units, classified, and equipped with its rotation matrix
//! and static orbit polyline. A record that fails any step is skipped with
//! a warning; the rest of the batch is unaffected.

use std::str::FromStr;

use hifitime::Epoch;
use tracing::{debug, warn};

use crate::constants::{DPI, MU_EARTH, RADEG, SECONDS_PER_DAY};
use crate::constellation::Constellation;
use crate::elements::RawElements;
use crate::errors::OrbitvizError;
use crate::frame::perifocal_to_inertial;
use crate::orbit::OrbitDescriptor;

/// Options controlling catalog preprocessing.
#[derive(Debug, Clone)]
pub struct PreprocessOptions {
    /// Interpret the record's mean motion as revolutions/day (the
    /// Celestrak convention). When false, it is taken as rad/s scaled by
    /// 2π (i.e. revolutions/second on the wire).
    pub mean_motion_revs_per_day: bool,
    /// Number of points sampling the static orbit polyline, exclusive of
    /// the closing duplicate.
    pub samples_for_line: usize,
    /// Stop once this many records were successfully processed. `None`
    /// means the whole catalog.
    pub max_elements: Option<usize>,
}

impl Default for PreprocessOptions {
    fn default() -> Self {
        Self {
            mean_motion_revs_per_day: true,
            samples_for_line: 256,
            max_elements: None,
        }
    }
}

/// Preprocess a catalog of raw element records.
///
/// Records are handled in input order; output order matches input order
/// among retained records. Scanning stops once the retained count reaches
/// `max_elements`. A record failing any step (missing or non-finite
/// field, unparseable epoch, degenerate mean motion, open orbit) is
/// logged at warn level and skipped; preprocessing never fails as a
/// whole.
pub fn preprocess(records: &[RawElements], options: &PreprocessOptions) -> Vec<OrbitDescriptor> {
    let limit = options.max_elements.unwrap_or(usize::MAX);
    let mut processed = Vec::with_capacity(records.len().min(limit));
    let mut skipped = 0usize;

    for el in records {
        if processed.len() >= limit {
            break;
        }
        match process_record(el, options) {
            Ok(descriptor) => processed.push(descriptor),
            Err(err) => {
                skipped += 1;
                warn!(record = %el.label(), %err, "skipping element record");
            }
        }
    }

    debug!(
        retained = processed.len(),
        skipped,
        scanned = processed.len() + skipped,
        "preprocessed element catalog"
    );
    processed
}

fn process_record(
    el: &RawElements,
    options: &PreprocessOptions,
) -> Result<OrbitDescriptor, OrbitvizError> {
    let object = el.label();

    let eccentricity = required(el.eccentricity, "ECCENTRICITY", &object)?;
    let inclination = required(el.inclination, "INCLINATION", &object)? * RADEG;
    let raan = required(el.ra_of_asc_node, "RA_OF_ASC_NODE", &object)? * RADEG;
    let arg_pericenter = required(el.arg_of_pericenter, "ARG_OF_PERICENTER", &object)? * RADEG;
    let mean_motion_raw = required(el.mean_motion, "MEAN_MOTION", &object)?;

    // Optional: only feeds the epoch-alignment phase offset.
    let mean_anomaly = el.mean_anomaly.filter(|m| m.is_finite()).map(|m| m * RADEG);

    if !(0.0..1.0).contains(&eccentricity) {
        return Err(OrbitvizError::EccentricityOutOfRange {
            eccentricity,
            object,
        });
    }

    let mean_motion = if options.mean_motion_revs_per_day {
        mean_motion_raw * DPI / SECONDS_PER_DAY
    } else {
        mean_motion_raw * DPI
    };
    if !mean_motion.is_finite() || mean_motion <= 0.0 {
        return Err(OrbitvizError::DegenerateMeanMotion {
            mean_motion: mean_motion_raw,
            object,
        });
    }

    // Kepler's third law, a = (μ/n²)^(1/3).
    let semi_major_axis = (MU_EARTH / (mean_motion * mean_motion)).cbrt();
    if !semi_major_axis.is_finite() {
        return Err(OrbitvizError::NonFiniteField {
            field: "MEAN_MOTION",
            object,
        });
    }

    let epoch_str = el
        .epoch
        .as_deref()
        .ok_or_else(|| OrbitvizError::MissingField {
            field: "EPOCH",
            object: object.clone(),
        })?;
    let epoch_millis = Epoch::from_str(epoch_str)
        .map_err(|e| OrbitvizError::UnparseableEpoch {
            epoch: epoch_str.to_string(),
            object: object.clone(),
            reason: e.to_string(),
        })?
        .to_unix_milliseconds();

    let mut descriptor = OrbitDescriptor {
        name: el.object_name.clone().unwrap_or_default(),
        norad_cat_id: el.norad_cat_id,
        classification: el.classification_type.clone().unwrap_or_default(),
        constellation: Constellation::from_object_name(el.object_name.as_deref()),
        semi_major_axis,
        eccentricity,
        inclination,
        raan,
        arg_pericenter,
        mean_motion,
        mean_anomaly,
        epoch_millis,
        rotation: perifocal_to_inertial(raan, inclination, arg_pericenter),
        polyline: Vec::new(),
    };
    descriptor.polyline = descriptor.sample_polyline(options.samples_for_line);

    Ok(descriptor)
}

fn required(value: Option<f64>, field: &'static str, object: &str) -> Result<f64, OrbitvizError> {
    let value = value.ok_or_else(|| OrbitvizError::MissingField {
        field,
        object: object.to_string(),
    })?;
    if !value.is_finite() {
        return Err(OrbitvizError::NonFiniteField {
            field,
            object: object.to_string(),
        });
    }
    Ok(value)
}
