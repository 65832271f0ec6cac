//! Raw orbital element records as delivered by the catalog source.
//!
//! Field names follow the Celestrak OMM JSON wire format. Every payload
//! field is optional at this level: validation is the preprocessor's job,
//! so a single incomplete record cannot fail the deserialization of a
//! whole catalog.

use serde::{Deserialize, Deserializer};

/// One tracked object's orbital elements, as supplied upstream.
///
/// Units on the wire:
/// * `inclination`, `ra_of_asc_node`, `arg_of_pericenter`, `mean_anomaly`: degrees
/// * `mean_motion`: revolutions/day (or rad/s, depending on
///   [`PreprocessOptions`](crate::preprocess::PreprocessOptions))
/// * `epoch`: ISO-8601 timestamp string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawElements {
    #[serde(rename = "OBJECT_NAME", default)]
    pub object_name: Option<String>,

    #[serde(rename = "NORAD_CAT_ID", default, deserialize_with = "flexible_u32")]
    pub norad_cat_id: Option<u32>,

    #[serde(rename = "CLASSIFICATION_TYPE", default)]
    pub classification_type: Option<String>,

    #[serde(rename = "ECCENTRICITY", default, deserialize_with = "flexible_f64")]
    pub eccentricity: Option<f64>,

    #[serde(rename = "INCLINATION", default, deserialize_with = "flexible_f64")]
    pub inclination: Option<f64>,

    #[serde(rename = "RA_OF_ASC_NODE", default, deserialize_with = "flexible_f64")]
    pub ra_of_asc_node: Option<f64>,

    #[serde(rename = "ARG_OF_PERICENTER", default, deserialize_with = "flexible_f64")]
    pub arg_of_pericenter: Option<f64>,

    #[serde(rename = "MEAN_ANOMALY", default, deserialize_with = "flexible_f64")]
    pub mean_anomaly: Option<f64>,

    #[serde(rename = "MEAN_MOTION", default, deserialize_with = "flexible_f64")]
    pub mean_motion: Option<f64>,

    #[serde(rename = "EPOCH", default)]
    pub epoch: Option<String>,
}

impl RawElements {
    /// Label used in diagnostics when a record has to be skipped.
    pub(crate) fn label(&self) -> String {
        match (&self.object_name, self.norad_cat_id) {
            (Some(name), _) if !name.is_empty() => name.clone(),
            (_, Some(id)) => format!("NORAD {id}"),
            _ => "<unnamed>".to_string(),
        }
    }
}

/// Accept a numeric field encoded either as a JSON number or as a numeric
/// string; upstream GP exports use both.
///
/// A string that fails to parse maps to a NaN marker rather than `None`,
/// so the preprocessor reports the field as malformed instead of missing.
/// Erroring here would fail the whole catalog array, which one bad record
/// must never do.
fn flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(v)) => Ok(Some(v)),
        Some(NumberOrString::String(s)) => match s.trim().parse::<f64>() {
            Ok(v) => Ok(Some(v)),
            Err(_) => Ok(Some(f64::NAN)),
        },
    }
}

fn flexible_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(flexible_f64(deserializer)?
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u32))
}
