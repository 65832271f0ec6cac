use thiserror::Error;

/// Errors raised while loading catalogs or preprocessing element records.
///
/// Preprocessing errors are per-record: the batch loop logs them and moves
/// on, so none of these ever aborts a whole catalog.
#[derive(Error, Debug)]
pub enum OrbitvizError {
    #[error("Missing field '{field}' in element record '{object}'")]
    MissingField {
        field: &'static str,
        object: String,
    },

    #[error("Malformed or non-finite value for field '{field}' in element record '{object}'")]
    NonFiniteField {
        field: &'static str,
        object: String,
    },

    #[error("Unparseable epoch '{epoch}' in element record '{object}': {reason}")]
    UnparseableEpoch {
        epoch: String,
        object: String,
        reason: String,
    },

    #[error("Degenerate mean motion {mean_motion} (must be finite and positive) in element record '{object}'")]
    DegenerateMeanMotion { mean_motion: f64, object: String },

    #[error("Eccentricity {eccentricity} out of range [0, 1) in element record '{object}'")]
    EccentricityOutOfRange { eccentricity: f64, object: String },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid element catalog JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}
