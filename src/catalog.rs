//! Loading element catalogs from Celestrak-style JSON arrays.
//!
//! Only the local-file and in-memory variants live here; fetching a
//! catalog over the network is the embedding application's business.

use camino::Utf8Path;

use crate::elements::RawElements;
use crate::errors::OrbitvizError;

/// Parse a JSON array of element records.
pub fn elements_from_json_str(json: &str) -> Result<Vec<RawElements>, OrbitvizError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a catalog file.
pub fn elements_from_json_file(path: &Utf8Path) -> Result<Vec<RawElements>, OrbitvizError> {
    let json = std::fs::read_to_string(path)?;
    elements_from_json_str(&json)
}
