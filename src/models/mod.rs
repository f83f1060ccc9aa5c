pub mod admin;
pub mod draw;
pub mod influencer;
pub mod profile;
pub mod promotion;
pub mod winner;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::upstream::UpstreamError;

/// Decode upstream rows into typed records. One bad row fails the batch.
pub fn decode_rows<T: DeserializeOwned>(rows: Vec<Value>) -> Result<Vec<T>, UpstreamError> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::from_value(row).map_err(|err| UpstreamError::Decode(format!("row {index}: {err}")))
        })
        .collect()
}
