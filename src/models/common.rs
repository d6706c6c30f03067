//! Envelope helpers shared by the typed models.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FsError;

/// Deserializes the object nested under `key` in a response body.
///
/// Single-resource responses look like `{"asset": {...}}`.
pub fn from_envelope<T>(body: Value, key: &str) -> Result<T, FsError>
where
    T: DeserializeOwned,
{
    match body {
        Value::Object(mut map) => {
            let inner = map.remove(key).ok_or_else(|| FsError::envelope(key))?;
            Ok(serde_json::from_value(inner)?)
        }
        _ => Err(FsError::envelope(key)),
    }
}

/// Deserializes every item of a listing page.
pub fn from_items<T>(items: Vec<Value>) -> Result<Vec<T>, FsError>
where
    T: DeserializeOwned,
{
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(FsError::from))
        .collect()
}
