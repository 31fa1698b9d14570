//! Deep copy through a serde round-trip

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{ModelError, Result};

/// Rebuild `input` from its serialized form.
///
/// Every map and collection in the result is freshly allocated, so the copy
/// shares nothing with `input`. Fields marked `#[serde(skip)]` come back as
/// their defaults. Either the whole copy succeeds or [`ModelError::Copy`] is
/// returned.
pub(crate) fn copy_obj<T>(input: &T) -> Result<T>
where
    T: Serialize + DeserializeOwned,
{
    let value = serde_json::to_value(input).map_err(|e| ModelError::Copy(e.to_string()))?;
    serde_json::from_value(value).map_err(|e| ModelError::Copy(e.to_string()))
}
