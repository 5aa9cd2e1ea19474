//! Pre-flight validation of required parameters.
//!
//! A key is *missing* when it is absent from the serialized input. `Option` fields set to
//! `None` are skipped when serialized and therefore count as missing, while an explicit
//! JSON `null` is considered present.

use crate::error::{ApiError, Error};
use serde::Serialize;

/// Checks that all the `required_keys` are present in `input`.
///
/// `input` must serialize to a JSON object; any other shape is treated as an empty object.
/// On failure, a single `InvalidArgumentError` listing every missing key is returned.
pub fn validate<T>(input: &T, required_keys: &[&str]) -> Result<(), Error>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(input).map_err(|e| Error::Other(e.into()))?;
    let object = value.as_object();

    require(
        required_keys
            .iter()
            .map(|key| (*key, object.map_or(false, |o| o.contains_key(*key)))),
    )
}

/// Fails with an `InvalidArgumentError` naming every key whose presence flag is `false`,
/// in the order they are given.
pub fn require<'a>(fields: impl IntoIterator<Item = (&'a str, bool)>) -> Result<(), Error> {
    let missing = fields
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(key, _)| key)
        .collect::<Vec<_>>();

    if missing.is_empty() {
        return Ok(());
    }

    Err(ApiError::invalid_argument(format!("Missing params: {}", missing.join(", "))).into())
}
