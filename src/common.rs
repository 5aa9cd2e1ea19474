use crate::Error;
use serde::Serialize;
use serde_json::Value;
use urlencoding::encode;

// Default API URLs
pub static DEFAULT_API_URL: &str = "https://services.poynt.net";
pub static DEFAULT_CI_API_URL: &str = "https://services-ci.poynt.net";
pub static DEFAULT_ST_API_URL: &str = "https://services-st.poynt.net";
pub static DEFAULT_EU_API_URL: &str = "https://services-eu.poynt.net";

// Default WEB URLs
pub static DEFAULT_WEB_URL: &str = "https://poynt.net";
pub static DEFAULT_DEV_WEB_URL: &str = "https://local.poynt.net";
pub static DEFAULT_CI_WEB_URL: &str = "https://ci.poynt.net";
pub static DEFAULT_ST_WEB_URL: &str = "https://st.poynt.net";
pub static DEFAULT_EU_WEB_URL: &str = "https://eu.poynt.net";

// Header names
pub static REQUEST_ID_HEADER: &str = "Poynt-Request-Id";
pub static API_VERSION_HEADER: &str = "Api-Version";

pub static API_VERSION: &str = "1.2";
pub static DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Builds a query string out of the serialized `params`, skipping the keys in `exclude`.
///
/// Arrays are encoded as repeated keys, `null` as an empty value and nested objects are dropped.
pub(crate) fn query_string<T>(params: &T, exclude: &[&str]) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(params).map_err(|e| Error::Other(e.into()))?;
    let mut pairs = Vec::new();

    if let Value::Object(map) = value {
        for (key, value) in map.iter().filter(|(k, _)| !exclude.contains(&k.as_str())) {
            match value {
                Value::Array(items) => {
                    for item in items {
                        pairs.push(format!("{}={}", encode(key), encode(&scalar(item))));
                    }
                }
                Value::Object(_) => {}
                value => pairs.push(format!("{}={}", encode(key), encode(&scalar(value)))),
            }
        }
    }

    Ok(pairs.join("&"))
}

/// Appends a query string to `path`, always adding the `?` separator.
pub(crate) fn with_query<T>(path: String, params: &T, exclude: &[&str]) -> Result<String, Error>
where
    T: Serialize + ?Sized,
{
    Ok(format!("{}?{}", path, query_string(params, exclude)?))
}

/// String form of a JSON value as used in query strings and lookup keys.
pub(crate) fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
