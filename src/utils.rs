use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use url::Url;

/// Endpoint every action is served from, relative to the base URL
pub const API_PATH: &str = "api.php";

/// Build the endpoint URL for an action.
///
/// `base_url` must end with `/`; see [`crate::Config::get_base_url`].
pub fn api_url(base_url: &str, api_key: &str, action: &str, params: &[(&str, &str)]) -> Result<Url> {
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(e) => return Err(Error::InvalidRequest(format!("Invalid URL {base_url}: {e}"))),
    };

    match base.scheme() {
        "http" | "https" => {}
        _ => {
            return Err(Error::InvalidRequest(
                "URL must use http or https scheme".to_string(),
            ))
        }
    }

    let mut url = base
        .join(API_PATH)
        .map_err(|e| Error::InvalidRequest(format!("Invalid URL {base_url}: {e}")))?;

    {
        let mut query = url.query_pairs_mut();
        query.append_pair("api_key", api_key).append_pair("action", action);
        for (name, value) in params {
            query.append_pair(name, value);
        }
    }

    Ok(url)
}

/// Decode a body made of JSON documents written back to back with no
/// enclosing array.
///
/// Stops cleanly at end of input. Any other failure aborts the whole decode.
pub fn decode_concatenated<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<T>()
        .map(|record| record.map_err(Error::from))
        .collect()
}

/// Treat an explicit JSON `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(serde_json::Number),
}

/// Accept a JSON string, number or null where a string field is expected.
pub fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrNumber>::deserialize(deserializer)? {
        Some(StringOrNumber::String(s)) => s,
        Some(StringOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
