use crate::utils::{null_as_default, string_or_number};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sample counts keyed by file type, as returned by the `gettypes` action
pub type TypeCounts = HashMap<String, u64>;

/// Hashes identifying a sample.
///
/// The service is inconsistent about key casing (`md5` in listings, `MD5` in
/// details), so both spellings are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HashList {
    /// MD5 digest
    #[serde(default, deserialize_with = "null_as_default", alias = "MD5")]
    pub md5: String,

    /// SHA-1 digest
    #[serde(default, deserialize_with = "null_as_default", alias = "SHA1")]
    pub sha1: String,

    /// SHA-256 digest
    #[serde(default, deserialize_with = "null_as_default", alias = "SHA256")]
    pub sha256: String,
}

/// Stored file details returned by the `details` action
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FileDetails {
    #[serde(flatten)]
    pub hashes: HashList,

    /// Fuzzy hash of the sample
    #[serde(default, deserialize_with = "null_as_default", alias = "SSDEEP")]
    pub ssdeep: String,

    /// Detected file type
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename = "f_type",
        alias = "F_TYPE"
    )]
    pub file_type: String,

    /// Source names the sample was collected from
    #[serde(default, deserialize_with = "null_as_default", alias = "SOURCES")]
    pub sources: Vec<String>,
}

/// Detection rule names matched by a sample
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct YaraHits {
    #[serde(default, deserialize_with = "null_as_default")]
    pub yara: Vec<String>,
}

/// One record of a `search` response
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct SearchDetails {
    #[serde(flatten)]
    pub hashes: HashList,

    /// Sample type
    #[serde(default, deserialize_with = "null_as_default", rename = "type")]
    pub sample_type: String,

    /// Unix timestamp the sample was added
    #[serde(default, deserialize_with = "null_as_default")]
    pub added: u64,

    /// Source the sample came from
    #[serde(default, deserialize_with = "null_as_default")]
    pub source: String,

    #[serde(default, deserialize_with = "null_as_default", rename = "yarahits")]
    pub yara_hits: YaraHits,

    /// Parent file references; the service gives them no fixed shape
    #[serde(default, deserialize_with = "null_as_default", rename = "parentfiles")]
    pub parent_files: Vec<serde_json::Value>,

    /// Child file references; the service gives them no fixed shape
    #[serde(default, deserialize_with = "null_as_default", rename = "subfiles")]
    pub sub_files: Vec<serde_json::Value>,
}

/// Request quota for the current API key.
///
/// An empty `limit` usually means the key was rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitKey {
    /// Requests allocated per day
    #[serde(default, deserialize_with = "string_or_number")]
    pub limit: String,

    /// Requests remaining today
    #[serde(default, deserialize_with = "string_or_number")]
    pub remaining: String,
}
