use crate::config::Config;
use crate::error::Result;
use crate::http::{actions, HttpClient};
use crate::models::{FileDetails, HashList, LimitKey, SearchDetails, TypeCounts};
use crate::utils::decode_concatenated;
use std::path::Path;

/// Client for interacting with the MalShare API
pub struct Client {
    http_client: HttpClient,
}

impl Client {
    /// Create a new client with the given configuration.
    ///
    /// Fails with [`crate::Error::InvalidConfig`] when the API key is empty. No
    /// request is made here.
    pub fn new(config: Config) -> Result<Self> {
        let http_client = HttpClient::new(config)?;
        Ok(Self { http_client })
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// List hashes of samples added in the past 24 hours
    pub async fn get_list_of_hash_24(&self) -> Result<Vec<HashList>> {
        self.http_client.get(actions::GET_LIST, &[]).await
    }

    /// List hashes of samples of one file type (e.g. `PE32`) added in the past 24 hours
    pub async fn get_list_of_hash_24_type(&self, file_type: &str) -> Result<Vec<HashList>> {
        self.http_client
            .get(actions::TYPE, &[("type", file_type)])
            .await
    }

    /// List sample sources seen in the past 24 hours
    pub async fn get_list_of_sources_24(&self) -> Result<Vec<String>> {
        self.http_client.get(actions::GET_SOURCES, &[]).await
    }

    /// Count samples per file type over the past 24 hours
    pub async fn get_list_of_types_file_24(&self) -> Result<TypeCounts> {
        self.http_client.get(actions::GET_TYPES, &[]).await
    }

    /// Get the daily request allocation and what remains of it
    pub async fn get_limit_key(&self) -> Result<LimitKey> {
        self.http_client.get(actions::GET_LIMIT, &[]).await
    }

    /// Get stored details of a sample by MD5, SHA-1 or SHA-256
    pub async fn get_stored_file_details(&self, hash: &str) -> Result<FileDetails> {
        self.http_client
            .get(actions::DETAILS, &[("hash", hash)])
            .await
    }

    /// Search samples by hash, source or file name.
    ///
    /// The service answers with records written back to back rather than a
    /// JSON array; a malformed record fails the whole search.
    pub async fn get_search_result(&self, query: &str) -> Result<Vec<SearchDetails>> {
        let body = self
            .http_client
            .query(actions::SEARCH, &[("query", query)])
            .await?;
        decode_concatenated(&body)
    }

    /// Download the raw bytes stored for a hash.
    ///
    /// Unknown hashes still return whatever payload the service sends.
    pub async fn download_file_from_hash(&self, hash: &str) -> Result<Vec<u8>> {
        self.http_client
            .query(actions::GET_FILE, &[("hash", hash)])
            .await
    }

    /// Upload a local file as a new sample.
    ///
    /// `Ok(())` only means the request went through; the service does not
    /// report whether the sample was accepted.
    pub async fn upload_file(&self, file_path: impl AsRef<Path>) -> Result<()> {
        self.http_client.upload_file(file_path.as_ref()).await
    }
}
