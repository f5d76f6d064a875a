use crate::config::Config;
use crate::error::{Error, Result};
use crate::utils::api_url;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, ClientBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::path::Path;
use url::Url;

/// Values of the `action` query parameter
pub mod actions {
    /// Hashes added in the past 24 hours
    pub const GET_LIST: &str = "getlist";
    /// Hashes of one file type added in the past 24 hours
    pub const TYPE: &str = "type";
    /// Sample sources seen in the past 24 hours
    pub const GET_SOURCES: &str = "getsources";
    /// File type counts for the past 24 hours
    pub const GET_TYPES: &str = "gettypes";
    /// Quota of the current key
    pub const GET_LIMIT: &str = "getlimit";
    /// Stored file details
    pub const DETAILS: &str = "details";
    /// Free-text sample search
    pub const SEARCH: &str = "search";
    /// Raw sample download
    pub const GET_FILE: &str = "getfile";
    /// Multipart sample upload
    pub const UPLOAD: &str = "upload";
}

/// Multipart field the service reads uploads from
pub const UPLOAD_FIELD: &str = "upload";

const USER_AGENT: &str = concat!("malshare-rs/", env!("CARGO_PKG_VERSION"));

/// HTTP client for making API requests
pub struct HttpClient {
    client: ReqwestClient,
    config: Config,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = config.get_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        let base_url = config.get_base_url();

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    /// Base URL requests are sent to, always ending with `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, action: &str, params: &[(&str, &str)]) -> Result<Url> {
        api_url(&self.base_url, &self.config.api_key, action, params)
    }

    /// Issue a GET for an action and return the whole body unmodified
    pub async fn query(&self, action: &str, params: &[(&str, &str)]) -> Result<Vec<u8>> {
        let url = self.endpoint(action, params)?;
        debug!("GET {} action={}", url.path(), action);

        let request = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .build()?;

        let response = self.client.execute(request).await?;
        let response = self.check_response(action, response).await?;
        let body = response.bytes().await?;
        debug!("action={} returned {} bytes", action, body.len());

        Ok(body.to_vec())
    }

    /// Issue a GET for an action and decode the body as a single JSON document
    pub async fn get<T: DeserializeOwned>(&self, action: &str, params: &[(&str, &str)]) -> Result<T> {
        let body = self.query(action, params).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Upload a local file as a multipart form
    pub async fn upload_file(&self, file_path: &Path) -> Result<()> {
        // Read before touching the network so a bad path never produces a request
        let file_content = tokio::fs::read(file_path).await?;

        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or(UPLOAD_FIELD)
            .to_string();

        let part = Part::bytes(file_content)
            .file_name(file_name)
            .mime_str("application/octet-stream")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        let url = self.endpoint(actions::UPLOAD, &[])?;
        debug!("POST {} action={}", url.path(), actions::UPLOAD);

        // reqwest writes the Content-Type header itself, boundary included
        let request = self.client.post(url).multipart(form).build()?;

        let response = self.client.execute(request).await?;
        let response = self.check_response(actions::UPLOAD, response).await?;
        response.bytes().await?;

        Ok(())
    }

    /// Apply the configured status policy to a response
    async fn check_response(&self, action: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if !self.config.check_status {
            warn!("action={} returned HTTP {}", action, status);
            return Ok(response);
        }

        let body = response.text().await?;
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(Error::Unauthorized(format!("HTTP {status}: {}", body.trim())))
            }
            StatusCode::NOT_FOUND => Err(Error::NotFound),
            _ => Err(Error::ServerError(format!("HTTP {status}: {}", body.trim()))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn config_for(server: &mockito::Server, check_status: bool) -> Config {
        Config {
            api_key: "test_api_key".to_string(),
            base_url: Some(server.url()),
            check_status,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_query_sends_key_action_and_headers() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", Matcher::Regex(r"^/api\.php".to_string()))
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("api_key".into(), "test_api_key".into()),
                Matcher::UrlEncoded("action".into(), "getfile".into()),
                Matcher::UrlEncoded("hash".into(), "abc".into()),
            ]))
            .match_header("content-type", "application/json")
            .match_header("user-agent", USER_AGENT)
            .with_status(200)
            .with_body("MZ\x00\x01")
            .create_async()
            .await;

        let client = HttpClient::new(config_for(&server, false)).unwrap();
        let body = client.query(actions::GET_FILE, &[("hash", "abc")]).await.unwrap();

        assert_eq!(body, b"MZ\x00\x01");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_permissive_status_passes_body_through() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("GET", Matcher::Regex(r"^/api\.php".to_string()))
            .match_query(Matcher::Any)
            .with_status(404)
            .with_body("Sample not found by hash")
            .create_async()
            .await;

        let client = HttpClient::new(config_for(&server, false)).unwrap();
        let body = client.query(actions::GET_FILE, &[("hash", "missing")]).await.unwrap();

        assert_eq!(body, b"Sample not found by hash");
    }

    #[tokio::test]
    async fn test_strict_status_maps_errors() {
        let mut server = mockito::Server::new_async().await;

        let _unauthorized = server
            .mock("GET", Matcher::Regex(r"^/api\.php".to_string()))
            .match_query(Matcher::UrlEncoded("action".into(), "getlimit".into()))
            .with_status(401)
            .with_body("ERROR! => Account not activated")
            .create_async()
            .await;

        let _not_found = server
            .mock("GET", Matcher::Regex(r"^/api\.php".to_string()))
            .match_query(Matcher::UrlEncoded("action".into(), "getfile".into()))
            .with_status(404)
            .create_async()
            .await;

        let _server_error = server
            .mock("GET", Matcher::Regex(r"^/api\.php".to_string()))
            .match_query(Matcher::UrlEncoded("action".into(), "getlist".into()))
            .with_status(500)
            .with_body("database unavailable\n")
            .create_async()
            .await;

        let client = HttpClient::new(config_for(&server, true)).unwrap();

        match client.query(actions::GET_LIMIT, &[]).await.unwrap_err() {
            Error::Unauthorized(msg) => {
                assert_eq!(msg, "HTTP 401 Unauthorized: ERROR! => Account not activated")
            }
            err => panic!("Unexpected error: {:?}", err),
        }

        match client.query(actions::GET_FILE, &[("hash", "x")]).await.unwrap_err() {
            Error::NotFound => {}
            err => panic!("Unexpected error: {:?}", err),
        }

        match client.query(actions::GET_LIST, &[]).await.unwrap_err() {
            Error::ServerError(msg) => {
                assert_eq!(msg, "HTTP 500 Internal Server Error: database unavailable")
            }
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[tokio::test]
    async fn test_connection_failure_is_request_error() {
        // Nothing listens on port 9 of the loopback interface
        let client = HttpClient::new(Config {
            api_key: "test_api_key".to_string(),
            base_url: Some("http://127.0.0.1:9/".to_string()),
            ..Default::default()
        })
        .unwrap();

        match client.query(actions::GET_LIST, &[]).await.unwrap_err() {
            Error::RequestError(_) => {}
            err => panic!("Unexpected error: {:?}", err),
        }
    }

    #[tokio::test]
    async fn test_unparseable_base_url_fails_per_request() {
        let client = HttpClient::new(Config {
            api_key: "test_api_key".to_string(),
            base_url: Some("::not-a-url::".to_string()),
            ..Default::default()
        })
        .unwrap();

        match client.query(actions::GET_LIST, &[]).await.unwrap_err() {
            Error::InvalidRequest(_) => {}
            err => panic!("Unexpected error: {:?}", err),
        }
    }
}
