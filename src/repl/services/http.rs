//! # HTTP Service
//!
//! Issues POST requests against the analysis server and classifies failures
//! into the remote-call error taxonomy.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;

/// Fixed message shown when the server cannot be reached at all
pub const CONNECTIVITY_MESSAGE: &str = "Cannot connect to server.";

/// Failures of a remote call, as surfaced to the user
#[derive(Debug, thiserror::Error)]
pub enum RemoteCallError {
    /// No HTTP response was received
    #[error("{}", CONNECTIVITY_MESSAGE)]
    Connectivity(#[source] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Server Error: {status}")]
    Server { status: u16 },

    /// The response body was not the expected JSON shape
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// The request could not be built or the response body could not be read
    #[error("{0}")]
    Request(String),
}

/// Body of an outgoing POST request
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON with an `application/json` content type
    Json(Value),
    /// Sent as `multipart/form-data` with a single file part
    File {
        field: &'static str,
        file_name: String,
        mime: &'static str,
        contents: Vec<u8>,
    },
}

/// Service for issuing requests against the analysis server
///
/// Holds no connection state between calls beyond what `reqwest` pools
/// internally; every call is a self-contained request.
#[derive(Debug, Clone)]
pub struct HttpService {
    client: Client,
    base_url: String,
}

impl HttpService {
    /// Create a new HttpService for the given server base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, RemoteCallError> {
        let base_url = base_url.into();
        tracing::debug!("Creating HttpService for {}", base_url);

        let client = Client::builder()
            .build()
            .map_err(|e| RemoteCallError::Request(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Full URL for an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST a body to `path` and return the raw response text of a 2xx response
    pub async fn post(&self, path: &str, body: RequestBody) -> Result<String, RemoteCallError> {
        let url = self.endpoint_url(path);
        tracing::debug!("POST {}", url);

        let builder = self.client.post(&url);
        let builder = match body {
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::File {
                field,
                file_name,
                mime,
                contents,
            } => {
                let part = Part::bytes(contents)
                    .file_name(file_name)
                    .mime_str(mime)
                    .map_err(|e| RemoteCallError::Request(e.to_string()))?;
                builder.multipart(Form::new().part(field, part))
            }
        };

        let response = builder.send().await.map_err(classify)?;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!("POST {} failed with status {}", url, status.as_u16());
            return Err(RemoteCallError::Server {
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(classify)
    }
}

/// Split transport failures into "no response at all" and everything else
fn classify(error: reqwest::Error) -> RemoteCallError {
    if error.is_connect() || error.is_timeout() || (error.is_request() && error.status().is_none())
    {
        tracing::error!("Connection to server failed: {}", error);
        RemoteCallError::Connectivity(error)
    } else {
        tracing::error!("HTTP request failed: {}", error);
        RemoteCallError::Request(error.to_string())
    }
}
