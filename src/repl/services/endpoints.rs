//! # Endpoints
//!
//! Binds each server endpoint to its request and response types.

use super::http::{RemoteCallError, RequestBody};
use crate::repl::models::payloads::{
    AnalyzeRequest, AnalyzeResponse, BatchResponse, BatchUpload, StabilityRequest,
    StabilityResponse,
};
use serde::de::DeserializeOwned;

/// A POST endpoint of the analysis server
pub trait Endpoint: Send + Sync + 'static {
    /// Request payload handed to the controller
    type Request: Send + 'static;
    /// JSON body returned on success
    type Response: DeserializeOwned + Clone + Send + Sync + 'static;

    /// Path relative to the server base URL
    const PATH: &'static str;

    /// Encode a request payload as an HTTP body
    fn body(request: Self::Request) -> Result<RequestBody, RemoteCallError>;
}

/// `POST /api/analyze`
#[derive(Debug)]
pub struct Analyze;

impl Endpoint for Analyze {
    type Request = AnalyzeRequest;
    type Response = AnalyzeResponse;

    const PATH: &'static str = "/api/analyze";

    fn body(request: AnalyzeRequest) -> Result<RequestBody, RemoteCallError> {
        json_body(&request)
    }
}

/// `POST /api/stability`
#[derive(Debug)]
pub struct Stability;

impl Endpoint for Stability {
    type Request = StabilityRequest;
    type Response = StabilityResponse;

    const PATH: &'static str = "/api/stability";

    fn body(request: StabilityRequest) -> Result<RequestBody, RemoteCallError> {
        json_body(&request)
    }
}

/// `POST /api/upload_csv`
#[derive(Debug)]
pub struct UploadCsv;

impl UploadCsv {
    /// Multipart field carrying the file
    pub const FILE_FIELD: &'static str = "file";
}

impl Endpoint for UploadCsv {
    type Request = BatchUpload;
    type Response = BatchResponse;

    const PATH: &'static str = "/api/upload_csv";

    fn body(request: BatchUpload) -> Result<RequestBody, RemoteCallError> {
        Ok(RequestBody::File {
            field: Self::FILE_FIELD,
            file_name: request.file_name,
            mime: "text/csv",
            contents: request.contents,
        })
    }
}

fn json_body(request: &impl serde::Serialize) -> Result<RequestBody, RemoteCallError> {
    serde_json::to_value(request)
        .map(RequestBody::Json)
        .map_err(|e| RemoteCallError::Request(e.to_string()))
}
