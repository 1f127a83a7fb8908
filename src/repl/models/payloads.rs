//! Typed request and response bodies, one pair per endpoint.
//!
//! Field values are forwarded exactly as typed; the server does the numeric
//! conversion.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/analyze`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub substrate_concentration: String,
    pub cost: String,
}

/// Result of `POST /api/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub velocity: f64,
    pub efficiency: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `POST /api/stability`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityRequest {
    pub temperature: String,
    #[serde(rename = "pH")]
    pub ph: String,
}

/// Result of `POST /api/stability`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityResponse {
    pub result: String,
}

/// A CSV file to be uploaded to `POST /api/upload_csv`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchUpload {
    pub file_name: String,
    pub contents: Vec<u8>,
}

/// One analyzed row of a batch upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchRow {
    /// Substrate concentration
    pub s: f64,
    /// Cost
    pub c: f64,
    /// Efficiency
    pub eff: f64,
}

/// Result of `POST /api/upload_csv`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResponse {
    pub results: Vec<BatchRow>,
}
