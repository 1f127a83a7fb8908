//! # Services Layer
//!
//! Transport to the analysis server. The HTTP service knows nothing about
//! forms or lifecycle state; endpoints bind typed payloads to paths.

pub mod endpoints;
pub mod http;

// Re-export service types
pub use endpoints::{Analyze, Endpoint, Stability, UploadCsv};
pub use http::{HttpService, RemoteCallError, RequestBody, CONNECTIVITY_MESSAGE};
