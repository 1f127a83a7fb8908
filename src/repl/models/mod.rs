//! # Models
//!
//! Plain state owned by the panels: form fields, remote call lifecycle and
//! the typed payloads exchanged with the server.

pub mod form;
pub mod payloads;
pub mod remote_call_state;
pub mod validation;

pub use form::{ErrorClearPolicy, FieldSpec, FieldState, Form, UnknownField};
pub use payloads::{
    AnalyzeRequest, AnalyzeResponse, BatchResponse, BatchRow, BatchUpload, StabilityRequest,
    StabilityResponse,
};
pub use remote_call_state::{CallPhase, RemoteCallState};
pub use validation::{parse_number, ValidationRule, NOT_A_NUMBER, NOT_POSITIVE};
