//! # Controllers Module
//!
//! The remote call controller driving each endpoint, and the application
//! controller running the input loop.

pub mod app_controller;
pub mod remote_call;

// Re-export main types for convenience
pub use app_controller::AppController;
pub use remote_call::RemoteCallController;
