//! # Form Shell
//!
//! Panels, controllers and the line-oriented shell driving them.

pub mod command;
pub mod controllers;
pub mod io;
pub mod models;
pub mod services;
pub mod view_models;
pub mod views;

// Re-export core types
pub use command::{Command, CommandParseError, ResetTarget};
pub use controllers::{AppController, RemoteCallController};
pub use io::{LineSource, ScriptedLineSource, StdinLineSource};
pub use models::{
    CallPhase, ErrorClearPolicy, FieldSpec, FieldState, Form, RemoteCallState, ValidationRule,
};
pub use services::{Endpoint, HttpService, RemoteCallError, CONNECTIVITY_MESSAGE};
pub use view_models::{BatchPanel, EfficiencyPanel, Panels, StabilityPanel};
pub use views::ViewRenderer;
