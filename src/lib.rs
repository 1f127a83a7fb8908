//! # BioLine - Terminal Front End for the Efficiency Analysis API
//!
//! Collects lab parameters (substrate concentration, cost, temperature, pH or
//! a CSV batch file), validates them as they are typed and forwards them to the
//! remote analysis server, rendering whatever the server returns.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   Commands   ┌──────────────┐    calls     ┌──────────────────────┐
//! │ LineSource  │─────────────▶│ AppController│─────────────▶│ Panels (view models) │
//! └─────────────┘              └──────┬───────┘              │  Form + RemoteCall   │
//!                                     │ render               └──────────┬───────────┘
//!                                     ▼                                 │ POST
//!                              ┌──────────────┐              ┌──────────▼───────────┐
//!                              │ ViewRenderer │              │     HttpService      │
//!                              └──────────────┘              └──────────────────────┘
//! ```

pub mod cmd_args;
pub mod config;
pub mod repl;

// Re-export main types for easy access
pub use repl::*;
