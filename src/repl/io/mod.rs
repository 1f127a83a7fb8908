//! # I/O Abstraction Layer
//!
//! Input arrives line by line through a [`LineSource`]; output goes to any
//! [`std::io::Write`]. Production reads stdin, tests feed a scripted queue.
//!
//! ```text
//! Production:  AppController ──▶ StdinLineSource    ──▶ tokio::io::stdin()
//! Testing:     AppController ──▶ ScriptedLineSource ──▶ VecDeque<String>
//! ```

use anyhow::Result;
use std::future::Future;

pub mod mock;
pub mod terminal;

pub use mock::ScriptedLineSource;
pub use terminal::StdinLineSource;

/// Source of input lines
pub trait LineSource: Send {
    /// Read the next line without its terminator. `None` means end of input.
    fn read_line(&mut self) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Whether a prompt should be shown before reading
    fn is_interactive(&self) -> bool {
        false
    }
}
