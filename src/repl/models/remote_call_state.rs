//! Remote call state model
//!
//! Lifecycle of one endpoint's most recent invocation.

/// Phase derived from a [`RemoteCallState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallPhase {
    Idle,
    Loading,
    Success,
    Failed,
}

/// Data, loading flag and error message of one remote call
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteCallState<T> {
    /// Parsed response of the last successful call
    pub data: Option<T>,
    /// True between invocation start and settlement
    pub loading: bool,
    /// Human-readable message of the last failure
    pub error: Option<String>,
}

impl<T> RemoteCallState<T> {
    pub fn new() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Mark the start of an invocation; previous data stays visible
    pub fn start(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a successful settlement
    pub fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
    }

    /// Record a failed settlement
    pub fn fail(&mut self, message: String) {
        self.data = None;
        self.error = Some(message);
    }

    /// Reset data and error, leaving `loading` untouched
    pub fn clear(&mut self) {
        self.data = None;
        self.error = None;
    }

    pub fn phase(&self) -> CallPhase {
        if self.loading {
            CallPhase::Loading
        } else if self.error.is_some() {
            CallPhase::Failed
        } else if self.data.is_some() {
            CallPhase::Success
        } else {
            CallPhase::Idle
        }
    }
}

impl<T> Default for RemoteCallState<T> {
    fn default() -> Self {
        Self::new()
    }
}
