//! # Scripted Input for Testing
//!
//! Provides pre-programmed lines that can be consumed by tests.

use super::LineSource;
use anyhow::Result;
use std::collections::VecDeque;

/// Line source replaying a fixed script, then reporting end of input
#[derive(Debug, Default)]
pub struct ScriptedLineSource {
    lines: VecDeque<String>,
}

impl ScriptedLineSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push_back(line.into());
    }

    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLineSource {
    async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
