//! # Terminal Input
//!
//! Reads commands from standard input without blocking the runtime.

use super::LineSource;
use anyhow::{Context, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

/// Line source backed by stdin, or any buffered async reader
pub struct StdinLineSource<R = BufReader<Stdin>> {
    reader: R,
    interactive: bool,
}

impl StdinLineSource {
    pub fn new() -> Self {
        Self::with_reader(
            BufReader::new(tokio::io::stdin()),
            atty::is(atty::Stream::Stdin),
        )
    }
}

impl Default for StdinLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AsyncBufRead + Unpin + Send> StdinLineSource<R> {
    pub fn with_reader(reader: R, interactive: bool) -> Self {
        Self {
            reader,
            interactive,
        }
    }
}

impl<R: AsyncBufRead + Unpin + Send> LineSource for StdinLineSource<R> {
    async fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read from stdin")?;

        if read == 0 {
            return Ok(None);
        }

        // Invalid UTF-8 is replaced with U+FFFD, never an error
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn is_interactive(&self) -> bool {
        self.interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_line_should_strip_terminators() {
        let mut source = StdinLineSource::with_reader(&b"calc\r\nquit\nshow"[..], false);

        assert_eq!(source.read_line().await.unwrap().as_deref(), Some("calc"));
        assert_eq!(source.read_line().await.unwrap().as_deref(), Some("quit"));
        assert_eq!(source.read_line().await.unwrap().as_deref(), Some("show"));
        assert_eq!(source.read_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn read_line_should_replace_invalid_utf8() {
        let mut source = StdinLineSource::with_reader(&b"set cost \xff\xfe\nhelp\n"[..], true);

        assert_eq!(
            source.read_line().await.unwrap().as_deref(),
            Some("set cost \u{fffd}\u{fffd}")
        );
        assert_eq!(source.read_line().await.unwrap().as_deref(), Some("help"));
        assert!(source.is_interactive());
    }
}
