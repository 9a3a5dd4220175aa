// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 configwiz contributors

//! Line-oriented terminal IO
//!
//! The wizard only ever writes prompt text and reads one answer per line, so
//! the whole terminal surface fits in a two-method trait. Tests drive it with
//! in-memory buffers.

use std::io::{BufRead, Stdout, StdinLock, Write};

use crate::errors::WizardResult;

/// Prompt output and answer input for the wizard
pub trait WizardIo {
    /// Write prompt text as-is
    fn write(&mut self, s: &str) -> WizardResult<()>;

    /// Read one answer, trimmed.
    ///
    /// Returns `default` for a blank line and at end of input.
    fn read_line(&mut self, default: &str) -> WizardResult<String>;
}

/// [`WizardIo`] over any buffered reader and writer
#[derive(Debug)]
pub struct StdIo<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> StdIo<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Everything written so far
    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl StdIo<StdinLock<'static>, Stdout> {
    /// IO bound to the process's stdin and stdout
    pub fn terminal() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> WizardIo for StdIo<R, W> {
    fn write(&mut self, s: &str) -> WizardResult<()> {
        self.writer.write_all(s.as_bytes())?;
        // prompts end without a newline and must show before we block on input
        self.writer.flush()?;
        Ok(())
    }

    fn read_line(&mut self, default: &str) -> WizardResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            tracing::trace!("End of input, using default answer");
            return Ok(default.to_string());
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer.to_string())
        }
    }
}
