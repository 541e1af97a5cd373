//! Copy text to the system clipboard through the terminal.
//!
//! Uses the OSC 52 escape sequence, which most terminal emulators (and tmux
//! with `set-clipboard on`) forward to the host clipboard.

use base64::Engine;
use std::io::{self, Write};
use thiserror::Error;

use crate::tempo::format::PLACEHOLDER;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("nothing to copy")]
    NothingToCopy,

    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

/// Something that can receive copied text
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Build the OSC 52 "set clipboard" sequence for `text`
pub fn osc52_sequence(text: &str) -> String {
    let payload = base64::engine::general_purpose::STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{}\x07", payload)
}

/// Clipboard backed by a terminal writer
pub struct TerminalClipboard<W: Write> {
    out: W,
}

impl<W: Write> TerminalClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Clipboard for TerminalClipboard<W> {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() || text == PLACEHOLDER {
            return Err(ClipboardError::NothingToCopy);
        }
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
