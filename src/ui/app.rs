use std::time::{Duration, Instant};

use crate::clipboard::{Clipboard, ClipboardError};
use crate::config::ThemeSpec;
use crate::tempo::format::{format_or_placeholder, format_value};
use crate::tempo::{convert_text, parse_bpm, ConversionResult, TempoError};
use crate::types::subdivision::NOTE_SUBDIVISIONS;

/// Longest BPM text the input field accepts
const MAX_INPUT_LEN: usize = 8;

/// Which value of a row gets copied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyColumn {
    Delay,
    Frequency,
}

/// A recent successful copy, shown as "Copied!" until it expires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyFeedback {
    pub row: usize,
    pub column: CopyColumn,
    pub until: Instant,
}

/// UI application state
/// The converter itself is stateless; this only holds what is on screen
pub struct App {
    /// Raw BPM text as typed
    pub input: String,
    /// Results for the current input, None while the tempo is invalid
    pub results: Option<Vec<ConversionResult>>,
    /// Why the current input is invalid
    pub error: Option<TempoError>,
    /// Selected table row
    pub selected_row: usize,
    pub copy_feedback: Option<CopyFeedback>,
    pub feedback_duration: Duration,
    /// One-line message for the help bar
    pub status: Option<String>,
    pub theme: ThemeSpec,
    /// Whether to quit the application
    pub should_quit: bool,
}

impl App {
    pub fn new(input: impl Into<String>, theme: ThemeSpec, feedback_duration: Duration) -> Self {
        let mut app = Self {
            input: input.into(),
            results: None,
            error: None,
            selected_row: 0,
            copy_feedback: None,
            feedback_duration,
            status: None,
            theme,
            should_quit: false,
        };
        app.recalculate();
        app
    }

    /// Re-run the conversion for the current input text
    pub fn recalculate(&mut self) {
        match convert_text(&self.input) {
            Ok(results) => {
                self.results = Some(results);
                self.error = None;
            }
            Err(e) => {
                self.results = None;
                self.error = Some(e);
            }
        }
        // Old feedback refers to values that are no longer shown
        self.copy_feedback = None;
    }

    /// Append a typed character to the BPM field
    pub fn push_char(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') || self.input.len() >= MAX_INPUT_LEN {
            return;
        }
        self.input.push(c);
        self.recalculate();
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.recalculate();
        }
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.recalculate();
    }

    /// Change the tempo by `delta` BPM; ignored while the input is invalid
    pub fn nudge(&mut self, delta: f64) {
        let Ok(bpm) = parse_bpm(&self.input) else {
            return;
        };
        let next = (bpm + delta).to_string();
        if next.len() > MAX_INPUT_LEN || parse_bpm(&next).is_err() {
            return;
        }
        self.input = next;
        self.recalculate();
    }

    pub fn next_row(&mut self) {
        self.selected_row = (self.selected_row + 1) % NOTE_SUBDIVISIONS.len();
    }

    pub fn prev_row(&mut self) {
        if self.selected_row == 0 {
            self.selected_row = NOTE_SUBDIVISIONS.len() - 1;
        } else {
            self.selected_row -= 1;
        }
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Copy actions are only available while there are results
    pub fn copy_enabled(&self) -> bool {
        self.results.is_some()
    }

    /// Display text of one cell
    pub fn cell_text(&self, row: usize, column: CopyColumn) -> String {
        let value = self
            .results
            .as_ref()
            .and_then(|results| results.get(row))
            .map(|result| match column {
                CopyColumn::Delay => result.delay_ms,
                CopyColumn::Frequency => result.frequency_hz,
            });
        format_or_placeholder(value)
    }

    /// Copy the selected row's value, exactly as displayed
    pub fn copy_selected(
        &mut self,
        clipboard: &mut dyn Clipboard,
        column: CopyColumn,
        now: Instant,
    ) {
        let Some(result) = self.results.as_ref().and_then(|r| r.get(self.selected_row)) else {
            self.status = Some("Nothing to copy: enter a valid BPM".to_string());
            return;
        };

        let text = match column {
            CopyColumn::Delay => format_value(result.delay_ms),
            CopyColumn::Frequency => format_value(result.frequency_hz),
        };

        match clipboard.copy(&text) {
            Ok(()) => {
                self.status = Some(format!("Copied '{}' to clipboard", text));
                self.copy_feedback = Some(CopyFeedback {
                    row: self.selected_row,
                    column,
                    until: now + self.feedback_duration,
                });
            }
            Err(ClipboardError::NothingToCopy) => {
                self.status = Some("Nothing to copy".to_string());
            }
            Err(e) => {
                self.status = Some(format!("Copy failed: {}", e));
            }
        }
    }

    /// Drop copy feedback whose time has passed
    pub fn expire_feedback(&mut self, now: Instant) {
        if self.copy_feedback.is_some_and(|f| now >= f.until) {
            self.copy_feedback = None;
        }
    }

    /// Quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
