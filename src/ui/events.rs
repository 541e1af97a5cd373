use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::{Duration, Instant};

use super::app::{App, CopyColumn};
use crate::clipboard::Clipboard;

/// Handle keyboard events and update app state
pub fn handle_events(app: &mut App, clipboard: &mut dyn Clipboard) -> anyhow::Result<()> {
    // Poll for events with timeout
    if event::poll(Duration::from_millis(50))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key_event(app, clipboard, key);
            }
        }
    }
    app.expire_feedback(Instant::now());
    Ok(())
}

/// Process individual key press
fn handle_key_event(app: &mut App, clipboard: &mut dyn Clipboard, key: KeyEvent) {
    // Check for Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c')) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // BPM entry
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' => app.push_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.clear_input(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.nudge(1.0),
        KeyCode::Char('-') => app.nudge(-1.0),

        // Row selection (vim-style: k=up, j=down)
        KeyCode::Char('k') | KeyCode::Up => app.prev_row(),
        KeyCode::Char('j') | KeyCode::Down => app.next_row(),

        // Copy
        KeyCode::Enter | KeyCode::Char('c') => {
            app.copy_selected(clipboard, CopyColumn::Delay, Instant::now())
        }
        KeyCode::Char('f') => app.copy_selected(clipboard, CopyColumn::Frequency, Instant::now()),

        KeyCode::Char('t') => app.toggle_theme(),

        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;
    use crate::config::ThemeSpec;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: Vec<String>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
            self.copied.push(text.to_string());
            Ok(())
        }
    }

    fn press(app: &mut App, clipboard: &mut RecordingClipboard, code: KeyCode) {
        handle_key_event(app, clipboard, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        App::new("", ThemeSpec::Dark, Duration::from_millis(1500))
    }

    #[test]
    fn test_typing_bpm() {
        let mut app = app();
        let mut clipboard = RecordingClipboard::default();
        for c in "120".chars() {
            press(&mut app, &mut clipboard, KeyCode::Char(c));
        }
        assert_eq!(app.input, "120");
        assert!(app.results.is_some());
    }

    #[test]
    fn test_select_and_copy() {
        let mut app = app();
        let mut clipboard = RecordingClipboard::default();
        for c in "120".chars() {
            press(&mut app, &mut clipboard, KeyCode::Char(c));
        }
        for _ in 0..4 {
            press(&mut app, &mut clipboard, KeyCode::Down);
        }
        press(&mut app, &mut clipboard, KeyCode::Enter);
        press(&mut app, &mut clipboard, KeyCode::Char('f'));
        assert_eq!(clipboard.copied, vec!["500.00".to_string(), "2.00".to_string()]);
    }

    #[test]
    fn test_quit_keys() {
        let mut clipboard = RecordingClipboard::default();

        let mut escaped = app();
        press(&mut escaped, &mut clipboard, KeyCode::Esc);
        assert!(escaped.should_quit);

        let mut interrupted = app();
        handle_key_event(
            &mut interrupted,
            &mut clipboard,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(interrupted.should_quit);
        assert!(clipboard.copied.is_empty());
    }

    #[test]
    fn test_nudge_keys() {
        let mut app = App::new("100", ThemeSpec::Dark, Duration::from_millis(1500));
        let mut clipboard = RecordingClipboard::default();
        press(&mut app, &mut clipboard, KeyCode::Char('+'));
        press(&mut app, &mut clipboard, KeyCode::Char('+'));
        press(&mut app, &mut clipboard, KeyCode::Char('-'));
        assert_eq!(app.input, "101");
    }
}
