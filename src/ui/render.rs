use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use super::app::{App, CopyColumn};
use crate::config::ThemeSpec;
use crate::types::subdivision::NOTE_SUBDIVISIONS;

/// Colours for one theme
struct Palette {
    text: Color,
    accent: Color,
    highlight: Color,
    muted: Color,
    success: Color,
    error: Color,
}

impl Palette {
    fn for_theme(theme: ThemeSpec) -> Self {
        match theme {
            ThemeSpec::Dark => Palette {
                text: Color::White,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                muted: Color::Gray,
                success: Color::Green,
                error: Color::Red,
            },
            ThemeSpec::Light => Palette {
                text: Color::Black,
                accent: Color::Blue,
                highlight: Color::Magenta,
                muted: Color::DarkGray,
                success: Color::Green,
                error: Color::Red,
            },
        }
    }
}

/// Render the TUI
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // BPM input
            Constraint::Min(0),    // Results table
            Constraint::Length(5), // Help + status
        ])
        .split(frame.size());

    render_title(frame, chunks[0], &palette);
    render_input(frame, chunks[1], app, &palette);
    render_results(frame, chunks[2], app, &palette);
    render_help(frame, chunks[3], app, &palette);
}

/// Render title bar
fn render_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new("Delay Time Calculator")
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(title, area);
}

/// Render BPM field, with the reason when it is invalid
fn render_input(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut spans = vec![
        Span::styled("BPM: ", Style::default().fg(palette.text)),
        Span::styled(
            format!("{}_", app.input),
            Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(error) = &app.error {
        spans.push(Span::styled(
            format!("   ({})", error),
            Style::default().fg(palette.error),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().title("Tempo").borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

/// Render the note value table
fn render_results(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let header = Row::new(vec!["Note Value", "Delay (ms)", "Frequency (Hz)", ""])
        .style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .bottom_margin(1);

    let rows: Vec<Row> = NOTE_SUBDIVISIONS
        .iter()
        .enumerate()
        .map(|(i, subdivision)| {
            let action = match app.copy_feedback {
                Some(feedback) if feedback.row == i => {
                    let unit = match feedback.column {
                        CopyColumn::Delay => "ms",
                        CopyColumn::Frequency => "Hz",
                    };
                    Span::styled(
                        format!("Copied! ({})", unit),
                        Style::default().fg(palette.success),
                    )
                }
                _ if !app.copy_enabled() => Span::styled("", Style::default()),
                _ if i == app.selected_row => {
                    Span::styled("[c] ms  [f] Hz", Style::default().fg(palette.muted))
                }
                _ => Span::raw(""),
            };

            Row::new(vec![
                Cell::from(subdivision.name),
                Cell::from(app.cell_text(i, CopyColumn::Delay)),
                Cell::from(app.cell_text(i, CopyColumn::Frequency)),
                Cell::from(action),
            ])
            .style(Style::default().fg(palette.text))
        })
        .collect();

    let widths = [
        Constraint::Length(32),
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Min(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title("Calculated Times").borders(Borders::ALL))
        .highlight_style(Style::default().fg(palette.highlight).add_modifier(Modifier::BOLD))
        .highlight_symbol("► ");

    let mut state = TableState::default();
    state.select(Some(app.selected_row));
    frame.render_stateful_widget(table, area, &mut state);
}

/// Render help text and the latest status message
fn render_help(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let status = match &app.status {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(palette.success),
        )),
        None => Line::from(""),
    };

    let help_text = vec![
        Line::from("  0-9/.: BPM  |  +/-: Nudge  |  ↑/↓: Select"),
        Line::from("  Enter/c: Copy ms  |  f: Copy Hz  |  t: Theme  |  Q/Esc: Quit"),
        status,
    ];

    let paragraph = Paragraph::new(help_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(palette.muted));

    frame.render_widget(paragraph, area);
}
