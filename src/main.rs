mod clipboard;
mod config;
mod report;
mod tempo;
mod types;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};

use clipboard::TerminalClipboard;
use config::CalculatorConfig;
use report::OutputFormat;
use ui::{app::App, events, render};

/// Tempo to delay time and frequency calculator
#[derive(Parser, Debug)]
#[command(name = "tempo-delay")]
#[command(
    about = "Delay times and frequencies for note values at a given tempo",
    long_about = None
)]
struct Args {
    /// Configuration file (YAML)
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Start-up tempo in beats per minute (overrides the config file)
    #[arg(short = 'b', long = "bpm", allow_hyphen_values = true)]
    bpm: Option<String>,

    /// Print the table once and exit instead of starting the UI
    #[arg(short = 'p', long = "print")]
    print: bool,

    /// Output format for --print
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        requires = "print"
    )]
    format: OutputFormat,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CalculatorConfig::load_or_default(args.config.as_deref())?;

    let bpm_text = args.bpm.unwrap_or_else(|| config.bpm.to_string());

    if args.print {
        return run_print_mode(&bpm_text, args.format);
    }

    run_ui_mode(bpm_text, &config)
}

/// Print the conversion table to stdout
fn run_print_mode(bpm_text: &str, format: OutputFormat) -> Result<()> {
    let bpm = tempo::parse_bpm(bpm_text).with_context(|| format!("Invalid tempo: '{}'", bpm_text))?;
    let results = tempo::convert(bpm)?;

    let mut stdout = io::stdout().lock();
    report::write_report(&mut stdout, bpm, &results, format)
}

/// Run the interactive calculator
fn run_ui_mode(bpm_text: String, config: &CalculatorConfig) -> Result<()> {
    let mut app = App::new(
        bpm_text,
        config.theme,
        Duration::from_millis(config.copy_feedback_ms),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut clipboard = TerminalClipboard::new(io::stdout());

    let result = run_ui_loop(&mut terminal, &mut app, &mut clipboard);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw and handle input until the user quits
fn run_ui_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    clipboard: &mut TerminalClipboard<io::Stdout>,
) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| render::render(f, app))?;

        // Handle events
        events::handle_events(app, clipboard)?;

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
