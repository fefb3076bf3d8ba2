// calctty: scientific calculator with a terminal keypad

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use calctty::engine::{AngleMode, Calculator};
use calctty::ui::{keymap, App};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "calctty", version, about = "Scientific calculator for the terminal")]
struct Args {
    /// Start in radians instead of degrees
    #[arg(long)]
    radians: bool,

    /// Feed a keystroke script (e.g. "2+3*4=") and print the display
    #[arg(long, value_name = "SCRIPT", allow_hyphen_values = true)]
    keys: Option<String>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .init();
}

/// Run a keystroke script without the TUI
fn run_script(calculator: &mut Calculator, script: &str) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = keymap::inputs_for_script(script)?;
    for input in inputs {
        // Failures leave the calculator showing Error; keep feeding keys
        let _ = calculator.dispatch(input);
    }

    println!("{}", calculator.display());

    if calculator.has_error() {
        if let Some(err) = calculator.last_error() {
            eprintln!("Error: {}", err);
        }
        std::process::exit(1);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    match (&args.log_file, &args.keys) {
        (Some(path), _) => init_file_logging(path)?,
        // The TUI owns the terminal, so only script mode logs to stderr
        (None, Some(_)) => init_stderr_logging(),
        (None, None) => {}
    }

    let angle_mode = if args.radians {
        AngleMode::Radians
    } else {
        AngleMode::Degrees
    };
    let mut calculator = Calculator::with_angle_mode(angle_mode);

    if let Some(script) = &args.keys {
        return run_script(&mut calculator, script);
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(calculator);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
