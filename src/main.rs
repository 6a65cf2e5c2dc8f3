// sortty: step-driven sorting algorithm visualizer

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::ui::App;

const DEFAULT_SIZE: usize = 64;
const DEFAULT_TICK_MS: u64 = 25;

fn usage(program_name: &str) {
    eprintln!("Usage: {} [--size N] [--tick MS]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --size N   Number of elements to sort, 2..=512 (default {})",
        DEFAULT_SIZE
    );
    eprintln!(
        "  --tick MS  Milliseconds between steps, 1..=1024 (default {})",
        DEFAULT_TICK_MS
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");

    let mut size = DEFAULT_SIZE;
    let mut tick_ms = DEFAULT_TICK_MS;

    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--size" => {
                size = match rest.next().and_then(|v| v.parse().ok()) {
                    Some(n @ 2..=512) => n,
                    _ => {
                        eprintln!("Error: --size expects a number in 2..=512");
                        eprintln!();
                        usage(program_name);
                        std::process::exit(1);
                    }
                };
            }
            "--tick" => {
                tick_ms = match rest.next().and_then(|v| v.parse().ok()) {
                    Some(ms @ 1..=1024) => ms,
                    _ => {
                        eprintln!("Error: --tick expects a number in 1..=1024");
                        eprintln!();
                        usage(program_name);
                        std::process::exit(1);
                    }
                };
            }
            "--help" | "-h" => {
                usage(program_name);
                return Ok(());
            }
            other => {
                eprintln!("Error: unrecognized argument '{}'", other);
                eprintln!();
                usage(program_name);
                std::process::exit(1);
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(size, Duration::from_millis(tick_ms));
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
