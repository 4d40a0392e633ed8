//! blogdeck — a blog front page for the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐ RotationMsg ┌──────────┐  draw()  ┌──────────┐
//! │ timers.rs │ ──────────► │  app.rs  │ ───────► │  ui.rs   │
//! │  (tokio)  │  (channel)  │ (state)  │          │ (render) │
//! └───────────┘             └──────────┘          └──────────┘
//!       ▲ stop / restart         ▲
//!       └────── main ────────────┤ handle_key_event()
//!                           ┌──────────┐
//!                           │ input.rs │
//!                           └──────────┘
//! ```
//!
//! * **`content/`** — posts, ads, categories, and the built-in sample data.
//! * **`feed`** — interleaves sponsored placements into the post list.
//! * **`rotation`** — pure state transitions for the hero carousel.
//! * **`timers`** — tokio tasks that send slide / overlay ticks.
//! * **`app`** — owns all application state and applies rotation messages.
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations.
//! * **`config`** — command-line / environment options.
//! * **`main`** — wires everything together: parse args, set up logging and
//!   the terminal, and run the event loop.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use blogdeck::app::App;
use blogdeck::config::{Args, Settings};
use blogdeck::timers::TimerDriver;
use blogdeck::{input, ui};

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Send logs to `path`, if given.  The terminal belongs to the UI, so there
/// is no stdout/stderr logging.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file '{}'", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;
    let settings = Settings::from_args(&args)?;

    let mut app = App::new(settings)?;
    if args.category.is_some() {
        app.set_category(args.category);
    }

    install_panic_hook();

    // -- start the carousel timers -------------------------------------------
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut timers = TimerDriver::start(app.schedule(), tx);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Apply any timer ticks.
    //   2. Render the UI.
    //   3. Poll for keyboard input (up to tick_rate).  This blocks one runtime
    //      worker; the timer tasks run on the others.
    let tick_rate = Duration::from_millis(100);

    loop {
        // 1. Process timer messages
        while let Ok(msg) = rx.try_recv() {
            let effect = app.apply(msg);
            timers.handle(effect, app.schedule(), &mut rx);
        }

        // 2. Render
        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        // 3. Handle input
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                let effect = input::handle_key_event(&mut app, key);
                timers.handle(effect, app.schedule(), &mut rx);
            }
        }

        if app.quit {
            break;
        }
    }

    // `timers` and `guard` are dropped here, cancelling the timer tasks and
    // restoring the terminal.
    tracing::info!("shutting down");
    Ok(())
}
