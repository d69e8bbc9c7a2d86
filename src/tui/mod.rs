// File: ./src/tui/mod.rs
// Entry point and main loop for the TUI application.
pub mod action;
pub mod handlers;
pub mod state;
pub mod view;
pub mod worker;

use crate::calendar::{CalendarSource, IcsCalendarSource};
use crate::config::Config;
use crate::context::{AppContext, StandardContext};
use crate::model::Day;
use crate::tui::action::Action;
use crate::tui::state::AppState;
use crate::tui::view::draw;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{io, path::PathBuf, sync::Arc, time::Duration};
use tokio::sync::mpsc;

pub async fn run(root: Option<PathBuf>) -> Result<()> {
    // --- 1. PREAMBLE & CONFIG ---
    let ctx = StandardContext::new(root);

    let mut first_run = false;
    let cfg = match Config::load(&ctx) {
        Ok(c) => c,
        Err(e) if Config::is_missing_config_error(&e) => {
            // Write the defaults so there is a file to edit.
            let c = Config::default();
            if let Err(e) = c.save(&ctx) {
                eprintln!("Warning: Could not save config file: {}", e);
            } else {
                first_run = true;
            }
            c
        }
        Err(e) => {
            eprintln!("Error loading configuration:\n{}", e);
            std::process::exit(1);
        }
    };

    crate::locale::init(cfg.locale.as_deref());
    match crate::logging::init_file_logger(&ctx, cfg.log_level) {
        Ok(path) => log::info!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: logging disabled: {}", e),
    }
    if first_run && let Ok(path) = ctx.get_config_file_path() {
        log::info!("Default configuration written to {}", path.display());
    }

    // Panic Hook
    let panic_path = ctx.get_cache_dir().ok().map(|d| d.join("nittei_panic.log"));
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        use std::io::Write;
        if let Some(path) = &panic_path
            && let Ok(mut file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
        {
            let _ = writeln!(file, "PANIC: {:?}", info);
        }
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let source: Option<Arc<dyn CalendarSource>> = cfg.calendar_file.as_ref().map(|path| {
        Arc::new(IcsCalendarSource::new(path, cfg.calendar_access)) as Arc<dyn CalendarSource>
    });

    // --- 2. TERMINAL SETUP ---
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // --- 3. STATE INIT ---
    let mut app_state = AppState::new(&cfg, Day::today());

    let (action_tx, action_rx) = mpsc::channel(10);
    let (event_tx, mut event_rx) = mpsc::channel(10);

    // --- 4. WORKER ---
    tokio::spawn(worker::run_worker(source, action_rx, event_tx));

    // --- 5. UI LOOP ---
    loop {
        terminal.draw(|f| draw(f, &mut app_state))?;

        if let Ok(event) = event_rx.try_recv() {
            handlers::handle_app_event(&mut app_state, event);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
        {
            // Filter out KeyRelease events to prevent double input on Windows
            if key.kind == event::KeyEventKind::Release {
                continue;
            }

            if let Some(action) = handlers::handle_key_event(key, &mut app_state, &action_tx).await
            {
                if matches!(action, Action::Quit) {
                    let _ = action_tx.send(Action::Quit).await;
                    break;
                }
                let _ = action_tx.send(action).await;
            }
        }
    }

    // --- 6. CLEANUP ---
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    log::info!("Exiting with {} selected dates", app_state.selection.len());
    Ok(())
}
