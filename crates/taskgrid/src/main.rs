use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    Terminal,
};
use seed_client::HttpSeedClient;
use std::io;
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

mod actions;
mod config;
mod dispatcher;
mod domain_models;
mod logger;
mod middleware;
mod reducers;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

use actions::{Action, SeedAction};
use dispatcher::Dispatcher;
use middleware::{KeyboardMiddleware, LoggingMiddleware, SeedMiddleware};
use state::AppState;
use store::Store;

fn main() -> anyhow::Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting taskgrid, logging to {}", log_file.display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Channel for actions dispatched from middleware (async seed results)
    let (action_tx, action_rx) = mpsc::channel();
    let dispatcher = Dispatcher::new(action_tx);

    // Initialize store with middleware, in execution order
    let mut store = Store::new(AppState::default(), dispatcher);
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(KeyboardMiddleware::new()));
    store.add_middleware(Box::new(SeedMiddleware::new(Arc::new(
        HttpSeedClient::new(),
    ))));

    // Kick off the one-shot seed fetch
    store.dispatch(Action::Seed(SeedAction::LoadStart));

    // Main event loop
    let result = run_app(&mut terminal, &mut store, &action_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        eprintln!("Error: {}", err);
    }

    log::info!("Exiting taskgrid");
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: &mut Store,
    action_rx: &Receiver<Action>,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| {
            views::render(store.state(), frame.area(), frame);
        })?;

        if !store.state().running {
            break;
        }

        // Handle keyboard events
        if event::poll(config::EVENT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    store.dispatch(Action::Key(key));
                }
            }
        }

        // Drain actions dispatched from middleware since the last tick
        while let Ok(action) = action_rx.try_recv() {
            store.dispatch(action);
        }
    }

    Ok(())
}
