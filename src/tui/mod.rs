// Module declarations
pub mod widgets;
pub mod components;

pub mod action;
pub mod component;
pub mod effects;
pub mod keys;
pub mod reducer;
pub mod reducers;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod types;

#[cfg(test)]
pub mod testing;


pub use action::Action;
pub use component::{Component, Effect, Element};
pub use effects::DataEffects;
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::Tab;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::StatsProvider;

/// Input polling interval
const INPUT_POLL_MS: u64 = 100;

/// What the TUI asks the stats service for
#[derive(Debug, Clone)]
pub struct Queries {
    pub games_limit: u32,
    pub season: String,
}

/// Main entry point for TUI mode
pub async fn run(
    client: Arc<dyn StatsProvider>,
    config: Config,
    queries: Queries,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let data_effects = Arc::new(DataEffects::new(
        client,
        queries.games_limit,
        queries.season.clone(),
    ));

    let mut initial_state = AppState::default();
    initial_state.system.config = config;
    initial_state.system.games_limit = queries.games_limit;
    initial_state.system.season = queries.season;

    let mut runtime = Runtime::new(initial_state, data_effects);

    // Mount the first view, which starts its fetch
    runtime.dispatch(Action::NavigateTab(Tab::RecentGames));

    let result = event_loop(&mut terminal, &mut runtime);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    let renderer = Renderer::new();

    #[cfg(feature = "development")]
    let mut screenshot_requested = false;

    loop {
        // Process any actions from effects FIRST (so data loads trigger re-render)
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        let element = runtime.build();
        let config = &runtime.state().system.config.display;
        let frame = terminal.draw(|f| {
            let area = f.area();
            renderer.render(&element, area, f.buffer_mut(), config);
        })?;

        #[cfg(feature = "development")]
        if screenshot_requested {
            screenshot_requested = false;
            let filename = crate::dev::screenshot::screenshot_filename();
            match crate::dev::screenshot::save_buffer_screenshot(frame.buffer, frame.area, &filename) {
                Ok(()) => tracing::info!("Screenshot saved to {}", filename),
                Err(e) => tracing::error!("Failed to save screenshot: {}", e),
            }
        }
        #[cfg(not(feature = "development"))]
        let _ = frame;

        // Re-render immediately when async data arrived
        if actions_processed > 0 {
            continue;
        }

        // Poll for keyboard events
        if !event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            #[cfg(feature = "development")]
            {
                use crossterm::event::{KeyCode, KeyModifiers};
                if key.code == KeyCode::Char('S') && key.modifiers.contains(KeyModifiers::SHIFT) {
                    tracing::info!("Screenshot requested via Shift-S");
                    screenshot_requested = true;
                    continue;
                }
            }

            match key_to_action(key) {
                Some(Action::Quit) => {
                    tracing::debug!("ACTION: Quitting application");
                    return Ok(());
                }
                Some(action) => runtime.dispatch(action),
                None => {}
            }
        }
    }
}
