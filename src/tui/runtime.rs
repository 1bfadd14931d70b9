use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::effects::{ActionFuture, DataEffects};
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - manages action processing
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the virtual component tree
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Actions produced by finished fetches
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing fetches to the executor task
    effect_tx: mpsc::UnboundedSender<ActionFuture>,

    /// Data effects handler
    data_effects: Arc<DataEffects>,
}

impl Runtime {
    /// Create a new runtime with initial state and data effects handler
    pub fn new(initial_state: AppState, data_effects: Arc<DataEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, mut effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        tokio::spawn(async move {
            Self::run_effect_executor(&mut effect_rx, action_tx).await;
        });

        Self {
            state: initial_state,
            action_rx,
            effect_tx,
            data_effects,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect by queueing its fetch for the executor task
    fn execute_effect(&self, effect: Effect) {
        let fetch = match effect {
            Effect::None => return,
            Effect::FetchRecentGames(display_id) => {
                debug!("EFFECT: Executing recent games fetch for {:?}", display_id);
                self.data_effects.fetch_recent_games(display_id)
            }
            Effect::FetchSeasonAverage(display_id) => {
                debug!("EFFECT: Executing season averages fetch for {:?}", display_id);
                self.data_effects.fetch_season_average(display_id)
            }
        };
        let _ = self.effect_tx.send(fetch);
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state, &())
    }

    /// Run queued fetches concurrently
    ///
    /// This runs in a separate tokio task. Each fetch gets its own task and
    /// its resulting action feeds back into the runtime's queue.
    async fn run_effect_executor(
        effect_rx: &mut mpsc::UnboundedReceiver<ActionFuture>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        while let Some(fetch) = effect_rx.recv().await {
            let action_tx = action_tx.clone();
            tokio::spawn(async move {
                let action = fetch.await;
                trace!("EFFECT: Fetch finished, queueing {:?}", action);
                let _ = action_tx.send(action);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::state::FetchState;
    use crate::tui::testing::{create_client, StubProvider};
    use crate::tui::types::Tab;
    use crate::data_provider::StatsProvider;

    fn create_test_runtime_with(client: Arc<dyn StatsProvider>) -> Runtime {
        let data_effects = Arc::new(DataEffects::new(client, 20, "2024-25"));
        Runtime::new(AppState::default(), data_effects)
    }

    fn create_test_runtime() -> Runtime {
        create_test_runtime_with(create_client())
    }

    /// Process actions until `done` holds or a second passes
    async fn settle(runtime: &mut Runtime, done: impl Fn(&AppState) -> bool) {
        let start = tokio::time::Instant::now();
        while start.elapsed() < tokio::time::Duration::from_secs(1) {
            runtime.process_actions();
            if done(runtime.state()) {
                return;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_runtime_initial_state() {
        let runtime = create_test_runtime();

        assert_eq!(runtime.state().navigation.current_tab, Tab::RecentGames);
        assert!(runtime.state().views.recent_games.is_none());
    }

    #[tokio::test]
    async fn test_dispatch_action() {
        let mut runtime = create_test_runtime();

        runtime.dispatch(Action::NavigateTab(Tab::Season));

        assert_eq!(runtime.state().navigation.current_tab, Tab::Season);
        assert!(runtime.state().views.season.is_some());
    }

    #[tokio::test]
    async fn test_queued_fetch_feeds_action_back() {
        let mut runtime = create_test_runtime();

        runtime
            .effect_tx
            .send(Box::pin(async { Action::NavigateTab(Tab::Season) }))
            .unwrap();

        settle(&mut runtime, |s| s.navigation.current_tab == Tab::Season).await;

        assert_eq!(runtime.state().navigation.current_tab, Tab::Season);
    }

    #[tokio::test]
    async fn test_navigation_fetches_and_resolves_view() {
        let mut runtime = create_test_runtime();

        runtime.dispatch(Action::NavigateTab(Tab::RecentGames));
        settle(&mut runtime, |s| {
            s.views
                .recent_games
                .as_ref()
                .is_some_and(|v| !matches!(v.fetch, FetchState::Loading))
        })
        .await;

        let view = runtime.state().views.recent_games.as_ref().expect("mounted");
        match &view.fetch {
            FetchState::Success(games) => assert_eq!(games.len(), 20),
            other => panic!("Expected Success, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_resolves_to_failure() {
        let mut runtime = create_test_runtime_with(Arc::new(StubProvider::failing(500)));

        runtime.dispatch(Action::NavigateTab(Tab::Season));
        settle(&mut runtime, |s| {
            s.views.season.as_ref().is_some_and(|v| !matches!(v.fetch, FetchState::Loading))
        })
        .await;

        let view = runtime.state().views.season.as_ref().expect("mounted");
        assert_eq!(view.fetch, FetchState::Failure("HTTP 500".to_string()));
    }

    #[tokio::test]
    async fn test_build_returns_component_tree() {
        let runtime = create_test_runtime();

        // Tab bar, content, status bar
        match runtime.build() {
            Element::Container { children, .. } => assert_eq!(children.len(), 3),
            _ => panic!("Expected container element from App component"),
        }
    }
}
