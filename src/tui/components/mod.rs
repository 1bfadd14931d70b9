// Component library exports

pub mod app;
pub mod recent_games_view;
pub mod season_view;
pub mod status_bar;

pub use app::App;
pub use recent_games_view::RecentGamesView;
pub use season_view::SeasonView;
pub use status_bar::StatusBar;
