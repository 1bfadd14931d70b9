pub mod api;
pub mod commands;
pub mod config;
pub mod data_provider;
pub mod formatting;
pub mod layout_constants;
pub mod summary;
pub mod team_abbrev;
pub mod tui;
pub mod types;

#[cfg(any(test, feature = "development"))]
pub mod fixtures;

#[cfg(feature = "development")]
pub mod dev;
