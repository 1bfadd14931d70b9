//! Client for the player statistics service.
//!
//! The service is an external collaborator: it precomputes every number the
//! dashboard shows. This module only knows how to ask for it and how to
//! decode the answer.

mod client;
mod error;
mod models;

pub use client::{Client, DEFAULT_API_BASE};
pub use error::ApiError;
pub use models::{Game, Location, SeasonAverage};
