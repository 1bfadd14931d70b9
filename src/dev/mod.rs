/// Development utilities module
///
/// This module contains utilities for development and debugging,
/// such as a fixture-backed client and screenshot capture.

pub mod mock_client;
pub mod screenshot;
