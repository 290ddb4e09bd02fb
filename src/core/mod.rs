//! Value types, projection math and view state.

pub mod config;
pub mod constants;
pub mod geo;
pub mod projection;
pub mod tile;
pub mod viewport;
