//! Services
//!
//! The engine and its concrete store implementation.

mod engine;
mod json_history;

pub use engine::*;
pub use json_history::*;
