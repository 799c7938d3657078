//! Ports
//!
//! Abstract interfaces the engine depends on.

mod history_store;

pub use history_store::*;
