//! Domain Entities

mod catalog;
mod record;

pub use catalog::*;
pub use record::*;
