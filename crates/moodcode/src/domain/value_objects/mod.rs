//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod rgb;

pub use rgb::*;
