//! Moodcode Domain Library
//!
//! Core engine for generating short "mood codes" from a fixed taxonomy of
//! emotional categories, with a persisted, append-only generation history.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (MoodCatalog, MoodRecord)
//!   - `value_objects/`: Immutable value types (Rgb)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `HistoryStore`: persistence interface for the mood history
//!
//! - **Services** (`services/`): The engine and concrete adapters
//!   - `MoodEngine`: generation and history ownership
//!   - `JsonHistoryStore`: single-file JSON persistence
//!
//! # Usage
//!
//! ```rust,ignore
//! use moodcode::{JsonHistoryStore, MoodCatalog, MoodEngine};
//!
//! let mut engine = MoodEngine::new(MoodCatalog::builtin(), JsonHistoryStore::in_working_dir());
//! let generation = engine.generate(Some("happy"))?;
//! println!("{}", generation.record.code);
//! ```

pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use domain::{EngineError, MoodCatalog, MoodDefinition, MoodRecord, Rgb};
pub use ports::HistoryStore;
pub use services::{Generation, JsonHistoryStore, MoodEngine, DEFAULT_HISTORY_FILE};
