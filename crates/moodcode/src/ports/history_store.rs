//! History Store Port
//!
//! Abstract interface for MoodRecord persistence. Load and save each
//! acquire and release the backing store within the call; no handle is
//! held across calls.

use crate::domain::{errors::EngineError, MoodRecord};

/// Repository interface for the persisted mood history
pub trait HistoryStore {
    /// Read the full persisted history.
    ///
    /// A missing store is not an error: implementations return an empty
    /// sequence. Unreadable or unparseable state is `HistoryLoad`.
    fn load(&self) -> Result<Vec<MoodRecord>, EngineError>;

    /// Overwrite the persisted store with the complete history.
    ///
    /// Full rewrite semantics, never an append.
    fn save(&self, records: &[MoodRecord]) -> Result<(), EngineError>;
}
