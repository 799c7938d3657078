//! Mood Engine - Generation and history
//!
//! Resolves a mood against the catalog, draws its display components,
//! stamps the wall clock, and keeps the append-only history persisted
//! after every generation.

use chrono::Local;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::warn;

use crate::domain::{errors::EngineError, MoodCatalog, MoodRecord, Rgb};
use crate::ports::HistoryStore;

/// Outcome of a single generation call.
///
/// The record is always produced; a failed persistence write rides
/// alongside it instead of failing the call, so callers can warn that the
/// record may not survive a restart.
#[derive(Debug)]
pub struct Generation {
    pub record: MoodRecord,
    pub save_error: Option<EngineError>,
}

/// The generator/history engine.
///
/// Owns the in-memory history exclusively. History is loaded once at
/// construction; a load failure degrades to an empty history rather than
/// blocking readiness.
pub struct MoodEngine<S: HistoryStore> {
    catalog: MoodCatalog,
    store: S,
    rng: StdRng,
    history: Vec<MoodRecord>,
}

impl<S: HistoryStore> MoodEngine<S> {
    pub fn new(catalog: MoodCatalog, store: S) -> Self {
        Self::with_rng(catalog, store, StdRng::from_entropy())
    }

    /// Construct with an explicit rng, for deterministic tests.
    pub fn with_rng(catalog: MoodCatalog, store: S, rng: StdRng) -> Self {
        let history = match store.load() {
            Ok(history) => history,
            Err(e) => {
                warn!("could not load mood history, starting empty: {}", e);
                Vec::new()
            }
        };

        Self {
            catalog,
            store,
            rng,
            history,
        }
    }

    pub fn catalog(&self) -> &MoodCatalog {
        &self.catalog
    }

    /// All mood names in catalog definition order.
    pub fn mood_names(&self) -> impl Iterator<Item = &str> {
        self.catalog.mood_names()
    }

    /// Generate a mood record and persist the updated history.
    ///
    /// An absent, empty, or unknown `selected` name falls back to a
    /// uniformly random mood; the call never fails over bad input.
    pub fn generate(&mut self, selected: Option<&str>) -> Result<Generation, EngineError> {
        let name = self.resolve(selected)?;
        let def = self.catalog.lookup(&name)?;

        let color = pick(&mut self.rng, &def.colors)?.clone();
        let symbol = pick(&mut self.rng, &def.symbols)?.clone();
        let base_code = pick(&mut self.rng, &def.codes)?.clone();

        let now = Local::now();
        let rgb = Rgb::from_hex(&color)?;
        let record = MoodRecord {
            mood: display_case(&name),
            code: format!("{}-{}", base_code, now.format("%H%M")),
            color,
            symbol,
            timestamp: now,
            rgb,
        };

        self.history.push(record.clone());
        let save_error = self.store.save(&self.history).err();
        if let Some(e) = &save_error {
            warn!("mood record kept in memory only: {}", e);
        }

        Ok(Generation { record, save_error })
    }

    /// The most recent `limit` records, oldest of the window first.
    pub fn history(&self, limit: usize) -> &[MoodRecord] {
        let start = self.history.len().saturating_sub(limit);
        &self.history[start..]
    }

    fn resolve(&mut self, selected: Option<&str>) -> Result<String, EngineError> {
        if let Some(name) = selected {
            if let Some(canonical) = self.catalog.canonical(name) {
                return Ok(canonical.to_string());
            }
        }

        let names: Vec<&str> = self.catalog.mood_names().collect();
        names
            .choose(&mut self.rng)
            .map(|name| name.to_string())
            .ok_or_else(|| EngineError::Validation("catalog has no moods".to_string()))
    }
}

fn pick<'a, T>(rng: &mut StdRng, pool: &'a [T]) -> Result<&'a T, EngineError> {
    pool.choose(rng)
        .ok_or_else(|| EngineError::Validation("empty selection pool".to_string()))
}

/// "happy" -> "Happy"
fn display_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
