//! Mood Catalog - The fixed taxonomy of emotional categories
//!
//! Pure domain data without infrastructure dependencies. The catalog is
//! built once at startup and never mutated.

use crate::domain::errors::EngineError;

/// The per-mood pools a generation draws from.
///
/// Invariant: every sequence holds at least one element.
#[derive(Debug, Clone)]
pub struct MoodDefinition {
    pub colors: Vec<String>,
    pub symbols: Vec<String>,
    pub codes: Vec<String>,
}

/// Immutable mapping from mood name to its definition.
///
/// Entries keep definition order so numbered menus stay stable across runs.
/// Names are lowercase and matched case-insensitively.
#[derive(Debug, Clone)]
pub struct MoodCatalog {
    entries: Vec<(String, MoodDefinition)>,
}

impl MoodCatalog {
    /// Build a catalog from (name, definition) pairs.
    ///
    /// Rejects duplicate names (case-insensitive) and empty pools.
    pub fn new(entries: Vec<(String, MoodDefinition)>) -> Result<Self, EngineError> {
        let mut seen: Vec<String> = Vec::new();
        for (name, def) in &entries {
            let lower = name.to_lowercase();
            if seen.contains(&lower) {
                return Err(EngineError::Validation(format!(
                    "Duplicate mood name: {}",
                    name
                )));
            }
            if def.colors.is_empty() || def.symbols.is_empty() || def.codes.is_empty() {
                return Err(EngineError::Validation(format!(
                    "Mood '{}' has an empty color, symbol, or code pool",
                    name
                )));
            }
            seen.push(lower);
        }

        let entries = entries
            .into_iter()
            .map(|(name, def)| (name.to_lowercase(), def))
            .collect();

        Ok(Self { entries })
    }

    /// The builtin six-mood taxonomy.
    pub fn builtin() -> Self {
        let def = |colors: &[&str], symbols: &[&str], codes: &[&str]| MoodDefinition {
            colors: colors.iter().map(|s| s.to_string()).collect(),
            symbols: symbols.iter().map(|s| s.to_string()).collect(),
            codes: codes.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            entries: vec![
                (
                    "happy".to_string(),
                    def(
                        &["#FFD700", "#FFA500", "#FFFF00"],
                        &["☀️", "🌟", "😊", "🌈"],
                        &["SUN", "GLOW", "JOY", "BEAM"],
                    ),
                ),
                (
                    "calm".to_string(),
                    def(
                        &["#87CEEB", "#98FB98", "#E6E6FA"],
                        &["🌊", "🌿", "☁️", "🕊️"],
                        &["SERNE", "PEACE", "STILL", "CALM"],
                    ),
                ),
                (
                    "energetic".to_string(),
                    def(
                        &["#FF4500", "#FF6347", "#32CD32"],
                        &["⚡", "🔥", "🚀", "💥"],
                        &["ZAP", "BURST", "SURGE", "POWER"],
                    ),
                ),
                (
                    "creative".to_string(),
                    def(
                        &["#9370DB", "#FF69B4", "#00CED1"],
                        &["🎨", "✨", "💡", "🦄"],
                        &["INSP", "INNOV", "CREATE", "DREAM"],
                    ),
                ),
                (
                    "melancholy".to_string(),
                    def(
                        &["#708090", "#4682B4", "#6A5ACD"],
                        &["🌧️", "🌫️", "🌙", "🎵"],
                        &["BLUE", "MIST", "ECHO", "SOUL"],
                    ),
                ),
                (
                    "focused".to_string(),
                    def(
                        &["#2F4F4F", "#008080", "#5F9EA0"],
                        &["🎯", "📊", "🔍", "⚙️"],
                        &["FOCUS", "CLARITY", "PRECIS", "SHARP"],
                    ),
                ),
            ],
        }
    }

    /// All mood names in definition order.
    pub fn mood_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Number of moods in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a name (any casing) to its stored form.
    pub fn canonical(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(|(stored, _)| stored.as_str())
            .find(|stored| stored.eq_ignore_ascii_case(name))
    }

    /// Look up a mood definition, case-insensitively.
    ///
    /// Callers must treat a miss as "fall back to random selection",
    /// never as fatal.
    pub fn lookup(&self, name: &str) -> Result<&MoodDefinition, EngineError> {
        self.entries
            .iter()
            .find(|(stored, _)| stored.eq_ignore_ascii_case(name))
            .map(|(_, def)| def)
            .ok_or_else(|| EngineError::unknown_mood(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_in_definition_order() {
        let catalog = MoodCatalog::builtin();
        let names: Vec<&str> = catalog.mood_names().collect();
        assert_eq!(
            names,
            vec![
                "happy",
                "calm",
                "energetic",
                "creative",
                "melancholy",
                "focused"
            ]
        );
    }

    #[test]
    fn test_builtin_pools_non_empty() {
        let catalog = MoodCatalog::builtin();
        for name in catalog.mood_names() {
            let def = catalog.lookup(name).unwrap();
            assert!(!def.colors.is_empty());
            assert!(!def.symbols.is_empty());
            assert!(!def.codes.is_empty());
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = MoodCatalog::builtin();
        assert!(catalog.lookup("HAPPY").is_ok());
        assert!(catalog.lookup("Happy").is_ok());
        assert_eq!(catalog.canonical("MeLaNcHoLy"), Some("melancholy"));
    }

    #[test]
    fn test_lookup_miss_is_unknown_mood() {
        let catalog = MoodCatalog::builtin();
        let err = catalog.lookup("grumpy").unwrap_err();
        assert!(matches!(err, EngineError::UnknownMood { .. }));
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let def = MoodDefinition {
            colors: vec!["#FFFFFF".to_string()],
            symbols: vec!["*".to_string()],
            codes: vec!["X".to_string()],
        };
        let result = MoodCatalog::new(vec![
            ("happy".to_string(), def.clone()),
            ("Happy".to_string(), def),
        ]);
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_empty_pools() {
        let def = MoodDefinition {
            colors: vec![],
            symbols: vec!["*".to_string()],
            codes: vec!["X".to_string()],
        };
        let result = MoodCatalog::new(vec![("happy".to_string(), def)]);
        assert!(matches!(result, Err(EngineError::Validation(_))));
    }
}
