// Unique-keyed integer scores

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Mapping from unique string keys to integer scores
///
/// Iteration follows insertion order. Overwriting a key keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreTable {
    entries: IndexMap<String, i64>,
}

impl ScoreTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a score, returning the value it replaced
    pub fn set(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
        let key = key.into();
        let previous = self.entries.insert(key.clone(), value);
        debug!(key = %key, value, ?previous, "ScoreTable::set");
        previous
    }

    /// Score for `key`, or `None` if it was never set
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Remove a score, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<i64> {
        self.entries.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, i64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (K, i64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, value) in iter {
            table.set(key, value);
        }
        table
    }
}

impl std::fmt::Display for ScoreTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "{} : {}", key, value)?;
        }
        Ok(())
    }
}
