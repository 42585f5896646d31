// In-memory record store: ordered record sequence plus a score table

use crate::error::{Result, StoreError};
use crate::filter::Filter;
use crate::query;
use crate::record::Record;
use crate::scores::ScoreTable;
use crate::value::Value;
use tracing::debug;

/// Ordered sequence of records and a keyed score table
///
/// Indices are stable until a record is removed; nothing reorders the
/// sequence implicitly. The store owns its data outright and has no internal
/// locking, so wrap it in a mutex if it must be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    scores: ScoreTable,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing records and scores
    pub fn with_data(records: Vec<Record>, scores: ScoreTable) -> Self {
        Self { records, scores }
    }

    // ========================================================================
    // Record sequence
    // ========================================================================

    /// Append a record to the end of the sequence, returning its index
    pub fn append(&mut self, record: Record) -> usize {
        self.records.push(record);
        let index = self.records.len() - 1;
        debug!(index, "RecordStore::append");
        index
    }

    /// Record at `index`
    pub fn get(&self, index: usize) -> Result<&Record> {
        self.records.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Replace one field of the record at `index`, returning the previous value
    ///
    /// On error the sequence is left untouched.
    pub fn set_field(&mut self, index: usize, field: &str, value: impl Into<Value>) -> Result<Value> {
        let len = self.records.len();
        let record = self
            .records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;

        let value = value.into();
        debug!(index, field, kind = value.kind(), "RecordStore::set_field");
        record.set(field, value)
    }

    /// Remove the record at `index`; later records shift down by one
    pub fn remove(&mut self, index: usize) -> Result<Record> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        debug!(index, "RecordStore::remove");
        Ok(self.records.remove(index))
    }

    /// First record whose `id` field equals `id`
    pub fn find_by_id(&self, id: &Value) -> Option<(usize, &Record)> {
        self.records.iter().enumerate().find(|(_, record)| record.id() == Some(id))
    }

    /// The record sequence, in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching every filter, in sequence order
    pub fn list(&self, filters: &[Filter]) -> Vec<&Record> {
        query::filter(&self.records, filters).collect()
    }

    // ========================================================================
    // Score table
    // ========================================================================

    /// Insert or overwrite a score; the replaced value, if any, is returned
    pub fn score_set(&mut self, key: impl Into<String>, value: i64) -> Option<i64> {
        self.scores.set(key, value)
    }

    /// Score for `key`, or `None` if it was never set
    pub fn score_get(&self, key: &str) -> Option<i64> {
        self.scores.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.scores.contains_key(key)
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
