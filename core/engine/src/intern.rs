//! FILENAME: core/engine/src/intern.rs
//! Category value interning.
//!
//! Each unique category string is stored once per dimension and referenced
//! by a `ValueId`. Records carry ids, so filtering compares integers and
//! grouping hashes integers; text is only looked up again for display.

use rustc_hash::FxHashMap;

/// A reference to an interned value within a dimension's value store.
/// Using u32 to save memory (supports up to 4B unique values per dimension).
pub type ValueId = u32;

/// Unique value store for a single column.
#[derive(Debug, Clone, Default)]
pub struct ValueStore {
    /// Map from value to its unique ID (for deduplication during build).
    value_to_id: FxHashMap<String, ValueId>,

    /// Values indexed by ValueId, in order of first appearance.
    id_to_value: Vec<String>,
}

impl ValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a value and returns its ValueId.
    /// If the value already exists, returns the existing ID.
    pub fn intern(&mut self, value: &str) -> ValueId {
        if let Some(&id) = self.value_to_id.get(value) {
            return id;
        }

        let id = self.id_to_value.len() as ValueId;
        self.id_to_value.push(value.to_string());
        self.value_to_id.insert(value.to_string(), id);
        id
    }

    /// Finds the id of a value without interning it.
    pub fn lookup(&self, value: &str) -> Option<ValueId> {
        self.value_to_id.get(value).copied()
    }

    /// Gets the value for a given ID.
    pub fn get(&self, id: ValueId) -> Option<&str> {
        self.id_to_value.get(id as usize).map(String::as_str)
    }

    /// Returns the number of unique values.
    pub fn len(&self) -> usize {
        self.id_to_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_value.is_empty()
    }

    /// Iterates `(id, value)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (ValueId, &str)> {
        self.id_to_value
            .iter()
            .enumerate()
            .map(|(id, value)| (id as ValueId, value.as_str()))
    }
}
