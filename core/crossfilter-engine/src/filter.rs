//! FILENAME: core/crossfilter-engine/src/filter.rs
//! Filter State - the per-session selection.
//!
//! At most one selected category per dimension. A missing entry means "no
//! constraint on this dimension". Entries keep the order in which they were
//! first selected so the active-filter row reads in click order; replacing a
//! value keeps its position.
//!
//! Values are not validated against the dataset here: a category that does
//! not occur simply filters everything out downstream.
//!
//! Serialized as a list of entries. Deserializing a list that names the same
//! dimension twice fails.

use engine::Dimension;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// One active selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterEntry {
    pub dimension: Dimension,
    pub value: String,
}

impl FilterEntry {
    /// Label shown in the active-filter row, e.g. `State: Texas`.
    pub fn label(&self) -> String {
        format!("{}: {}", self.dimension, self.value)
    }
}

/// A serialized state selected the same dimension more than once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("dimension {0} is selected more than once")]
pub struct DuplicateSelection(pub Dimension);

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<FilterEntry>", into = "Vec<FilterEntry>")]
pub struct FilterState {
    entries: SmallVec<[FilterEntry; 4]>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, dimension: Dimension) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.dimension == dimension)
            .map(|e| e.value.as_str())
    }

    /// Selects `value` for `dimension`, replacing any previous selection.
    pub fn set(&mut self, dimension: Dimension, value: impl Into<String>) {
        let value = value.into();
        match self.entries.iter_mut().find(|e| e.dimension == dimension) {
            Some(entry) => entry.value = value,
            None => self.entries.push(FilterEntry { dimension, value }),
        }
    }

    /// Removes the selection for `dimension`, returning the old value.
    pub fn unset(&mut self, dimension: Dimension) -> Option<String> {
        let pos = self.entries.iter().position(|e| e.dimension == dimension)?;
        Some(self.entries.remove(pos).value)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, dimension: Dimension) -> bool {
        self.get(dimension).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(dimension, value)` pairs in selection order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &str)> {
        self.entries.iter().map(|e| (e.dimension, e.value.as_str()))
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Entries for the active-filter row, in selection order.
    pub fn active_filters(&self) -> Vec<FilterEntry> {
        self.entries.to_vec()
    }
}

impl TryFrom<Vec<FilterEntry>> for FilterState {
    type Error = DuplicateSelection;

    fn try_from(entries: Vec<FilterEntry>) -> Result<Self, Self::Error> {
        let mut state = FilterState::new();
        for entry in entries {
            if state.contains(entry.dimension) {
                return Err(DuplicateSelection(entry.dimension));
            }
            state.entries.push(entry);
        }
        Ok(state)
    }
}

impl From<FilterState> for Vec<FilterEntry> {
    fn from(state: FilterState) -> Self {
        state.entries.into_vec()
    }
}

/// Equality is by content; selection order does not matter.
impl PartialEq for FilterState {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(d, v)| other.get(d) == Some(v))
    }
}

impl Eq for FilterState {}

impl<S: Into<String>> FromIterator<(Dimension, S)> for FilterState {
    fn from_iter<I: IntoIterator<Item = (Dimension, S)>>(iter: I) -> Self {
        let mut state = FilterState::new();
        for (dimension, value) in iter {
            state.set(dimension, value);
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_unset() {
        let mut state = FilterState::new();
        assert_eq!(state.get(Dimension::State), None);

        state.set(Dimension::State, "Texas");
        assert_eq!(state.get(Dimension::State), Some("Texas"));

        assert_eq!(state.unset(Dimension::State), Some("Texas".to_string()));
        assert_eq!(state.unset(Dimension::State), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_single_select_per_dimension() {
        let mut state = FilterState::new();
        state.set(Dimension::State, "Texas");
        state.set(Dimension::SubCategory, "Chairs");
        state.set(Dimension::State, "Ohio");

        assert_eq!(state.len(), 2);
        assert_eq!(state.get(Dimension::State), Some("Ohio"));
        // Replacement keeps the original position
        assert_eq!(state.entries()[0].dimension, Dimension::State);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: FilterState = [(Dimension::State, "Texas"), (Dimension::City, "Austin")]
            .into_iter()
            .collect();
        let b: FilterState = [(Dimension::City, "Austin"), (Dimension::State, "Texas")]
            .into_iter()
            .collect();
        let c: FilterState = [(Dimension::City, "Austin")].into_iter().collect();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_clear() {
        let mut state: FilterState = [(Dimension::State, "x"), (Dimension::Category, "y")]
            .into_iter()
            .collect();
        state.clear();
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn test_deserialize_keeps_selection_order() {
        let json = r#"[{"dimension":"City","value":"Austin"},{"dimension":"State","value":"Texas"}]"#;
        let state: FilterState = serde_json::from_str(json).unwrap();

        assert_eq!(state.len(), 2);
        assert_eq!(state.entries()[0].dimension, Dimension::City);
        assert_eq!(state.get(Dimension::State), Some("Texas"));
        assert_eq!(serde_json::to_string(&state).unwrap(), json);
    }

    #[test]
    fn test_deserialize_rejects_repeated_dimension() {
        let json = r#"[{"dimension":"State","value":"Texas"},{"dimension":"State","value":"Ohio"}]"#;
        let err = serde_json::from_str::<FilterState>(json).unwrap_err();
        assert!(err.to_string().contains("State is selected more than once"));

        assert_eq!(
            FilterState::try_from(vec![
                FilterEntry { dimension: Dimension::City, value: "a".into() },
                FilterEntry { dimension: Dimension::City, value: "b".into() },
            ]),
            Err(DuplicateSelection(Dimension::City))
        );
    }

    #[test]
    fn test_entry_label() {
        let entry = FilterEntry {
            dimension: Dimension::SubCategory,
            value: "Chairs".to_string(),
        };
        assert_eq!(entry.label(), "Sub-Category: Chairs");
    }
}
