use std::collections::HashMap;
use thiserror::Error;

use crate::model::Observation;

/// Out-of-range access to the store. A caller bug, not a runtime condition
/// to recover from; the store is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} out of bounds for store of size {size}")]
pub struct IndexError {
    pub index: usize,
    pub size: usize,
}

/// Insertion-ordered collection of observations with case-insensitive city
/// lookup.
///
/// Ordering is kept in a `Vec`; an auxiliary map from lowercased city name
/// to first position gives O(1) membership tests. `append` does NOT reject
/// duplicate city names: one record per city is a caller convention,
/// enforced by checking [`ObservationStore::contains`] before appending.
#[derive(Debug, Default)]
pub struct ObservationStore {
    records: Vec<Observation>,
    by_city: HashMap<String, usize>,
}

impl ObservationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observation at the end. Duplicates are accepted; see the
    /// type-level docs.
    pub fn append(&mut self, obs: Observation) {
        let fingerprint = obs.city_name.to_lowercase();
        self.records.push(obs);
        let pos = self.records.len() - 1;
        self.by_city.entry(fingerprint).or_insert(pos);
    }

    pub fn get(&self, index: usize) -> Result<&Observation, IndexError> {
        self.records.get(index).ok_or(IndexError {
            index,
            size: self.records.len(),
        })
    }

    /// Remove and return the observation at `index`; later elements shift
    /// down by one.
    pub fn remove(&mut self, index: usize) -> Result<Observation, IndexError> {
        if index >= self.records.len() {
            return Err(IndexError {
                index,
                size: self.records.len(),
            });
        }

        let removed = self.records.remove(index);
        self.rebuild_index();
        Ok(removed)
    }

    /// Position of the first record whose city name matches
    /// case-insensitively.
    pub fn index_of(&self, city_name: &str) -> Option<usize> {
        self.by_city.get(&city_name.to_lowercase()).copied()
    }

    pub fn contains(&self, city_name: &str) -> bool {
        self.index_of(city_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.by_city.clear();
    }

    /// Read-only snapshot in insertion order.
    pub fn as_slice(&self) -> &[Observation] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.records.iter()
    }

    fn rebuild_index(&mut self) {
        self.by_city.clear();
        for (pos, obs) in self.records.iter().enumerate() {
            self.by_city
                .entry(obs.city_name.to_lowercase())
                .or_insert(pos);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn obs(city: &str, temp: f64) -> Observation {
        Observation {
            city_name: city.to_string(),
            country: "XX".to_string(),
            temperature_f: temp,
            feels_like_f: temp,
            description: "test".to_string(),
            main_condition: "Clear".to_string(),
            humidity_pct: 50,
            wind_speed_mph: 5.0,
            fetched_at: Utc::now(),
        }
    }

    #[test]
    fn append_grows_size_in_insertion_order() {
        let mut store = ObservationStore::new();
        assert!(store.is_empty());

        store.append(obs("London", 60.0));
        store.append(obs("Paris", 70.0));
        store.append(obs("Oslo", 40.0));

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().city_name, "London");
        assert_eq!(store.get(2).unwrap().city_name, "Oslo");
    }

    #[test]
    fn clear_resets_to_empty() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));
        store.append(obs("Paris", 70.0));

        store.clear();
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert!(!store.contains("London"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));

        assert_eq!(store.index_of("London"), Some(0));
        assert_eq!(store.index_of("LONDON"), Some(0));
        assert_eq!(store.index_of("london"), Some(0));
        assert!(store.contains("lOnDoN"));
        assert_eq!(store.index_of("Lisbon"), None);
    }

    #[test]
    fn get_out_of_bounds_reports_index_and_size() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));

        let err = store.get(1).unwrap_err();
        assert_eq!(err, IndexError { index: 1, size: 1 });
    }

    #[test]
    fn remove_shifts_later_elements_down() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));
        store.append(obs("Paris", 70.0));
        store.append(obs("Oslo", 40.0));

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.city_name, "Paris");

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().city_name, "Oslo");
        assert_eq!(store.index_of("Oslo"), Some(1));
        assert!(!store.contains("Paris"));
    }

    #[test]
    fn remove_out_of_bounds_leaves_store_unchanged() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));

        assert!(store.remove(5).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().city_name, "London");
    }

    #[test]
    fn remove_last_then_append_keeps_end_of_sequence_semantics() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));
        store.append(obs("Paris", 70.0));

        store.remove(1).unwrap();
        store.append(obs("Oslo", 40.0));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().city_name, "Oslo");
    }

    #[test]
    fn append_does_not_reject_duplicates_and_index_of_finds_first() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));
        store.append(obs("london", 62.0));

        assert_eq!(store.len(), 2);
        assert_eq!(store.index_of("LONDON"), Some(0));
    }

    #[test]
    fn removing_first_duplicate_repoints_lookup_to_the_next() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));
        store.append(obs("london", 62.0));

        store.remove(0).unwrap();
        assert_eq!(store.index_of("London"), Some(0));
        assert_eq!(store.get(0).unwrap().temperature_f, 62.0);
    }

    #[test]
    fn as_slice_preserves_insertion_order() {
        let mut store = ObservationStore::new();
        store.append(obs("London", 60.0));
        store.append(obs("Paris", 70.0));

        let names: Vec<&str> = store.as_slice().iter().map(|o| o.city_name.as_str()).collect();
        assert_eq!(names, vec!["London", "Paris"]);
    }
}
