//! Dropdown option lists, keyed by category.
//!
//! A category reads through to its configured defaults until the first
//! write, after which the stored list is authoritative.

use dashmap::DashMap;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Option category must not be blank")]
    BlankCategory,

    #[error("Option value must not be blank")]
    BlankValue,
}

pub trait OptionsRepository: Send + Sync {
    fn list(&self, category: &str) -> Result<Vec<String>, OptionsError>;

    /// Appends `value` unless an entry equal ignoring case already exists.
    fn add(&self, category: &str, value: &str) -> Result<Vec<String>, OptionsError>;

    /// Removes entries equal to `value` ignoring case; absent values are a no-op.
    fn remove(&self, category: &str, value: &str) -> Result<Vec<String>, OptionsError>;
}

#[derive(Default)]
pub struct InMemoryOptionsRepository {
    defaults: HashMap<String, Vec<String>>,
    stored: DashMap<String, Vec<String>>,
}

fn category_key(category: &str) -> Result<String, OptionsError> {
    let key = category.trim().to_lowercase().replace(['-', ' '], "_");
    if key.is_empty() {
        Err(OptionsError::BlankCategory)
    } else {
        Ok(key)
    }
}

impl InMemoryOptionsRepository {
    pub fn new(defaults: HashMap<String, Vec<String>>) -> Self {
        let defaults = defaults
            .into_iter()
            .filter_map(|(category, values)| {
                category_key(&category).ok().map(|key| (key, values))
            })
            .collect();
        Self {
            defaults,
            stored: DashMap::new(),
        }
    }

    fn defaults_for(&self, key: &str) -> Vec<String> {
        self.defaults.get(key).cloned().unwrap_or_default()
    }
}

impl OptionsRepository for InMemoryOptionsRepository {
    fn list(&self, category: &str) -> Result<Vec<String>, OptionsError> {
        let key = category_key(category)?;
        Ok(match self.stored.get(&key) {
            Some(values) => values.clone(),
            None => self.defaults_for(&key),
        })
    }

    fn add(&self, category: &str, value: &str) -> Result<Vec<String>, OptionsError> {
        let key = category_key(category)?;
        let value = value.trim();
        if value.is_empty() {
            return Err(OptionsError::BlankValue);
        }

        let defaults = self.defaults_for(&key);
        let mut entry = self.stored.entry(key).or_insert(defaults);
        let lowered = value.to_lowercase();
        if !entry.iter().any(|existing| existing.to_lowercase() == lowered) {
            entry.push(value.to_string());
        }
        Ok(entry.clone())
    }

    fn remove(&self, category: &str, value: &str) -> Result<Vec<String>, OptionsError> {
        let key = category_key(category)?;
        let lowered = value.trim().to_lowercase();
        let matches = |existing: &String| existing.to_lowercase() == lowered;

        if let Some(mut entry) = self.stored.get_mut(&key) {
            entry.retain(|existing| !matches(existing));
            return Ok(entry.clone());
        }

        // Nothing to remove: keep reading through to the defaults.
        let defaults = self.defaults_for(&key);
        if !defaults.iter().any(matches) {
            return Ok(defaults);
        }

        let mut entry = self.stored.entry(key).or_insert(defaults);
        entry.retain(|existing| !matches(existing));
        Ok(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repository() -> InMemoryOptionsRepository {
        let mut defaults = HashMap::new();
        defaults.insert(
            "Care Center".to_string(),
            vec!["Coimbatore".to_string(), "Chennai".to_string()],
        );
        InMemoryOptionsRepository::new(defaults)
    }

    #[test]
    fn reads_through_to_defaults() {
        let repo = repository();
        assert_eq!(repo.list("care_center").unwrap(), vec!["Coimbatore", "Chennai"]);
        assert_eq!(repo.list("care-center").unwrap(), vec!["Coimbatore", "Chennai"]);
        assert!(repo.list("blood_group").unwrap().is_empty());
    }

    #[test]
    fn add_writes_on_top_of_defaults() {
        let repo = repository();
        let values = repo.add("care_center", " Madurai ").unwrap();
        assert_eq!(values, vec!["Coimbatore", "Chennai", "Madurai"]);
        assert_eq!(repo.list("care_center").unwrap(), values);
    }

    #[test]
    fn duplicate_add_is_ignored_case_insensitively() {
        let repo = repository();
        let values = repo.add("care_center", "chennai").unwrap();
        assert_eq!(values, vec!["Coimbatore", "Chennai"]);
    }

    #[test]
    fn blank_input_rejected() {
        let repo = repository();
        assert_eq!(repo.add("care_center", "  "), Err(OptionsError::BlankValue));
        assert_eq!(repo.list(" "), Err(OptionsError::BlankCategory));
    }

    #[test]
    fn remove_is_case_insensitive_and_sticky() {
        let repo = repository();
        assert_eq!(repo.remove("care_center", "COIMBATORE").unwrap(), vec!["Chennai"]);
        assert_eq!(repo.list("care_center").unwrap(), vec!["Chennai"]);
        assert_eq!(repo.remove("care_center", "Pune").unwrap(), vec!["Chennai"]);
    }

    #[test]
    fn removing_from_untouched_category_stores_nothing() {
        let repo = repository();
        for n in 0..50 {
            assert!(repo.remove(&format!("unknown_{}", n), "x").unwrap().is_empty());
        }
        assert_eq!(
            repo.remove("care_center", "Pune").unwrap(),
            vec!["Coimbatore", "Chennai"]
        );
        assert!(repo.stored.is_empty());

        repo.add("care_center", "Madurai").unwrap();
        assert_eq!(repo.stored.len(), 1);
    }
}
