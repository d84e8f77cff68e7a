//! Resource production and requirements.
//!
//! Villages produce resources (rice, wood, ...) that other figures
//! require to stay on the board. `Resources` is a small named-amount map
//! ordered by name so serialized output is stable.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::figure::Figure;

/// Named resource amounts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resources(BTreeMap<String, i32>);

impl Resources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an amount of a resource (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, amount: i32) -> Self {
        self.add(name, amount);
        self
    }

    /// Add an amount of a resource. Entries that reach zero are dropped.
    pub fn add(&mut self, name: impl Into<String>, amount: i32) {
        let name = name.into();
        let entry = self.0.entry(name.clone()).or_insert(0);
        *entry += amount;
        if *entry == 0 {
            self.0.remove(&name);
        }
    }

    /// Amount of a resource (0 if absent).
    #[must_use]
    pub fn get(&self, name: &str) -> i32 {
        self.0.get(name).copied().unwrap_or(0)
    }

    /// Add every entry of `other`.
    pub fn add_all(&mut self, other: &Resources) {
        for (name, &amount) in &other.0 {
            self.add(name.as_str(), amount);
        }
    }

    /// Subtract every entry of `other`.
    pub fn subtract_all(&mut self, other: &Resources) {
        for (name, &amount) in &other.0 {
            self.add(name.as_str(), -amount);
        }
    }

    /// True if every amount in `required` is available here.
    #[must_use]
    pub fn covers(&self, required: &Resources) -> bool {
        required.0.iter().all(|(name, &amount)| self.get(name) >= amount)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.0.iter().map(|(name, &amount)| (name.as_str(), amount))
    }
}

/// Net resources of a set of figures: everything produced minus everything
/// required. Negative entries mean a shortage.
#[must_use]
pub fn net_resources<'a>(figures: impl IntoIterator<Item = &'a Figure>) -> Resources {
    let mut net = Resources::new();
    for figure in figures {
        net.add_all(&figure.produces);
        net.subtract_all(&figure.requires);
    }
    net
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut res = Resources::new().with("rice", 2);
        res.add("wood", 1);
        res.add("rice", 1);

        assert_eq!(res.get("rice"), 3);
        assert_eq!(res.get("wood"), 1);
        assert_eq!(res.get("stone"), 0);
    }

    #[test]
    fn test_zero_entries_dropped() {
        let mut res = Resources::new().with("rice", 2);
        res.add("rice", -2);
        assert!(res.is_empty());
    }

    #[test]
    fn test_covers() {
        let available = Resources::new().with("rice", 2).with("wood", 1);

        assert!(available.covers(&Resources::new().with("rice", 2)));
        assert!(!available.covers(&Resources::new().with("wood", 2)));
        assert!(!available.covers(&Resources::new().with("stone", 1)));
        assert!(available.covers(&Resources::new()));
    }

    #[test]
    fn test_serializes_as_map() {
        let res = Resources::new().with("wood", 1).with("rice", 2);
        let json = serde_json::to_string(&res).unwrap();
        assert_eq!(json, r#"{"rice":2,"wood":1}"#);
    }
}
