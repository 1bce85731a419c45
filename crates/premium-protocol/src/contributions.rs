//! Ordered feature → contribution mapping returned by `/explain`.
//!
//! The service's key order is meaningful (it is the display order), so the
//! map is kept as a vector of pairs and deserialized straight from the JSON
//! object without passing through a hashed or sorted map.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Signed per-feature contributions, in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContributionMap {
    entries: Vec<(String, f64)>,
}

impl ContributionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a feature. A new feature goes to the end; an
    /// existing one keeps its position.
    pub fn insert(&mut self, feature: impl Into<String>, value: f64) {
        let feature = feature.into();
        match self.entries.iter_mut().find(|(name, _)| *name == feature) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((feature, value)),
        }
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn features(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for ContributionMap {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (feature, value) in iter {
            map.insert(feature, value);
        }
        map
    }
}

impl Serialize for ContributionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (feature, value) in &self.entries {
            map.serialize_entry(feature, value)?;
        }
        map.end()
    }
}

struct ContributionMapVisitor;

impl<'de> Visitor<'de> for ContributionMapVisitor {
    type Value = ContributionMap;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object mapping feature names to numbers")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = ContributionMap {
            entries: Vec::with_capacity(access.size_hint().unwrap_or(4)),
        };
        while let Some((feature, value)) = access.next_entry::<String, f64>()? {
            map.insert(feature, value);
        }
        Ok(map)
    }
}

impl<'de> Deserialize<'de> for ContributionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ContributionMapVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_document_order() {
        let map: ContributionMap =
            serde_json::from_str(r#"{"smoker": 1.0, "age": 2.0, "children": 0, "bmi": -3.5}"#)
                .unwrap();
        let order: Vec<&str> = map.features().collect();
        assert_eq!(order, vec!["smoker", "age", "children", "bmi"]);
        assert_eq!(map.get("bmi"), Some(-3.5));
    }

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let map: ContributionMap =
            serde_json::from_str(r#"{"age": 1.0, "bmi": 2.0, "age": 5.0}"#).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.iter().next(), Some(("age", 5.0)));
    }

    #[test]
    fn test_rejects_non_numeric_value() {
        let parsed: Result<ContributionMap, _> = serde_json::from_str(r#"{"age": "high"}"#);
        assert!(parsed.is_err());
    }
}
