use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Conditional modifiers: modifier name to "should apply"
///
/// Iteration follows insertion order so generated class names are
/// reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifiers(IndexMap<String, bool>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a modifier, keeping its original position if it already exists
    pub fn set(&mut self, name: impl Into<String>, active: bool) -> &mut Self {
        self.0.insert(name.into(), active);
        self
    }

    pub fn with(mut self, name: impl Into<String>, active: bool) -> Self {
        self.set(name, active);
        self
    }

    pub fn get(&self, name: &str) -> Option<bool> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, active)| (name.as_str(), *active))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Modifiers {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, active)| (name.into(), active))
                .collect(),
        )
    }
}

impl<K: Into<String>, const N: usize> From<[(K, bool); N]> for Modifiers {
    fn from(modifiers: [(K, bool); N]) -> Self {
        modifiers.into_iter().collect()
    }
}
