//! Incompatible pairs.
//!
//! Two people in an incompatible pair must never share a slot. Pairs are
//! stored canonicalized (lexicographically sorted) so `(a, b)` and
//! `(b, a)` are the same entry.

use serde::{Deserialize, Serialize};

/// An unordered pair of person ids.
///
/// Serializes as a two-element array `["a", "b"]`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct IncompatiblePair {
    first: String,
    second: String,
}

impl IncompatiblePair {
    /// Creates a canonicalized pair.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b {
            Self {
                first: a,
                second: b,
            }
        } else {
            Self {
                first: b,
                second: a,
            }
        }
    }

    /// Lexicographically smaller id.
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Lexicographically larger id.
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Whether this pair is `{a, b}` in either order.
    pub fn matches(&self, a: &str, b: &str) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }

    /// Whether `id` is one side of the pair.
    pub fn involves(&self, id: &str) -> bool {
        self.first == id || self.second == id
    }
}

impl From<(String, String)> for IncompatiblePair {
    fn from((a, b): (String, String)) -> Self {
        Self::new(a, b)
    }
}

impl From<IncompatiblePair> for (String, String) {
    fn from(pair: IncompatiblePair) -> Self {
        (pair.first, pair.second)
    }
}

/// A deduplicated list of incompatible pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IncompatiblePairs {
    pairs: Vec<IncompatiblePair>,
}

impl IncompatiblePairs {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pair.
    ///
    /// Returns `false` without storing anything for a self-pair or a pair
    /// already present in either order.
    pub fn add(&mut self, a: impl Into<String>, b: impl Into<String>) -> bool {
        let pair = IncompatiblePair::new(a, b);
        if pair.first == pair.second || self.pairs.contains(&pair) {
            return false;
        }
        self.pairs.push(pair);
        true
    }

    /// Builder: adds a pair and returns self.
    pub fn with(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.add(a, b);
        self
    }

    /// Removes the pair `{a, b}`. Returns whether it was present.
    pub fn remove(&mut self, a: &str, b: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|p| !p.matches(a, b));
        self.pairs.len() != before
    }

    /// Symmetric membership test.
    pub fn contains(&self, a: &str, b: &str) -> bool {
        self.pairs.iter().any(|p| p.matches(a, b))
    }

    /// Iterates over stored pairs.
    pub fn iter(&self) -> std::slice::Iter<'_, IncompatiblePair> {
        self.pairs.iter()
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<'a> IntoIterator for &'a IncompatiblePairs {
    type Item = &'a IncompatiblePair;
    type IntoIter = std::slice::Iter<'a, IncompatiblePair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_canonical() {
        let p = IncompatiblePair::new("zoe", "adam");
        assert_eq!(p.first(), "adam");
        assert_eq!(p.second(), "zoe");
        assert_eq!(p, IncompatiblePair::new("adam", "zoe"));
    }

    #[test]
    fn test_matches_either_order() {
        let p = IncompatiblePair::new("a", "b");
        assert!(p.matches("a", "b"));
        assert!(p.matches("b", "a"));
        assert!(!p.matches("a", "c"));
        assert!(p.involves("b"));
    }

    #[test]
    fn test_add_rejects_duplicates_and_self_pairs() {
        let mut pairs = IncompatiblePairs::new();
        assert!(pairs.add("a", "b"));
        assert!(!pairs.add("b", "a"));
        assert!(!pairs.add("c", "c"));
        assert_eq!(pairs.len(), 1);
        assert!(pairs.contains("b", "a"));
    }

    #[test]
    fn test_remove_either_order() {
        let mut pairs = IncompatiblePairs::new().with("a", "b").with("a", "c");
        assert!(pairs.remove("b", "a"));
        assert!(!pairs.remove("b", "a"));
        assert_eq!(pairs.len(), 1);
    }

    #[test]
    fn test_array_document_shape() {
        let pairs: IncompatiblePairs = serde_json::from_str(r#"[["b","a"]]"#).unwrap();
        let p = pairs.iter().next().unwrap();
        assert_eq!(p.first(), "a");
        assert_eq!(serde_json::to_string(&pairs).unwrap(), r#"[["a","b"]]"#);
    }
}
