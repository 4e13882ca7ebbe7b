//! Identifier newtypes for knowledge-graph keys
//!
//! Entity ids (Q-codes), property ids (P-codes) and class ids are opaque
//! string tokens. They arrive from the query service as URI-shaped values;
//! the identifier is the final path segment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extract the final path segment of a URI-shaped value.
///
/// A value without any `/` is returned unchanged.
fn last_uri_segment(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

/// Unique key for one knowledge-graph entity (e.g. `Q312`).
///
/// Obtained via successful resolution, never composed by callers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    /// Extract an entity id from a URI-shaped value
    /// (`http://www.wikidata.org/entity/Q312` → `Q312`).
    pub fn from_uri(value: &str) -> Self {
        Self(last_uri_segment(value).to_string())
    }

    /// Wrap a known raw code without extraction.
    pub fn from_raw(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key for one predicate/property usable on entities (e.g. `P31`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    /// Extract a property id from a URI-shaped value.
    pub fn from_uri(value: &str) -> Self {
        Self(last_uri_segment(value).to_string())
    }

    pub fn from_raw(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Canonical class identifier used to constrain entity search.
///
/// Also a Q-code on the wire; kept as a separate type so the classifier
/// seam is typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassId(String);

impl ClassId {
    pub fn from_raw(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_from_uri() {
        let id = EntityId::from_uri("http://www.wikidata.org/entity/Q312");
        assert_eq!(id.as_str(), "Q312");
    }

    #[test]
    fn test_from_uri_without_slashes() {
        assert_eq!(EntityId::from_uri("Q5").as_str(), "Q5");
        assert_eq!(PropertyId::from_uri("P31").as_str(), "P31");
    }

    #[test]
    fn test_property_id_from_uri() {
        let id = PropertyId::from_uri("http://www.wikidata.org/prop/direct/P106");
        assert_eq!(id.as_str(), "P106");
    }
}
