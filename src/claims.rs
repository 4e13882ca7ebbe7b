//! Claim model for the entity-detail path
//!
//! `get_claims` returns every property asserted on an entity, each with its
//! claim records. Only the per-claim reference count is consumed downstream
//! (ranking uses it as an evidence proxy), so that is all this model keeps.
//!
//! Property order matters: ranking ties fall back to the order the service
//! returned, so deserialization walks the JSON object in document order
//! instead of going through a re-sorting map type.

use crate::ids::PropertyId;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

/// One recorded assertion for an entity, reduced to its evidence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    references: usize,
}

impl Claim {
    pub fn new(references: usize) -> Self {
        Self { references }
    }

    /// Number of corroborating reference records (0 when none).
    pub fn references(&self) -> usize {
        self.references
    }
}

/// All claims on one entity, keyed by property, in service order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    entries: Vec<(PropertyId, Vec<Claim>)>,
}

impl ClaimSet {
    pub fn from_entries(entries: Vec<(PropertyId, Vec<Claim>)>) -> Self {
        Self { entries }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PropertyId, &[Claim])> {
        self.entries.iter().map(|(p, c)| (p, c.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Wire shape of one claim record; everything except the reference list is
/// ignored.
#[derive(Debug, Deserialize)]
struct RawClaim {
    #[serde(default)]
    references: Vec<serde_json::Value>,
}

impl<'de> Deserialize<'de> for ClaimSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ClaimSetVisitor;

        impl<'de> Visitor<'de> for ClaimSetVisitor {
            type Value = ClaimSet;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of property id to claim records")
            }

            fn visit_map<A>(self, mut map: A) -> Result<ClaimSet, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((property, raw)) = map.next_entry::<String, Vec<RawClaim>>()? {
                    let claims = raw
                        .into_iter()
                        .map(|c| Claim::new(c.references.len()))
                        .collect();
                    entries.push((PropertyId::from_raw(property), claims));
                }
                Ok(ClaimSet { entries })
            }
        }

        deserializer.deserialize_map(ClaimSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_keeps_document_order_and_counts() {
        let json = r#"{
            "P31": [{"mainsnak": {}, "references": [{}, {}]}],
            "P106": [{"references": [{}]}, {"references": [{}, {}, {}]}],
            "P19": [{"mainsnak": {}}]
        }"#;
        let set: ClaimSet = serde_json::from_str(json).unwrap();

        let keys: Vec<&str> = set.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(keys, ["P31", "P106", "P19"]);

        let counts: Vec<Vec<usize>> = set
            .iter()
            .map(|(_, claims)| claims.iter().map(Claim::references).collect())
            .collect();
        assert_eq!(counts, [vec![2], vec![1, 3], vec![0]]);
    }

    #[test]
    fn test_empty_claim_set() {
        let set: ClaimSet = serde_json::from_str("{}").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
