//! SPARQL JSON results envelope
//!
//! The endpoint returns `{"head": …, "results": {"bindings": [...]}}`;
//! each binding maps a result variable to a value descriptor carrying at
//! least `value`. Only the parts the pipeline reads are modeled.

use serde::Deserialize;
use std::collections::HashMap;

/// One variable's value descriptor inside a binding.
#[derive(Debug, Clone, Deserialize)]
pub struct BoundValue {
    /// Descriptor kind as reported by the service (`uri`, `literal`, ...).
    #[serde(rename = "type", default)]
    pub kind: String,
    pub value: String,
}

impl BoundValue {
    pub fn uri(value: impl Into<String>) -> Self {
        Self {
            kind: "uri".to_string(),
            value: value.into(),
        }
    }

    pub fn literal(value: impl Into<String>) -> Self {
        Self {
            kind: "literal".to_string(),
            value: value.into(),
        }
    }
}

/// One result row: variable name → value descriptor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Binding(HashMap<String, BoundValue>);

impl Binding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used when scripting responses in tests.
    pub fn with(mut self, var: impl Into<String>, value: BoundValue) -> Self {
        self.0.insert(var.into(), value);
        self
    }

    /// The raw `value` field of a variable, if bound in this row.
    pub fn get(&self, var: &str) -> Option<&str> {
        self.0.get(var).map(|v| v.value.as_str())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct Bindings {
    bindings: Vec<Binding>,
}

/// A full result set from one query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultSet {
    results: Bindings,
}

impl ResultSet {
    pub fn from_bindings(bindings: Vec<Binding>) -> Self {
        Self {
            results: Bindings { bindings },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.bindings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.bindings.len()
    }

    /// First row in service order. The service's ordering is unspecified;
    /// callers relying on this accept that non-determinism.
    pub fn first(&self) -> Option<&Binding> {
        self.results.bindings.first()
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.results.bindings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_results_envelope() {
        let json = r#"{
            "head": {"vars": ["item", "itemLabel"]},
            "results": {"bindings": [
                {
                    "item": {"type": "uri", "value": "http://www.wikidata.org/entity/Q312"},
                    "itemLabel": {"type": "literal", "value": "Apple"}
                }
            ]}
        }"#;
        let set: ResultSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.len(), 1);

        let first = set.first().unwrap();
        assert_eq!(
            first.get("item"),
            Some("http://www.wikidata.org/entity/Q312")
        );
        assert_eq!(first.get("itemLabel"), Some("Apple"));
        assert_eq!(first.get("missing"), None);
    }

    #[test]
    fn test_empty_result_set() {
        let json = r#"{"head": {"vars": []}, "results": {"bindings": []}}"#;
        let set: ResultSet = serde_json::from_str(json).unwrap();
        assert!(set.is_empty());
        assert!(set.first().is_none());
    }
}
