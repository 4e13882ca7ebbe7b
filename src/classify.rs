//! Type classification strategy
//!
//! Maps a coarse type label ("human", "city", ...) to the graph's canonical
//! class identifier. The strategy is a trait so resolution can take an
//! alternate classifier (rule-based, learned, ...) without changing the
//! search algorithm.

use crate::ids::ClassId;

/// Pluggable type-label → class-id strategy.
pub trait TypeClassifier: Send + Sync {
    /// Classify a coarse label. `None` means "no known class" — callers
    /// must treat it as unresolvable, not as an error.
    fn classify(&self, label: &str) -> Option<ClassId>;
}

/// Canonical classes for the most common coarse types.
const COMMON_TYPES: &[(&str, &str)] = &[
    ("human", "Q5"),
    ("organization", "Q43229"),
    ("location", "Q7481476"),
    ("business", "Q4830453"),
    ("city", "Q515"),
];

/// Fixed-table classifier over the common coarse types.
///
/// Lookup is case-insensitive; keys are canonically lower-case.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonTypes;

impl TypeClassifier for CommonTypes {
    fn classify(&self, label: &str) -> Option<ClassId> {
        let probe = label.trim().to_ascii_lowercase();
        COMMON_TYPES
            .iter()
            .find(|(key, _)| *key == probe)
            .map(|(_, class)| ClassId::from_raw(*class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types_lookup() {
        let c = CommonTypes;
        assert_eq!(c.classify("human").unwrap().as_str(), "Q5");
        assert_eq!(c.classify("city").unwrap().as_str(), "Q515");
        assert_eq!(c.classify("business").unwrap().as_str(), "Q4830453");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let c = CommonTypes;
        assert_eq!(c.classify("Human").unwrap().as_str(), "Q5");
        assert_eq!(c.classify(" CITY ").unwrap().as_str(), "Q515");
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert!(CommonTypes.classify("asteroid").is_none());
        assert!(CommonTypes.classify("").is_none());
    }
}
