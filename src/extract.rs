//! Attribute extraction
//!
//! Fetches the top-ranked properties in full (English label + every value
//! the entity holds) and attaches each value as a child of the entity's
//! tree node. Mutation is in-place and not transactional: a failure partway
//! leaves the children attached so far.

use crate::error::{Error, Result};
use crate::ids::PropertyId;
use crate::sparql::QueryService;
use crate::tree::Node;
use std::sync::Arc;
use tracing::warn;

fn property_values_query(entity_code: &str, property: &PropertyId) -> String {
    format!(
        r#"SELECT ?value
WHERE {{
    wd:{entity} wdt:{property} ?value.
}}"#,
        entity = entity_code,
        property = property.as_str(),
    )
}

fn property_label_query(property: &PropertyId) -> String {
    format!(
        r#"SELECT ?propertyLabel
WHERE {{
    wd:{property} rdfs:label ?propertyLabel.
    FILTER(LANG(?propertyLabel) = "en").
}}"#,
        property = property.as_str(),
    )
}

/// Look up the English label of a property.
///
/// # Errors
///
/// [`Error::LabelUnavailable`] when the property has no English label.
async fn property_label(service: &dyn QueryService, property: &PropertyId) -> Result<String> {
    let results = service.query(&property_label_query(property)).await?;
    results
        .first()
        .and_then(|binding| binding.get("propertyLabel"))
        .map(str::to_string)
        .ok_or_else(|| Error::LabelUnavailable(property.clone()))
}

/// Fetch the first `min(n, ranked.len())` properties in rank order and
/// attach their values as children of `root`.
///
/// Each value becomes one child (label as name, property id as code), so a
/// multi-valued property yields several siblings sharing name and code but
/// holding distinct values. A property without an English label is logged
/// and skipped; it still consumes its slot. Service failures propagate.
pub async fn extract_top_n(
    service: &dyn QueryService,
    root: &Arc<Node>,
    ranked: &[PropertyId],
    n: usize,
) -> Result<()> {
    let k = n.min(ranked.len());
    for property in &ranked[..k] {
        let label = match property_label(service, property).await {
            Ok(label) => label,
            Err(Error::LabelUnavailable(property)) => {
                warn!(%property, "property has no English label, skipping");
                continue;
            }
            Err(err) => return Err(err),
        };

        let results = service
            .query(&property_values_query(root.code(), property))
            .await?;
        for binding in results.bindings() {
            if let Some(value) = binding.get("value") {
                root.add_child(Node::child(root, &label, property.as_str(), value));
            }
        }
    }
    Ok(())
}
