//! Entity resolution
//!
//! Resolves a (name, type) pair to a unique entity id in two stages: an
//! exact class match first, then — only when that comes back empty — a
//! broadened match over the class's transitive subclasses. Trading
//! exactness for recall this way is deliberate; the broadened query is
//! never issued when the exact one already hit.

use crate::classify::TypeClassifier;
use crate::error::{Error, Result};
use crate::ids::{ClassId, EntityId};
use crate::sparql::QueryService;

/// Direct class membership.
const DIRECT_CLASS_PATH: &str = "wdt:P31";
/// Class membership through any chain of subclass links, unbounded depth.
const TRANSITIVE_CLASS_PATH: &str = "wdt:P31/wdt:P279*";

fn entity_search_query(name: &str, class: &ClassId, class_path: &str) -> String {
    format!(
        r#"SELECT ?item ?itemLabel
WHERE
{{
    ?item {class_path} wd:{class}.
    ?item rdfs:label "{name}"@en.
    SERVICE wikibase:label {{ bd:serviceParam wikibase:language "[AUTO_LANGUAGE],en". }}
}}"#,
        class_path = class_path,
        class = class.as_str(),
        name = escape_literal(name),
    )
}

/// Escape a string for use inside a double-quoted SPARQL literal.
fn escape_literal(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Resolve `name` + `type_label` to an entity id.
///
/// The classifier is injected so alternate classification strategies can be
/// substituted. With `exact_only` set, the subclass fallback is suppressed.
///
/// When several entities share the same label and class, whichever binding
/// the service lists first wins — the service's ordering is unspecified, so
/// resolution is not guaranteed deterministic and there is no tie-break.
/// Callers needing determinism must post-filter.
///
/// # Errors
///
/// [`Error::NotFound`] when the type label has no known class or both
/// queries come back empty — an expected outcome, not a failure of the
/// pipeline. Service failures propagate as [`Error::Service`].
pub async fn resolve(
    service: &dyn QueryService,
    name: &str,
    type_label: &str,
    classifier: &dyn TypeClassifier,
    exact_only: bool,
) -> Result<EntityId> {
    let Some(class) = classifier.classify(type_label) else {
        tracing::debug!(type_label, "no class known for type label");
        return Err(Error::not_found(name, type_label));
    };

    let mut results = service
        .query(&entity_search_query(name, &class, DIRECT_CLASS_PATH))
        .await?;

    if results.is_empty() && !exact_only {
        tracing::debug!(name, class = %class, "exact class match empty, broadening to subclasses");
        results = service
            .query(&entity_search_query(name, &class, TRANSITIVE_CLASS_PATH))
            .await?;
    }

    let Some(first) = results.first() else {
        return Err(Error::not_found(name, type_label));
    };

    let item = first
        .get("item")
        .ok_or_else(|| Error::service(anyhow::anyhow!("search binding is missing ?item")))?;
    Ok(EntityId::from_uri(item))
}
