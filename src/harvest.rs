//! Pipeline front door
//!
//! Runs the full acquisition for one (name, type) pair: resolve the entity,
//! fetch and rank its claims, then extract the top-N attributes into a tree
//! rooted at the entity. Every step is a sequential call against the same
//! query service; nothing is cached or retried.

use crate::classify::TypeClassifier;
use crate::error::Result;
use crate::extract::extract_top_n;
use crate::rank::rank_attributes;
use crate::resolve::resolve;
use crate::sparql::QueryService;
use crate::tree::Node;
use std::sync::Arc;

const DEFAULT_TOP_N: usize = 8;

/// Options for one harvest run
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// How many top-ranked attributes to fetch in full.
    pub top_n: usize,
    /// Suppress the transitive-subclass fallback during resolution.
    pub exact_only: bool,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            exact_only: false,
        }
    }
}

impl HarvestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn exact_only(mut self) -> Self {
        self.exact_only = true;
        self
    }
}

/// Resolve an entity and materialize its best-evidenced attributes.
///
/// Returns the root node, named after the searched-for `name` and carrying
/// the resolved entity code, with one child per extracted attribute value.
///
/// # Errors
///
/// [`Error::NotFound`](crate::Error::NotFound) when resolution exhausts its
/// fallback — no node is constructed in that case. Service failures
/// propagate; children attached before the failure stay attached.
pub async fn harvest(
    service: &dyn QueryService,
    classifier: &dyn TypeClassifier,
    name: &str,
    type_label: &str,
    options: &HarvestOptions,
) -> Result<Arc<Node>> {
    let entity = resolve(service, name, type_label, classifier, options.exact_only).await?;
    tracing::debug!(name, entity = %entity, "resolved entity");

    let root = Node::root(name, entity.as_str());
    let claims = service.get_claims(&entity).await?;
    let ranked = rank_attributes(&claims);
    extract_top_n(service, &root, &ranked, options.top_n).await?;
    Ok(root)
}
