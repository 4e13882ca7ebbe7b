//! Query-service edge
//!
//! The single external collaborator: a graph-query endpoint taking a SPARQL
//! string, plus the separate entity-detail path returning the full claim
//! structure. The trait seam lets tests (and alternate backends) stand in
//! for the live service.

pub mod client;
pub mod results;

pub use client::{ClientConfig, WikidataClient};
pub use results::{Binding, BoundValue, ResultSet};

use crate::claims::ClaimSet;
use crate::error::Result;
use crate::ids::EntityId;
use async_trait::async_trait;

/// Interface to the graph-query service.
///
/// # Implementation notes
///
/// - No retries: any transport/status/parse failure surfaces as
///   [`Error::Service`](crate::Error::Service).
/// - An empty binding set is a normal response, not an error.
#[async_trait]
pub trait QueryService: Send + Sync {
    /// Execute a SPARQL query and return its binding set.
    async fn query(&self, sparql: &str) -> Result<ResultSet>;

    /// Fetch the full claim structure for an entity (property → claim
    /// records). This is a separate service path from the triple queries.
    async fn get_claims(&self, entity: &EntityId) -> Result<ClaimSet>;
}
