//! Targeted data acquisition from the Wikidata knowledge graph.
//!
//! Resolves a human-readable entity name plus a coarse type hint into a
//! unique entity id, ranks the entity's properties by how well-referenced
//! they are, and materializes the top few as a small labeled tree.
//!
//! The interesting part is the two-stage pipeline in [`resolve`] and
//! [`rank`]: resolution trades exactness for recall by falling back from a
//! direct class match to a transitive-subclass match, and ranking uses
//! reference counts as a cheap proxy for which attributes are worth
//! fetching in full. Everything else is query templating over a single
//! [`sparql::QueryService`] collaborator.
//!
//! ```no_run
//! use wikiharvest::{classify::CommonTypes, harvest, sparql::WikidataClient, HarvestOptions};
//!
//! # async fn run() -> wikiharvest::Result<()> {
//! let client = WikidataClient::from_env()?;
//! let node = harvest(&client, &CommonTypes, "Seattle", "city", &HarvestOptions::new()).await?;
//! println!("{}", node.details());
//! # Ok(())
//! # }
//! ```

pub mod claims;
pub mod classify;
pub mod error;
pub mod extract;
pub mod harvest;
pub mod ids;
pub mod rank;
pub mod resolve;
pub mod sparql;
pub mod tree;

pub use error::{Error, Result};
pub use harvest::{harvest, HarvestOptions};
pub use ids::{ClassId, EntityId, PropertyId};
pub use tree::Node;
