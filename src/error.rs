//! Error taxonomy for the acquisition pipeline
//!
//! Three failure modes, each with a different caller contract:
//!
//! - `NotFound` — resolution exhausted its fallback; expected, non-fatal,
//!   worklist callers skip the item and continue.
//! - `LabelUnavailable` — a property has no English label; the extraction
//!   loop catches this, logs and skips the property.
//! - `Service` — anything the query collaborator threw (transport, status,
//!   malformed payload). Never caught inside the library, no retries.

use crate::ids::PropertyId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no entity found for \"{name}\" of type \"{type_label}\"")]
    NotFound { name: String, type_label: String },

    #[error("no English label available for property {0}")]
    LabelUnavailable(PropertyId),

    #[error("query service error")]
    Service(#[source] anyhow::Error),
}

impl Error {
    pub fn not_found(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self::NotFound {
            name: name.into(),
            type_label: type_label.into(),
        }
    }

    /// Wrap any collaborator failure as a service error.
    pub fn service(err: impl Into<anyhow::Error>) -> Self {
        Self::Service(err.into())
    }

    /// True for the expected skip-and-continue outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
