//! Attribute ranking
//!
//! Orders an entity's properties by evidentiary strength so extraction can
//! fetch only the top few in full. A property's score is the largest
//! reference count on any single one of its claims — a cheap proxy for how
//! well-evidenced the property is, without fetching any values.

use crate::claims::ClaimSet;
use crate::ids::PropertyId;

/// Rank all properties in `claims`, best-evidenced first.
///
/// Ties keep the order the claims were fetched in (stable sort over the
/// service's property order).
pub fn rank_attributes(claims: &ClaimSet) -> Vec<PropertyId> {
    let mut scored: Vec<(PropertyId, usize)> = claims
        .iter()
        .map(|(property, records)| {
            let score = records.iter().map(|c| c.references()).max().unwrap_or(0);
            (property.clone(), score)
        })
        .collect();

    // Vec::sort_by is stable, so equal scores retain fetch order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.into_iter().map(|(property, _)| property).collect()
}
