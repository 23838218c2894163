use serde::{Deserialize, Serialize};

pub mod album;
pub mod client;
pub mod movie;

/// Minimal success payload of any remote write: just the affected id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutationReceipt {
    pub id: String,
}

/// A related record referenced by id, with its display name when the query
/// selects it (genre and artist option lists, embedded relations).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRef {
    pub id: String,
    pub name: String,
}
