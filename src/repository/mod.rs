use crate::domain::scheme::Scheme;
use crate::errors::RecommenderResult;

pub mod catalog;

pub use catalog::{InMemoryCatalog, JsonCatalog};

/// Source of the scheme catalog.
///
/// Every call returns a fresh, independent copy of the catalog, so matching
/// never shares mutable state across requests.
pub trait CatalogReader: Send + Sync {
    fn load(&self) -> RecommenderResult<Vec<Scheme>>;
}
