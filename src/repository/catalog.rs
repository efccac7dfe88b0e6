use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::domain::scheme::Scheme;
use crate::errors::{RecommenderError, RecommenderResult};
use crate::repository::CatalogReader;

/// One row of the embedding store as written by the offline indexing job.
#[derive(Deserialize)]
struct CatalogRow {
    state: String,
    scheme_name: String,
    description: String,
    #[serde(alias = "embedding")]
    embeddings: Vec<f32>,
}

/// Catalog stored as a JSON array of rows in a single file.
///
/// The file is re-read on every [`CatalogReader::load`], so edits to the
/// catalog are picked up without restarting the process.
pub struct JsonCatalog {
    path: PathBuf,
}

impl JsonCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl CatalogReader for JsonCatalog {
    fn load(&self) -> RecommenderResult<Vec<Scheme>> {
        let raw = std::fs::read_to_string(&self.path).map_err(|error| {
            RecommenderError::CatalogUnavailable(format!(
                "Failed to read {}: {error}",
                self.path.display()
            ))
        })?;

        parse_catalog(&raw).map_err(|error| match error {
            RecommenderError::CatalogUnavailable(reason) => RecommenderError::CatalogUnavailable(
                format!("{}: {reason}", self.path.display()),
            ),
            other => other,
        })
    }
}

/// Parses a catalog document, skipping malformed rows.
///
/// Rows are rejected when a field is missing or mistyped, when the
/// embedding is empty, or when its dimensionality differs from the first
/// accepted row. An empty array is an empty catalog; a document whose rows
/// are all unusable is an error.
pub fn parse_catalog(raw: &str) -> RecommenderResult<Vec<Scheme>> {
    let rows: Vec<Value> = serde_json::from_str(raw).map_err(|error| {
        RecommenderError::CatalogUnavailable(format!("invalid catalog document: {error}"))
    })?;

    let total = rows.len();
    let mut dimension = None;
    let mut schemes = Vec::with_capacity(total);

    for (index, row) in rows.into_iter().enumerate() {
        let row = match serde_json::from_value::<CatalogRow>(row) {
            Ok(row) => row,
            Err(error) => {
                log::warn!("Skipping malformed catalog row {index}: {error}");
                continue;
            }
        };

        if row.embeddings.is_empty() {
            log::warn!("Skipping catalog row {index} ({}): empty embedding", row.scheme_name);
            continue;
        }

        let expected = *dimension.get_or_insert(row.embeddings.len());
        if row.embeddings.len() != expected {
            log::warn!(
                "Skipping catalog row {index} ({}): embedding has {} dimensions, expected {expected}",
                row.scheme_name,
                row.embeddings.len()
            );
            continue;
        }

        schemes.push(Scheme {
            state: row.state,
            scheme_name: row.scheme_name,
            description: row.description,
            embedding: row.embeddings,
        });
    }

    if schemes.is_empty() && total > 0 {
        return Err(RecommenderError::CatalogUnavailable(format!("no usable rows among {total}")));
    }

    if schemes.len() < total {
        log::warn!(
            "Catalog loaded with {} of {total} rows; {} skipped",
            schemes.len(),
            total - schemes.len()
        );
    } else {
        log::debug!("Catalog loaded with {total} rows");
    }

    Ok(schemes)
}

/// Fixed catalog held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    schemes: Vec<Scheme>,
}

impl InMemoryCatalog {
    pub fn new(schemes: Vec<Scheme>) -> Self {
        Self { schemes }
    }
}

impl CatalogReader for InMemoryCatalog {
    fn load(&self) -> RecommenderResult<Vec<Scheme>> {
        Ok(self.schemes.clone())
    }
}
