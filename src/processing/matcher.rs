//! Similarity ranking of catalog schemes against a query.

use std::sync::Arc;

use crate::SIMILARITY_THRESHOLD;
use crate::domain::scheme::{MatchResult, Scheme};
use crate::errors::{RecommenderError, RecommenderResult};
use crate::processing::embedding::{Embedder, cosine_similarity};
use crate::processing::state::normalize_state;
use crate::processing::text::normalize;
use crate::repository::CatalogReader;

/// Matches queries against the catalog using an injected embedder.
#[derive(Clone)]
pub struct Matcher {
    embedder: Arc<dyn Embedder>,
    catalog: Arc<dyn CatalogReader>,
}

impl Matcher {
    pub fn new(embedder: Arc<dyn Embedder>, catalog: Arc<dyn CatalogReader>) -> Self {
        Self { embedder, catalog }
    }

    /// Returns up to `top_n` schemes scoring above [`SIMILARITY_THRESHOLD`],
    /// best first, together with a human-readable summary.
    ///
    /// The catalog is reloaded on every call. When `state_key` is given only
    /// schemes of that state are considered; if the state has none, the
    /// result is empty rather than widened to other states.
    pub fn find_matches(
        &self,
        query: &str,
        top_n: usize,
        state_key: Option<&str>,
    ) -> RecommenderResult<(Vec<MatchResult>, String)> {
        let schemes = self.catalog.load()?;

        let cleaned = normalize(query);
        let query_embedding = self.embedder.embed(&cleaned)?;

        if let Some(expected) = schemes.first().map(|scheme| scheme.embedding.len())
            && expected != query_embedding.len()
        {
            return Err(RecommenderError::EmbeddingFailure(format!(
                "query embedding has {} dimensions, catalog uses {expected}",
                query_embedding.len()
            )));
        }

        Ok(rank(&query_embedding, &schemes, top_n, state_key))
    }
}

/// Scores `schemes` against an already embedded query.
pub fn rank(
    query_embedding: &[f32],
    schemes: &[Scheme],
    top_n: usize,
    state_key: Option<&str>,
) -> (Vec<MatchResult>, String) {
    let candidates: Vec<&Scheme> = match state_key {
        Some(state_key) => {
            let wanted = normalize_state(state_key);
            let filtered: Vec<&Scheme> = schemes
                .iter()
                .filter(|scheme| normalize_state(&scheme.state) == wanted)
                .collect();
            log::debug!(
                "Filtering for state '{state_key}' (normalized: '{wanted}'): {} schemes",
                filtered.len()
            );
            if filtered.is_empty() {
                return (
                    Vec::new(),
                    format!("No schemes found for state: {}", display_state(state_key)),
                );
            }
            filtered
        }
        None => schemes.iter().collect(),
    };

    let mut results: Vec<MatchResult> = candidates
        .into_iter()
        .filter_map(|scheme| {
            let similarity = cosine_similarity(query_embedding, &scheme.embedding);
            (similarity > SIMILARITY_THRESHOLD).then(|| MatchResult::new(scheme, similarity))
        })
        .collect();

    // Stable sort keeps catalog order between equal scores.
    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    results.truncate(top_n.max(1));

    let message = if results.is_empty() {
        "No recommendations found.".to_string()
    } else {
        format!("Found {} recommendations.", results.len())
    };

    (results, message)
}

/// Title-cases a state key for messages, e.g. `"west-bengal"` -> `"West Bengal"`.
fn display_state(state_key: &str) -> String {
    state_key
        .replace('-', " ")
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
