//! Helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use scheme_recommender::errors::{RecommenderError, RecommenderResult};
use scheme_recommender::processing::embedding::Embedder;
use scheme_recommender::processing::matcher::Matcher;
use scheme_recommender::processing::recommend::Recommender;
use scheme_recommender::processing::text::normalize;
use scheme_recommender::repository::JsonCatalog;
use serde_json::json;
use tempfile::NamedTempFile;

pub const DIMENSIONS: usize = 256;

/// Deterministic bag-of-words embedder: every token adds one to a hashed
/// bucket.
pub struct FakeEmbedder;

fn fnv1a(token: &str) -> u64 {
    token.bytes().fold(0xcbf29ce484222325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x100000001b3)
    })
}

pub fn fake_embedding(text: &str) -> Vec<f32> {
    let mut vector = vec![0.0_f32; DIMENSIONS];
    for token in text.split_whitespace() {
        vector[(fnv1a(token) % DIMENSIONS as u64) as usize] += 1.0;
    }
    vector
}

impl Embedder for FakeEmbedder {
    fn embed(&self, text: &str) -> RecommenderResult<Vec<f32>> {
        Ok(fake_embedding(text))
    }
}

pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> RecommenderResult<Vec<f32>> {
        Err(RecommenderError::EmbeddingFailure("model unavailable".to_string()))
    }
}

pub struct SlowEmbedder(pub Duration);

impl Embedder for SlowEmbedder {
    fn embed(&self, text: &str) -> RecommenderResult<Vec<f32>> {
        std::thread::sleep(self.0);
        Ok(fake_embedding(text))
    }
}

/// `(state, scheme_name, description)` rows used by most tests.
pub const SCHEMES: &[(&str, &str, &str)] = &[
    ("tamil-nadu", "Pudhumai Penn", "free education scholarships for girls students in tamil nadu"),
    ("bihar", "Kisan Credit", "agriculture loans subsidies crop insurance for farmers in bihar"),
    ("bihar", "Student Credit Card", "education loans for students in bihar"),
    ("kerala", "Skill Kerala", "skill development employment schemes for workers"),
];

/// Catalog file on disk, removed when dropped.
pub struct TestCatalog {
    file: NamedTempFile,
}

impl TestCatalog {
    pub fn new(schemes: &[(&str, &str, &str)]) -> Self {
        let file = NamedTempFile::new().expect("Failed to create catalog file.");
        let catalog = TestCatalog { file };
        catalog.write(schemes);
        catalog
    }

    /// Replaces the catalog contents in place.
    pub fn write(&self, schemes: &[(&str, &str, &str)]) {
        let rows: Vec<_> = schemes
            .iter()
            .map(|(state, name, description)| {
                json!({
                    "state": state,
                    "scheme_name": name,
                    "description": description,
                    "embeddings": fake_embedding(&normalize(description)),
                })
            })
            .collect();

        let mut handle = self.file.reopen().expect("Failed to reopen catalog file.");
        handle.set_len(0).expect("Failed to truncate catalog file.");
        handle
            .write_all(serde_json::to_string(&rows).expect("rows serialize").as_bytes())
            .expect("Failed to write catalog file.");
    }

    pub fn reader(&self) -> JsonCatalog {
        JsonCatalog::new(self.file.path())
    }
}

pub fn recommender_with(
    embedder: impl Embedder + 'static,
    catalog: JsonCatalog,
    timeout: Duration,
    reject_unresolved_state: bool,
) -> Recommender {
    let matcher = Matcher::new(Arc::new(embedder), Arc::new(catalog));
    Recommender::with_settings(matcher, 5, timeout, reject_unresolved_state)
}

pub fn recommender(catalog: &TestCatalog) -> Recommender {
    recommender_with(FakeEmbedder, catalog.reader(), Duration::from_secs(5), false)
}
