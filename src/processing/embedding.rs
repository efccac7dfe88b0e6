use std::path::PathBuf;
use std::sync::Mutex;

use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::errors::{RecommenderError, RecommenderResult};

/// Text embedding capability used to place queries in the catalog's vector
/// space.
///
/// Implementations must be deterministic for identical input and produce
/// vectors of the dimensionality the catalog was built with.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> RecommenderResult<Vec<f32>>;
}

/// Maps a configured model name to a fastembed model.
pub fn model_from_name(name: &str) -> RecommenderResult<EmbeddingModel> {
    match name.trim().to_lowercase().as_str() {
        "all-minilm-l6-v2" => Ok(EmbeddingModel::AllMiniLML6V2),
        "bge-small-en-v1.5" => Ok(EmbeddingModel::BGESmallENV15),
        "bge-base-en-v1.5" => Ok(EmbeddingModel::BGEBaseENV15),
        "multilingual-e5-large" => Ok(EmbeddingModel::MultilingualE5Large),
        other => Err(RecommenderError::Config(format!("unsupported embedding model: {other}"))),
    }
}

/// [`Embedder`] backed by a local fastembed model.
///
/// The model is loaded once; inference needs exclusive access, so calls are
/// serialized through a mutex.
pub struct FastEmbedder {
    model: Mutex<TextEmbedding>,
}

impl FastEmbedder {
    pub fn new(model_name: &str, cache_dir: Option<&str>) -> RecommenderResult<Self> {
        let mut options = InitOptions::new(model_from_name(model_name)?)
            .with_show_download_progress(false);
        if let Some(dir) = cache_dir {
            options = options.with_cache_dir(PathBuf::from(dir));
        }

        let model = TextEmbedding::try_new(options).map_err(|error| {
            RecommenderError::EmbeddingFailure(format!(
                "Failed to initialize embedder {model_name}: {error:?}"
            ))
        })?;

        log::info!("Loaded embedding model {model_name}");

        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl Embedder for FastEmbedder {
    fn embed(&self, text: &str) -> RecommenderResult<Vec<f32>> {
        let mut model = self.model.lock().map_err(|_| {
            RecommenderError::EmbeddingFailure("embedder lock poisoned".to_string())
        })?;

        model
            .embed(vec![text], None)
            .map_err(|error| {
                RecommenderError::EmbeddingFailure(format!(
                    "Failed to generate embedding: {error:?}"
                ))
            })?
            .into_iter()
            .next()
            .ok_or_else(|| {
                RecommenderError::EmbeddingFailure("model returned no embedding".to_string())
            })
    }
}

/// Cosine similarity of two vectors.
///
/// Returns 0 when either vector has zero norm or the lengths differ.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot = a.iter().zip(b).map(|(x, y)| x * y).sum::<f32>();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
