use serde::{Deserialize, Serialize};

/// Catalog entry with its precomputed embedding.
#[derive(Clone, Debug, PartialEq)]
pub struct Scheme {
    pub state: String,
    pub scheme_name: String,
    pub description: String,
    pub embedding: Vec<f32>,
}

/// A scheme scored against a query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub state: String,
    pub scheme_name: String,
    pub description: String,
    pub similarity: f32,
}

impl MatchResult {
    pub fn new(scheme: &Scheme, similarity: f32) -> Self {
        Self {
            state: scheme.state.clone(),
            scheme_name: scheme.scheme_name.clone(),
            description: scheme.description.clone(),
            similarity,
        }
    }
}

/// Reply sent back for a single recommendation request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub query: String,
    pub recommendations: Vec<MatchResult>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
