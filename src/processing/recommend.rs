use std::time::Duration;

use crate::domain::profile::Profile;
use crate::domain::scheme::{MatchResult, Recommendations};
use crate::errors::{RecommenderError, RecommenderResult};
use crate::models::config::AppConfig;
use crate::processing::matcher::Matcher;
use crate::processing::query::compose;
use crate::processing::state::{resolve, resolve_required};

/// Turns profiles and free-text queries into recommendations.
///
/// Catalog loading and inference run on the blocking pool and are bounded
/// by a timeout.
pub struct Recommender {
    matcher: Matcher,
    top_n: usize,
    timeout: Duration,
    reject_unresolved_state: bool,
}

impl Recommender {
    pub fn new(matcher: Matcher, config: &AppConfig) -> Self {
        Self::with_settings(
            matcher,
            config.top_n,
            config.timeout(),
            config.reject_unresolved_state,
        )
    }

    pub fn with_settings(
        matcher: Matcher,
        top_n: usize,
        timeout: Duration,
        reject_unresolved_state: bool,
    ) -> Self {
        Self {
            matcher,
            top_n,
            timeout,
            reject_unresolved_state,
        }
    }

    /// Recommends schemes for a profile.
    ///
    /// The profile's state becomes a state filter when it is recognised. An
    /// unrecognised state either disables the filter or, when configured,
    /// rejects the request with [`RecommenderError::StateNotResolved`].
    pub async fn recommend_profile(&self, profile: Profile) -> RecommenderResult<Recommendations> {
        profile.validate()?;

        let query = compose(&profile);
        let state_key = match profile.effective_state() {
            Some(state) if self.reject_unresolved_state => Some(resolve_required(state)?),
            Some(state) => {
                let key = resolve(state);
                if key.is_none() {
                    log::info!("State '{state}' not recognised; searching all states");
                }
                key
            }
            None => None,
        };

        log::info!("Generated query: '{query}'");
        let (recommendations, message) = self.run_match(query.clone(), state_key).await?;

        Ok(Recommendations {
            query,
            recommendations,
            message,
            name: Some(profile.name),
        })
    }

    /// Recommends schemes for free text, filtering by any state it mentions.
    pub async fn recommend_query(&self, query: &str) -> RecommenderResult<Recommendations> {
        let state_key = resolve(query);
        let (recommendations, message) = self.run_match(query.to_string(), state_key).await?;

        Ok(Recommendations {
            query: query.to_string(),
            recommendations,
            message,
            name: None,
        })
    }

    async fn run_match(
        &self,
        query: String,
        state_key: Option<&'static str>,
    ) -> RecommenderResult<(Vec<MatchResult>, String)> {
        let matcher = self.matcher.clone();
        let top_n = self.top_n;
        let task =
            tokio::task::spawn_blocking(move || matcher.find_matches(&query, top_n, state_key));

        let (results, message) = match tokio::time::timeout(self.timeout, task).await {
            Ok(Ok(outcome)) => outcome?,
            Ok(Err(error)) => {
                return Err(RecommenderError::EmbeddingFailure(format!(
                    "matching task failed: {error}"
                )));
            }
            Err(_) => {
                return Err(RecommenderError::Timeout(format!(
                    "matching did not finish within {:?}",
                    self.timeout
                )));
            }
        };

        match state_key {
            Some(state_key) => log::info!("{message} (filtered to {state_key})"),
            None => log::info!("{message}"),
        }

        Ok((results, message))
    }
}
