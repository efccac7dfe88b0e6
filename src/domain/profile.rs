use serde::{Deserialize, Serialize};

use crate::OTHER_STATE;
use crate::errors::{RecommenderError, RecommenderResult};

/// Citizen profile submitted by a caller.
///
/// Every field is free-form and optional on the wire; missing fields
/// deserialize to empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub age_group: String,
    pub gender: String,
    pub occupation: String,
    pub income_level: String,
    pub state: String,
    #[serde(rename = "customState")]
    pub custom_state: String,
}

impl Profile {
    /// Checks the fields the profile form requires.
    ///
    /// A name must be present, and choosing the `"Other"` state requires a
    /// custom state name.
    pub fn validate(&self) -> RecommenderResult<()> {
        if self.name.trim().is_empty() {
            return Err(RecommenderError::InvalidProfile("name is required".to_string()));
        }
        if self.state == OTHER_STATE && self.custom_state.trim().is_empty() {
            return Err(RecommenderError::InvalidProfile(
                "customState is required when state is Other".to_string(),
            ));
        }
        Ok(())
    }

    /// State the user actually lives in, or `None` when neither field is set.
    pub fn effective_state(&self) -> Option<&str> {
        let state = if self.state == OTHER_STATE {
            self.custom_state.trim()
        } else {
            self.state.trim()
        };
        (!state.is_empty()).then_some(state)
    }
}
