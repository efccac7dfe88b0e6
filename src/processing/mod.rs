use serde::{Deserialize, Serialize};

use crate::domain::profile::Profile;

pub mod embedding;
pub mod matcher;
pub mod query;
pub mod recommend;
pub mod service;
pub mod state;
pub mod text;

/// Request accepted by the service socket.
#[derive(Deserialize, Serialize, Debug)]
pub enum ServiceMessage {
    Profile(Profile),
    Query(String),
}

impl ServiceMessage {
    /// Request kind, safe to log without exposing profile details.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceMessage::Profile(_) => "profile",
            ServiceMessage::Query(_) => "query",
        }
    }
}
