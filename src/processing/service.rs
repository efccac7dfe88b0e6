use serde::Serialize;
use serde_json::Value;

use crate::processing::ServiceMessage;
use crate::processing::recommend::Recommender;

#[derive(Serialize)]
struct ErrorReply {
    error: String,
}

fn error_reply(error: String) -> Value {
    serde_json::to_value(ErrorReply { error }).unwrap_or(Value::Null)
}

/// Handles one raw service request and builds the JSON reply.
///
/// Every request gets a reply: failures become `{"error": "..."}`.
pub async fn process_service_message(msg: &[u8], recommender: &Recommender) -> Value {
    let parsed = match serde_json::from_slice::<ServiceMessage>(msg) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::error!("Failed to parse JSON: {e}");
            return error_reply(format!("Invalid request: {e}"));
        }
    };

    log::info!("Received {} request", parsed.kind());
    log::debug!("Request payload: {parsed:?}");

    let outcome = match parsed {
        ServiceMessage::Profile(profile) => recommender.recommend_profile(profile).await,
        ServiceMessage::Query(query) => recommender.recommend_query(&query).await,
    };

    match outcome {
        Ok(reply) => serde_json::to_value(reply)
            .unwrap_or_else(|e| error_reply(format!("Failed to serialize reply: {e}"))),
        Err(e) => {
            log::error!("Request failed: {e}");
            error_reply(e.to_string())
        }
    }
}
