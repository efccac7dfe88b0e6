mod common;

use scheme_recommender::processing::service::process_service_message;

use common::{SCHEMES, TestCatalog, recommender};

#[tokio::test]
async fn query_request_gets_recommendations() {
    let catalog = TestCatalog::new(SCHEMES);
    let recommender = recommender(&catalog);

    let reply = process_service_message(
        br#"{"Query": "free education scholarships for girls students in tamil nadu"}"#,
        &recommender,
    )
    .await;

    assert_eq!(reply["recommendations"][0]["scheme_name"], "Pudhumai Penn");
    assert_eq!(reply["recommendations"][0]["state"], "tamil-nadu");
    assert_eq!(reply["message"], "Found 1 recommendations.");
    assert!(reply.get("name").is_none());
}

#[tokio::test]
async fn profile_request_echoes_name() {
    let catalog = TestCatalog::new(SCHEMES);
    let recommender = recommender(&catalog);

    let reply = process_service_message(
        br#"{"Profile": {"name": "Meena", "occupation": "student", "age_group": "student", "gender": "female", "state": "Other", "customState": "Tamil Nadu"}}"#,
        &recommender,
    )
    .await;

    assert_eq!(reply["name"], "Meena");
    assert_eq!(
        reply["query"],
        "free education scholarships for students for young, women or girls in Tamil Nadu"
    );
    assert_eq!(reply["recommendations"][0]["scheme_name"], "Pudhumai Penn");
}

#[tokio::test]
async fn malformed_request_gets_error_reply() {
    let catalog = TestCatalog::new(SCHEMES);
    let recommender = recommender(&catalog);

    let reply = process_service_message(b"not json", &recommender).await;

    assert!(
        reply["error"]
            .as_str()
            .is_some_and(|error| error.starts_with("Invalid request"))
    );
}

#[tokio::test]
async fn invalid_profile_gets_error_reply() {
    let catalog = TestCatalog::new(SCHEMES);
    let recommender = recommender(&catalog);

    let reply = process_service_message(br#"{"Profile": {"occupation": "farmer"}}"#, &recommender)
        .await;

    assert_eq!(reply["error"], "Invalid profile: name is required");
}
