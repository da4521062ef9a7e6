mod common;

use common::fake_kb::FakeKnowledgeBase;
use common::harness::{TestServerConfig, spawn_test_server};
use common::http_client::{TestClient, TestClientError};

const HEADLINE: &str =
    "Breaking: Government secretly approves flying cars for all citizens before it gets deleted!";

const COURT_ARTICLE: &str =
    "The Supreme Court of India announced a new ruling on environmental regulations in 2020.";

async fn court_kb() -> FakeKnowledgeBase {
    FakeKnowledgeBase::builder()
        .page(
            "Supreme Court",
            "The Supreme Court is the highest court within the hierarchy of courts in many legal jurisdictions.",
        )
        .page(
            "India",
            "India, officially the Republic of India, is a country in South Asia. It is the most populous country in the world.",
        )
        .spawn()
        .await
}

#[tokio::test]
async fn test_health_and_ready() {
    let server = spawn_test_server(TestServerConfig::default()).await.unwrap();
    let client = TestClient::new(server.url());

    assert_eq!(client.health().await.unwrap().status, "ok");

    let ready = client.ready().await.unwrap();
    assert!(ready.is_ok());
    assert_eq!(ready.components.classifier_mode, "real");
    assert!(ready.components.model_fingerprint.is_none());
}

#[tokio::test]
async fn test_court_article_verified_over_http() {
    let kb = court_kb().await;
    let server = spawn_test_server(
        TestServerConfig::default()
            .with_kb(kb.base_url())
            .with_probabilities(0.52, 0.48),
    )
    .await
    .unwrap();
    let client = TestClient::new(server.url());

    let reply = client.analyze(COURT_ARTICLE).await.unwrap();

    assert_eq!(reply.verdict_header, "LIKELY REAL");
    assert_eq!(reply.report["heuristic"]["verdict"], "UNCERTAIN");
    assert_eq!(reply.report["ml"]["verdict"], "UNCERTAIN");
    assert_eq!(reply.report["decision"]["rule"], "verified_entities");
    assert_eq!(
        reply.report["entities"]["ORGANIZATION"],
        serde_json::json!(["Supreme Court"])
    );

    let titles = kb.requested_titles();
    assert!(titles.contains(&"Supreme Court".to_string()));
    assert!(titles.contains(&"India".to_string()));
    assert!(titles.contains(&"2020".to_string()));
    assert_eq!(titles.len(), 3);
}

#[tokio::test]
async fn test_headline_is_strong_fake_without_lookups() {
    let kb = FakeKnowledgeBase::builder().spawn().await;
    let server = spawn_test_server(
        TestServerConfig::default()
            .with_kb(kb.base_url())
            .with_probabilities(0.88, 0.12),
    )
    .await
    .unwrap();
    let client = TestClient::new(server.url());

    let reply = client.analyze(HEADLINE).await.unwrap();

    assert_eq!(reply.verdict_header, "LIKELY FAKE");
    assert_eq!(reply.report["decision"]["qualifier"], "strong fake signals");
    assert!(kb.requested_titles().is_empty());
    assert!(
        reply.report["reasons"]
            .as_array()
            .unwrap()
            .iter()
            .any(|r| r == "ML model shows high fake confidence (0.88)")
    );
}

#[tokio::test]
async fn test_knowledge_base_down_degrades_to_unverified() {
    let server = spawn_test_server(TestServerConfig::default().with_probabilities(0.52, 0.48))
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let reply = client.analyze(COURT_ARTICLE).await.unwrap();

    assert_eq!(reply.verdict_header, "UNCERTAIN");
    let verifications = reply.report["decision"]["verifications"].as_array().unwrap();
    assert!(!verifications.is_empty());
    assert!(verifications.iter().all(|v| v["exists"] == false));
}

#[tokio::test]
async fn test_short_input_rejected_over_http() {
    let server = spawn_test_server(TestServerConfig::default()).await.unwrap();
    let client = TestClient::new(server.url());

    let err = client.analyze("Supreme Court ruled today").await.err().unwrap();
    match err {
        TestClientError::BadRequest(body) => assert!(body.contains("too short")),
        other => panic!("expected 422, got {other}"),
    }
}

#[tokio::test]
async fn test_form_round_trip() {
    let kb = court_kb().await;
    let server = spawn_test_server(TestServerConfig::default().with_kb(kb.base_url()))
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let page = client.analyze_form(COURT_ARTICLE).await.unwrap();
    assert!(page.contains("LIKELY REAL (verified factual entities)"));
    assert!(page.contains("Supreme Court: VERIFIED"));
    assert!(page.contains("2020: NOT VERIFIED"));

    let page = client.analyze_form("just a few words").await.unwrap();
    assert!(page.contains("Please enter a longer news article."));
}

#[tokio::test]
async fn test_claim_over_http() {
    let kb = FakeKnowledgeBase::builder()
        .page(
            "Prime Minister of India",
            "The prime minister of India is the head of government. Narendra Modi has served since 2014.",
        )
        .spawn()
        .await;
    let server = spawn_test_server(TestServerConfig::default().with_kb(kb.base_url()))
        .await
        .unwrap();
    let client = TestClient::new(server.url());

    let outcome = client.claim("Modi was the PM of India in 2014").await.unwrap();
    assert_eq!(outcome["verdict"], "TRUE");
    assert_eq!(outcome["reason"], "Modi was Prime Minister of India in 2014");

    let outcome = client.claim("Modi is the president of Atlantis").await.unwrap();
    assert_eq!(outcome["verdict"], "UNKNOWN");

    assert_eq!(
        kb.requested_titles(),
        vec!["Prime Minister of India", "President of Atlantis"]
    );

    server.shutdown().await;
}
