//! Fetcher tests against a mock HTTP server

#![allow(clippy::unwrap_used)]

use dogstats_etl::aggregate::Aggregator;
use dogstats_etl::fetch::BreedApiClient;
use dogstats_etl::loader::Loader;
use dogstats_etl::{schema, store};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn breeds_payload() -> serde_json::Value {
    json!([
        {"name": "Affenpinscher", "life_span": "10 - 12 years", "breed_group": "Toy"},
        {"name": "Basenji", "life_span": "10 - 12 years"},
        {"name": "Mystery Hound", "life_span": "unknown", "breed_group": "Hound"}
    ])
}

#[tokio::test]
async fn test_fetch_breeds_parses_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(breeds_payload()))
        .mount(&mock_server)
        .await;

    let client = BreedApiClient::new(mock_server.uri(), 5).unwrap();
    let records = client.fetch_breeds().await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "Affenpinscher");
    assert_eq!(records[0].group(), "Toy");
    // breed_group missing from the payload defaults to Unknown
    assert_eq!(records[1].group(), "Unknown");
    assert_eq!(records[2].life_span(), "unknown");
}

#[tokio::test]
async fn test_fetch_breeds_surfaces_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = BreedApiClient::new(mock_server.uri(), 5).unwrap();
    assert!(client.fetch_breeds().await.is_err());
}

#[tokio::test]
async fn test_fetch_breeds_surfaces_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = BreedApiClient::new(mock_server.uri(), 5).unwrap();
    assert!(client.fetch_breeds().await.is_err());
}

#[tokio::test]
async fn test_fetch_then_load_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/breeds"))
        .respond_with(ResponseTemplate::new(200).set_body_json(breeds_payload()))
        .mount(&mock_server)
        .await;

    let client = BreedApiClient::new(mock_server.uri(), 5).unwrap();
    let records = client.fetch_breeds().await.unwrap();

    let pool = store::connect("sqlite::memory:").await.unwrap();
    schema::create_tables(&pool).await.unwrap();

    let stats = Loader::new(pool.clone())
        .load_breed_records(&records)
        .await
        .unwrap();
    assert_eq!(stats.breeds_inserted, 3);
    assert_eq!(stats.lifespans_inserted, 2);
    assert_eq!(stats.lifespans_skipped, 1);

    let averages = Aggregator::new(pool)
        .average_lifespan_by_breed()
        .await
        .unwrap();
    assert_eq!(averages.len(), 2);
    // Both parseable breeds read "10 - 12 years"
    assert!(averages.iter().all(|row| row.avg_lifespan == 11.0));
}
