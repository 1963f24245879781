use std::time::Duration;

use roamgenie::core::config::ResolvedConfig;
use roamgenie::dataset::sources::{BUILTIN_PASSPORTS, HttpCsvSource, fallback_dataset};
use roamgenie::dataset::{DatasetOrigin, DatasetSource, RequirementKind, SourceError};
use roamgenie::{DatasetLoader, MatchOutcome, Region, classify, resolve_visa_free};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

const TIDY_CSV: &str = "\
Passport,Destination,Requirement
United States of America,Canada,visa free
United States of America,Mexico,180
United States of America,China,visa required
India,Nepal,visa free
India,Thailand,visa on arrival
India,Germany,visa required
";

const OTHER_CSV: &str = "\
Passport,Destination,Requirement
Japan,Peru,visa free
";

/// Points both tiers at the mock server.
fn config_for(server: &MockServer) -> ResolvedConfig {
    ResolvedConfig {
        primary_url: format!("{}/primary.csv", server.uri()),
        secondary_url: format!("{}/secondary.csv", server.uri()),
        fetch_timeout_secs: 2,
        ..ResolvedConfig::default()
    }
}

async fn mount_csv(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

// ============================================================================
// HttpCsvSource Tests
// ============================================================================

#[tokio::test]
async fn test_http_source_parses_csv() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 200, TIDY_CSV).await;

    let source = HttpCsvSource::new(
        "primary",
        &format!("{}/primary.csv", server.uri()),
        DatasetOrigin::Primary,
        Duration::from_secs(2),
    );
    let dataset = source.fetch().await.unwrap();

    assert_eq!(dataset.origin, DatasetOrigin::Primary);
    assert_eq!(dataset.len(), 6);
    assert_eq!(dataset.records()[1].requirement, RequirementKind::Unknown);
    assert_eq!(dataset.records()[1].max_stay_days, Some(180));
}

#[tokio::test]
async fn test_http_source_reports_status() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 404, "Not Found").await;

    let source = HttpCsvSource::new(
        "primary",
        &format!("{}/primary.csv", server.uri()),
        DatasetOrigin::Primary,
        Duration::from_secs(2),
    );
    let result = source.fetch().await;
    assert!(matches!(result, Err(SourceError::Http { status: 404 })));
}

#[tokio::test]
async fn test_http_source_timeout_is_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow.csv"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(OTHER_CSV)
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let source = HttpCsvSource::new(
        "slow",
        &format!("{}/slow.csv", server.uri()),
        DatasetOrigin::Primary,
        Duration::from_millis(200),
    );
    assert!(matches!(source.fetch().await, Err(SourceError::Network(_))));
}

// ============================================================================
// Fallback Chain Tests
// ============================================================================

#[tokio::test]
async fn test_primary_success_short_circuits() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 200, TIDY_CSV).await;
    Mock::given(method("GET"))
        .and(path("/secondary.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string(OTHER_CSV))
        .expect(0)
        .mount(&server)
        .await;

    let dataset = DatasetLoader::from_config(&config_for(&server)).load().await;
    assert_eq!(dataset.origin, DatasetOrigin::Primary);
    assert_eq!(dataset.len(), 6);
}

#[tokio::test]
async fn test_primary_error_falls_back_to_secondary() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 500, "oops").await;
    mount_csv(&server, "/secondary.csv", 200, OTHER_CSV).await;

    let dataset = DatasetLoader::from_config(&config_for(&server)).load().await;
    assert_eq!(dataset.origin, DatasetOrigin::Secondary);
    assert_eq!(
        resolve_visa_free(&dataset, "japan").destinations,
        vec!["Peru"]
    );
}

#[tokio::test]
async fn test_malformed_primary_falls_back_to_secondary() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 200, "Country,Visa\nIndia,yes\n").await;
    mount_csv(&server, "/secondary.csv", 200, OTHER_CSV).await;

    let dataset = DatasetLoader::from_config(&config_for(&server)).load().await;
    assert_eq!(dataset.origin, DatasetOrigin::Secondary);
}

#[tokio::test]
async fn test_both_sources_failing_uses_builtin() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 503, "").await;
    mount_csv(&server, "/secondary.csv", 200, "Passport,Destination,Requirement\n").await;

    let dataset = DatasetLoader::from_config(&config_for(&server)).load().await;
    assert_eq!(dataset.origin, DatasetOrigin::BuiltIn);
    assert_eq!(dataset, fallback_dataset());

    for (passport, _) in BUILTIN_PASSPORTS {
        assert!(!resolve_visa_free(&dataset, passport).is_empty(), "{passport}");
    }
}

#[tokio::test]
async fn test_unreachable_host_uses_builtin() {
    let config = ResolvedConfig {
        primary_url: "http://127.0.0.1:9/primary.csv".to_string(),
        secondary_url: "http://127.0.0.1:9/secondary.csv".to_string(),
        fetch_timeout_secs: 1,
        ..ResolvedConfig::default()
    };
    let dataset = DatasetLoader::from_config(&config).load().await;
    assert_eq!(dataset.origin, DatasetOrigin::BuiltIn);
}

// ============================================================================
// End-to-end Lookup Tests
// ============================================================================

#[tokio::test]
async fn test_remote_dataset_substring_tier() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 200, TIDY_CSV).await;

    let dataset = DatasetLoader::from_config(&config_for(&server)).load().await;
    let lookup = resolve_visa_free(&dataset, "United States");

    // Mexico is published only as a day count and does not qualify
    assert_eq!(lookup.outcome, MatchOutcome::SubstringMatch);
    assert_eq!(lookup.destinations, vec!["Canada"]);

    let counts = classify(&lookup.destinations);
    assert_eq!(counts.get(Region::Americas), 1);
}

#[tokio::test]
async fn test_remote_dataset_visa_on_arrival_counts() {
    let server = MockServer::start().await;
    mount_csv(&server, "/primary.csv", 200, TIDY_CSV).await;

    let dataset = DatasetLoader::from_config(&config_for(&server)).load().await;
    let lookup = resolve_visa_free(&dataset, "India");

    assert_eq!(lookup.outcome, MatchOutcome::ExactMatch);
    assert_eq!(lookup.destinations, vec!["Nepal", "Thailand"]);
}
