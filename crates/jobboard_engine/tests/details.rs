use std::time::Duration;

use jobboard_core::Language;
use jobboard_engine::{DetailsFetcher, DetailsSettings, FailureKind, ReqwestDetailsFetcher};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"{
    "id": 12,
    "jobTitle": "Engineer",
    "mission": "Build reliable services.",
    "guildCode": "ENG",
    "guildName": "Engineering",
    "levelCode": "1",
    "levelText": "Senior",
    "jobCode": "ENG1A",
    "technicalSkills": [
        {"title": "Rust", "description": "Systems", "proficiencyCode": "4",
         "proficiencyText": "Expert", "observableBehaviors": [{"text": " Reviews code "}]}
    ],
    "foundationalSkills": [
        {"title": "Communication", "description": "Talks", "proficiencyCode": "2",
         "proficiencyText": "Practitioner", "observableBehaviors": []}
    ],
    "responsibilities": [{"text": "Own the API"}, {"text": ""}],
    "experiences": [{"text": "5+ years"}]
}"#;

fn settings_for(server: &MockServer) -> DetailsSettings {
    DetailsSettings {
        base_url: format!("{}/api", server.uri()),
        ..DetailsSettings::default()
    }
}

#[tokio::test]
async fn fetcher_requests_root_and_language_and_decodes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ValidJobRoot"))
        .and(query_param("validJobRootId", "12"))
        .and(query_param("language", "Spanish"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .mount(&server)
        .await;

    let fetcher = ReqwestDetailsFetcher::new(settings_for(&server)).expect("client");
    let details = fetcher.fetch(12, Language::Spanish).await.expect("fetch ok");

    assert_eq!(details.mission, "Build reliable services.");
    assert_eq!(details.responsibilities, vec!["Own the API".to_string()]);
    assert_eq!(details.experiences, vec!["5+ years".to_string()]);
    assert_eq!(details.technical_skills[0].name, "Rust");
    assert_eq!(details.technical_skills[0].level, "Expert");
    assert_eq!(
        details.technical_skills[0].observable_behaviors,
        vec!["Reviews code".to_string()]
    );
    assert_eq!(details.foundational_skills[0].name, "Communication");
}

#[tokio::test]
async fn fetcher_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ValidJobRoot"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = ReqwestDetailsFetcher::new(settings_for(&server)).expect("client");
    let err = fetcher.fetch(7, Language::English).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn fetcher_rejects_response_without_mission() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ValidJobRoot"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"jobTitle": "x"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let fetcher = ReqwestDetailsFetcher::new(settings_for(&server)).expect("client");
    let err = fetcher.fetch(3, Language::English).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::MissingMission);
}

#[tokio::test]
async fn fetcher_times_out_on_slow_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ValidJobRoot"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_raw(BODY, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = DetailsSettings {
        request_timeout: Duration::from_millis(50),
        ..settings_for(&server)
    };
    let fetcher = ReqwestDetailsFetcher::new(settings).expect("client");
    let err = fetcher.fetch(2, Language::English).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn fetcher_rejects_too_large_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/ValidJobRoot"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .mount(&server)
        .await;

    let settings = DetailsSettings {
        max_bytes: 10,
        ..settings_for(&server)
    };
    let fetcher = ReqwestDetailsFetcher::new(settings).expect("client");
    let err = fetcher.fetch(3, Language::English).await.unwrap_err();
    assert_eq!(
        err.kind,
        FailureKind::TooLarge {
            max_bytes: 10,
            actual: Some(BODY.len() as u64)
        }
    );
}
