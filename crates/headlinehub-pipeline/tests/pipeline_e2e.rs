//! End-to-end pipeline tests using wiremock HTTP mocks for both the news
//! page and the translation endpoint.

use headlinehub_pipeline::{
    Pipeline, PipelineConfig, PipelineError, SentimentClass, Translation,
    TRANSLATION_FAILURE_MARKER,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NEWS_PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<h2>Site navigation</h2>
<h2 data-testid="card-headline">Team wins historic victory</h2>
<div><h2 class="promo" data-testid="card-headline">Quiet day in parliament</h2></div>
<h2 data-testid="card-headline">Dozens killed in border attack</h2>
<h2 data-testid="other-card">Weather tomorrow</h2>
</body></html>"#;

fn test_config(server: &MockServer) -> PipelineConfig {
    PipelineConfig {
        news_url: format!("{}/news", server.uri()),
        translate_base_url: server.uri(),
        request_timeout_secs: 2,
        ..PipelineConfig::default()
    }
}

async fn mount_news_page(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn gtx_body(translated: &str) -> serde_json::Value {
    serde_json::json!([[[translated, "original", null]], null, "en"])
}

#[tokio::test]
async fn english_run_returns_headlines_in_document_order() {
    let server = MockServer::start().await;
    mount_news_page(&server, NEWS_PAGE).await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let headlines = pipeline.run("en").await.expect("run should succeed");

    assert_eq!(headlines.len(), 3);
    assert_eq!(headlines[0].text, "Team wins historic victory");
    assert_eq!(headlines[1].text, "Quiet day in parliament");
    assert_eq!(headlines[2].text, "Dozens killed in border attack");

    assert_eq!(headlines[0].sentiment.class, SentimentClass::Positive);
    assert_eq!(headlines[1].sentiment.class, SentimentClass::Neutral);
    assert_eq!(headlines[2].sentiment.class, SentimentClass::Negative);

    // Native-language run: translator never invoked, no translation blocks.
    assert!(headlines.iter().all(|h| h.translation.is_none()));
}

#[tokio::test]
async fn english_run_never_calls_the_translator() {
    let server = MockServer::start().await;
    mount_news_page(&server, NEWS_PAGE).await;

    // Any hit on the translation path would be an unexpected request.
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let rendered = pipeline.run_rendered("en").await.expect("run should succeed");
    assert!(!rendered.contains("->"));
}

#[tokio::test]
async fn non_2xx_status_fails_the_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let result = pipeline.run("en").await;

    match result {
        Err(PipelineError::UnexpectedStatus { status, .. }) => assert_eq!(status, 503),
        other => panic!("expected UnexpectedStatus, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_timeout_fails_the_run_without_panicking() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(NEWS_PAGE)
                .set_delay(std::time::Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let result = pipeline.run("en").await;

    assert!(
        matches!(result, Err(PipelineError::Fetch(_))),
        "expected Fetch error on timeout, got: {result:?}"
    );
}

#[tokio::test]
async fn page_without_cards_is_no_content() {
    let server = MockServer::start().await;
    mount_news_page(&server, "<html><body><h1>Redesigned page</h1></body></html>").await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let result = pipeline.run("en").await;

    assert!(
        matches!(result, Err(PipelineError::NoContent)),
        "expected NoContent, got: {result:?}"
    );
}

#[tokio::test]
async fn translated_run_degrades_single_failure_to_marker() {
    let server = MockServer::start().await;
    mount_news_page(&server, NEWS_PAGE).await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("tl", "fr"))
        .and(query_param("q", "Team wins historic victory"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gtx_body("Victoire historique")))
        .mount(&server)
        .await;

    // Second headline's translation call blows up.
    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("tl", "fr"))
        .and(query_param("q", "Quiet day in parliament"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .and(query_param("tl", "fr"))
        .and(query_param("q", "Dozens killed in border attack"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gtx_body("Attaque meurtrière")))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let headlines = pipeline.run("fr").await.expect("run should still succeed");

    assert_eq!(headlines.len(), 3);
    assert_eq!(
        headlines[0].translation,
        Some(Translation::Translated("Victoire historique".to_string()))
    );
    assert_eq!(headlines[1].translation, Some(Translation::Failed));
    assert_eq!(
        headlines[2].translation,
        Some(Translation::Translated("Attaque meurtrière".to_string()))
    );

    let failed = headlines
        .iter()
        .filter(|h| h.translation == Some(Translation::Failed))
        .count();
    assert_eq!(failed, 1, "exactly one headline should bear the failure marker");
}

#[tokio::test]
async fn rendered_translated_run_includes_title_and_markers() {
    let server = MockServer::start().await;
    mount_news_page(
        &server,
        r#"<h2 data-testid="card-headline">Hello world</h2>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/translate_a/single"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let rendered = pipeline.run_rendered("hi").await.expect("run should succeed");

    assert!(rendered.contains("(translated to hi)"));
    assert!(rendered.contains("Hello world"));
    assert!(rendered.contains(TRANSLATION_FAILURE_MARKER));
}

#[tokio::test]
async fn repeated_runs_render_identically() {
    let server = MockServer::start().await;
    mount_news_page(&server, NEWS_PAGE).await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let first = pipeline.run_rendered("en").await.expect("first run");
    let second = pipeline.run_rendered("en").await.expect("second run");
    assert_eq!(first, second);
}

#[tokio::test]
async fn extraction_caps_at_ten_headlines() {
    let server = MockServer::start().await;
    let cards: String = (0..14)
        .map(|i| format!(r#"<h2 data-testid="card-headline">Story number {i}</h2>"#))
        .collect();
    mount_news_page(&server, &cards).await;

    let pipeline = Pipeline::new(test_config(&server)).expect("pipeline construction");
    let headlines = pipeline.run("en").await.expect("run should succeed");

    assert_eq!(headlines.len(), 10);
    assert_eq!(headlines[0].text, "Story number 0");
    assert_eq!(headlines[9].text, "Story number 9");
}
