//! # End-to-End Research Tests
//!
//! Runs the full pipeline through the HTTP surface against a mocked Gemini
//! API: call order and count, verbatim hand-over between the stages, error
//! containment, and the downloadable result.

mod common;

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use common::{gemini_body, TestApp, GEMINI_PATH};
use httpmock::Method::POST;
use regex::Regex;
use researcher::prompts::core::build_validation_prompt;
use serde_json::json;

const TOPIC: &str = "Latest Generative AI advancements";
const RESEARCH: &str = "## Generative AI in 2024\n- Multimodal models (source: arxiv.org)\n- Smaller \"distilled\" models & <tools>\n";
const REFINED: &str = "# Refined\n\n1. Multimodal models are mainstream.\n2. Distillation cuts cost.\n";

fn extract_download_href(html: &str) -> Option<String> {
    let re = Regex::new(r#"<a id="download" href="([^"]+)" download="([^"]+)">"#).ok()?;
    let caps = re.captures(html)?;
    assert_eq!(&caps[2], "validated_research.txt");
    Some(caps[1].to_string())
}

#[tokio::test]
async fn test_api_runs_research_then_validation() -> Result<()> {
    // --- Arrange ---
    let app = TestApp::spawn().await?;
    let research = app.mock_research(RESEARCH).await;
    let expected_validation_request = json!({
        "contents": [{ "parts": [{ "text": build_validation_prompt(RESEARCH) }] }]
    });
    let validation = app
        .mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GEMINI_PATH)
                .json_body(expected_validation_request);
            then.status(200).json_body(gemini_body(REFINED));
        })
        .await;

    // --- Act ---
    let response = app
        .client
        .post(app.url("/research?debug=true"))
        .json(&json!({ "topic": TOPIC }))
        .send()
        .await?;

    // --- Assert ---
    assert!(
        response.status().is_success(),
        "Request failed with status: {}",
        response.status()
    );
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["result"]["text"], REFINED);
    assert_eq!(body["debug"]["research"]["status"], "generated");
    assert_eq!(body["debug"]["research"]["text"], RESEARCH);
    assert_eq!(
        body["debug"]["phases"],
        json!(["idle", "researching", "validating", "done"])
    );
    research.assert_hits_async(1).await;
    validation.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_api_omits_debug_by_default() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_research(RESEARCH).await;
    app.mock_validation(REFINED).await;

    let response = app
        .client
        .post(app.url("/research"))
        .json(&json!({ "topic": TOPIC }))
        .send()
        .await?;

    let body: serde_json::Value = response.json().await?;
    assert!(body.get("debug").is_none());
    assert_eq!(body["result"]["text"], REFINED);
    Ok(())
}

#[tokio::test]
async fn test_each_request_issues_two_fresh_calls() -> Result<()> {
    let app = TestApp::spawn().await?;
    let research = app.mock_research(RESEARCH).await;
    let validation = app.mock_validation(REFINED).await;

    for _ in 0..2 {
        let response = app
            .client
            .post(app.url("/research"))
            .json(&json!({ "topic": TOPIC }))
            .send()
            .await?;
        assert!(response.status().is_success());
    }

    research.assert_hits_async(2).await;
    validation.assert_hits_async(2).await;
    Ok(())
}

#[tokio::test]
async fn test_research_failure_is_refined_as_content() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let research = app.mock_research_failure(429, "RESOURCE_EXHAUSTED").await;
    let validation = app
        .mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GEMINI_PATH)
                .body_contains("Validate and refine the following data:")
                .body_contains("[research error]")
                .body_contains("RESOURCE_EXHAUSTED");
            then.status(200).json_body(gemini_body("Refined error report"));
        })
        .await;

    // Act
    let response = app
        .client
        .post(app.url("/research?debug=true"))
        .json(&json!({ "topic": TOPIC }))
        .send()
        .await?;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["result"]["text"], "Refined error report");
    assert_eq!(body["debug"]["research"]["status"], "failed");
    research.assert_hits_async(1).await;
    validation.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_empty_validation_payload_returns_fallback() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_research(RESEARCH).await;
    app.mock_validation("").await;

    let response = app
        .client
        .post(app.url("/research"))
        .json(&json!({ "topic": TOPIC }))
        .send()
        .await?;

    let body: serde_json::Value = response.json().await?;
    assert_eq!(body["result"]["text"], "No validated data available.");
    Ok(())
}

#[tokio::test]
async fn test_validation_failure_is_shown_as_text() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_research(RESEARCH).await;
    app.mock_server
        .mock_async(|when, then| {
            when.method(POST)
                .path(GEMINI_PATH)
                .body_contains("Validate and refine the following data:");
            then.status(500).body("backend exploded");
        })
        .await;

    let response = app
        .client
        .post(app.url("/research"))
        .json(&json!({ "topic": TOPIC }))
        .send()
        .await?;

    assert_eq!(200, response.status().as_u16());
    let body: serde_json::Value = response.json().await?;
    let text = body["result"]["text"].as_str().unwrap_or_default();
    assert!(text.starts_with("[validation error] "), "got: {text}");
    assert!(text.contains("backend exploded"));
    Ok(())
}

#[tokio::test]
async fn test_form_submission_renders_result_with_exact_download() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    let research = app.mock_research(RESEARCH).await;
    let validation = app.mock_validation(REFINED).await;

    // Act
    let response = app
        .client
        .post(app.url("/"))
        .form(&[("topic", TOPIC)])
        .send()
        .await?;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let html = response.text().await?;
    assert!(html.contains("Validated Research Data:"));
    assert!(html.contains("1. Multimodal models are mainstream."));

    let href = extract_download_href(&html).expect("download link should be present");
    let encoded = href
        .strip_prefix("data:text/plain;charset=utf-8;base64,")
        .expect("download should be a base64 text/plain data URL");
    assert_eq!(STANDARD.decode(encoded)?, REFINED.as_bytes());

    research.assert_hits_async(1).await;
    validation.assert_hits_async(1).await;
    Ok(())
}

#[tokio::test]
async fn test_form_escapes_service_markup() -> Result<()> {
    let app = TestApp::spawn().await?;
    app.mock_research(RESEARCH).await;
    app.mock_validation("<script>alert('x')</script>").await;

    let html = app
        .client
        .post(app.url("/"))
        .form(&[("topic", TOPIC)])
        .send()
        .await?
        .text()
        .await?;

    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
    Ok(())
}

#[tokio::test]
async fn test_download_endpoint_returns_identical_bytes() -> Result<()> {
    // Arrange
    let app = TestApp::spawn().await?;
    app.mock_research(RESEARCH).await;
    app.mock_validation(REFINED).await;
    let body: serde_json::Value = app
        .client
        .post(app.url("/research"))
        .json(&json!({ "topic": TOPIC }))
        .send()
        .await?
        .json()
        .await?;
    let displayed = body["result"]["text"].as_str().unwrap_or_default().to_string();

    // Act
    let response = app
        .client
        .post(app.url("/research/download"))
        .json(&json!({ "text": displayed }))
        .send()
        .await?;

    // Assert
    assert_eq!(200, response.status().as_u16());
    let headers = response.headers().clone();
    assert_eq!(
        headers["content-type"].to_str()?,
        "text/plain; charset=utf-8"
    );
    assert_eq!(
        headers["content-disposition"].to_str()?,
        "attachment; filename=\"validated_research.txt\""
    );
    assert_eq!(response.bytes().await?.as_ref(), displayed.as_bytes());
    Ok(())
}
