//! # Research Handlers
//!
//! The inbound side of the pipeline: the HTML form, the JSON API and the
//! plain-text download. Topics are validated here, before any call upstream.

use super::{
    page::{render_page, PageBody},
    wrap_response, ApiResponse, AppError, AppState, DebugParams,
};
use crate::types::{DownloadRequest, ResearchForm, ResearchRequest, ResearchResponse};
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form, Json,
};
use researcher::{ExportArtifact, Topic};
use serde_json::json;
use tracing::info;

/// Renders the page for the current state: the form, or the configuration error.
pub async fn index(State(app_state): State<AppState>) -> impl IntoResponse {
    match app_state.pipeline() {
        Ok(pipeline) => (
            StatusCode::OK,
            Html(render_page(
                PageBody::Form {
                    topic: "",
                    warning: None,
                    result: None,
                },
                Some(pipeline.ai_provider().model()),
            )),
        ),
        Err(message) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Html(render_page(PageBody::Unavailable { message }, None)),
        ),
    }
}

/// Handles the form posted from the page and renders the result in place.
pub async fn research_form_handler(
    State(app_state): State<AppState>,
    Form(form): Form<ResearchForm>,
) -> impl IntoResponse {
    let pipeline = match app_state.pipeline() {
        Ok(pipeline) => pipeline,
        Err(message) => {
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Html(render_page(PageBody::Unavailable { message }, None)),
            )
        }
    };
    let model = Some(pipeline.ai_provider().model());

    let topic = match Topic::parse(&form.topic) {
        Ok(topic) => topic,
        Err(e) => {
            let warning = e.to_string();
            return (
                StatusCode::BAD_REQUEST,
                Html(render_page(
                    PageBody::Form {
                        topic: &form.topic,
                        warning: Some(&warning),
                        result: None,
                    },
                    model,
                )),
            );
        }
    };

    info!("Received research form submission.");
    let result = pipeline.run_to_text(topic.as_str()).await;

    (
        StatusCode::OK,
        Html(render_page(
            PageBody::Form {
                topic: topic.as_str(),
                warning: None,
                result: Some(&result),
            },
            model,
        )),
    )
}

/// JSON API for running the pipeline. `?debug=true` adds the intermediate research text.
pub async fn research_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    Json(payload): Json<ResearchRequest>,
) -> Result<Json<ApiResponse<ResearchResponse>>, AppError> {
    let pipeline = app_state
        .pipeline()
        .map_err(|message| AppError::Unavailable(message.to_string()))?;
    let topic = Topic::parse(&payload.topic)?;

    info!("Received research request.");
    let report = pipeline.run(topic.as_str()).await;

    let debug_info = Some(json!({
        "model": pipeline.ai_provider().model(),
        "research": report.research,
        "refined": report.refined,
        "phases": report.phases,
    }));
    Ok(wrap_response(
        ResearchResponse {
            text: report.final_text(),
        },
        debug_params,
        debug_info,
    ))
}

/// Serves `text` back as the `validated_research.txt` attachment, byte for byte.
pub async fn download_handler(Json(payload): Json<DownloadRequest>) -> impl IntoResponse {
    let artifact = ExportArtifact::from_text(&payload.text);
    (
        [
            (header::CONTENT_TYPE, artifact.media_type.to_string()),
            (header::CONTENT_DISPOSITION, artifact.content_disposition()),
        ],
        artifact.bytes,
    )
}
