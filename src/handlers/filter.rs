use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde_json::Value;

use crate::{
    hook::FilterEvent,
    models::QuestionPayload,
    names,
    rejections::{AppError, ResultExt},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::FILTER_URL, post(run_filter))
}

async fn run_filter(
    State(state): State<AppState>,
    Path((event, collection)): Path<(String, String)>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let event = event.parse::<FilterEvent>().map_err(|_| {
        tracing::warn!("unsupported filter event: {event}");
        AppError::NotFound
    })?;

    if !state.hook.handles(&collection) {
        tracing::debug!("{} on {collection}: not a question collection", event.as_str());
        return Ok(Json(body));
    }

    let Value::Object(mut item) = body else {
        return Err(AppError::Input("malformed question payload"));
    };

    let mut payload = serde_json::from_value::<QuestionPayload>(Value::Object(item.clone()))
        .reject_input("malformed question payload")?;

    let answer = state
        .hook
        .apply(event, &collection, &mut payload)
        .inspect_err(|e| tracing::info!("{} on {collection}: rejected: {e}", event.as_str()))?;
    tracing::info!("{} on {collection}: encoded answer {answer}", event.as_str());

    // Only `answer` is written; other keys, nulls included, go back as sent.
    item.insert("answer".to_string(), Value::String(answer.into()));

    Ok(Json(Value::Object(item)))
}
