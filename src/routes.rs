use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;
use crate::translate::{build_prompt, TranslateRequest, TranslateResponse};

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        .route("/api/translate", post(translate))

        // Front-end assets
        .fallback_service(ServeDir::new(&system_config.public_dir))
}

/// The complete application: routes, layers and state.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Hockey Slang Translator API is running!"
    }))
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, AppError> {
    match run_translation(&state, payload).await {
        Ok(translation) => Ok(Json(TranslateResponse { translation })),
        Err(err @ AppError::Validation(_)) => {
            debug!("Rejected translate request: {}", err);
            Err(err)
        }
        Err(err) => {
            error!("Translation error: {}", err);
            Err(err)
        }
    }
}

async fn run_translation(
    state: &AppState,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<String, AppError> {
    let Json(request) = payload.map_err(|rejection| match rejection {
        // A body that isn't declared as JSON carries no text
        JsonRejection::MissingJsonContentType(_) => {
            AppError::Validation("Text is required".to_string())
        }
        other => AppError::Validation(other.body_text()),
    })?;

    let text = request
        .text()
        .ok_or_else(|| AppError::Validation("Text is required".to_string()))?;

    let llm = state.llm.as_ref().ok_or_else(|| {
        AppError::Configuration("API key not configured on server".to_string())
    })?;

    let prompt = build_prompt(text, request.mode);
    debug!("Translating {} chars ({})", text.chars().count(), request.mode.as_str());

    llm.chat_completion(&state.persona, &prompt).await
}
