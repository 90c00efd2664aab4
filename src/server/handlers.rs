use super::types::{ErrorResponse, HealthResponse, SummarizeRequest, SummarizeResponse};
use crate::lifecycle::ServiceHandle;
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub summarizer: ServiceHandle,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received summarize request ({} chars)", request.text.len());

    let Some(summarizer) = state.summarizer.get().await else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                detail: "Service not available. Please try again later.".to_string(),
            }),
        ));
    };

    match summarizer.summarize(&request.text).await {
        Ok(summary) => Ok(Json(SummarizeResponse { summary })),
        Err(e) => {
            error!("Error occurred while processing request: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    detail: format!("An internal error occurred: {}", e),
                }),
            ))
        }
    }
}
