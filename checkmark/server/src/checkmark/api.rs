use crate::checkmark::{CheckmarkError, CheckmarkService};
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use checkmark_core::{
    CheckmarkItem, NewCheckmark, Priority, UnknownPriority, ValidationErrors, validate_content,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

/// Base path every checkmark route lives under.
pub const CHECKMARK_BASE_PATH: &str = "/api/checkmark";

#[derive(Clone)]
pub struct CheckmarkState {
    pub service: Arc<CheckmarkService>,
}

/// JSON body returned for every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine readable error code
    pub error: String,
    /// Human readable description
    pub message: String,
}

/// Error type for checkmark handler operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No item has the requested ID.
    #[error("Checkmark with ID {0} not found")]
    NotFound(i32),
    /// The ID in the URL and the ID in the body disagree.
    #[error("Path ID {path} does not match payload ID {payload}")]
    IdMismatch { path: i32, payload: i32 },
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    InvalidPriority(#[from] UnknownPriority),
    /// The request body is not a valid checkmark payload.
    #[error("{}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    /// The ID segment of the URL is not a number.
    #[error("{}", .0.body_text())]
    InvalidId(#[from] PathRejection),
    /// Represents a storage failure.
    #[error("Service error: {0}")]
    Service(#[from] CheckmarkError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_code) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::IdMismatch { .. } => (StatusCode::BAD_REQUEST, "ID_MISMATCH"),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            ApiError::InvalidPriority(_) => (StatusCode::BAD_REQUEST, "INVALID_PRIORITY"),
            ApiError::InvalidBody(_) => (StatusCode::BAD_REQUEST, "INVALID_BODY"),
            ApiError::InvalidId(_) => (StatusCode::BAD_REQUEST, "INVALID_ID"),
            ApiError::Service(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let message = match &self {
            ApiError::Service(err) => {
                tracing::error!("Checkmark request failed: {}", err);
                "An unexpected error occurred while processing your request. Please try again later."
                    .to_string()
            }
            other => other.to_string(),
        };

        (
            status_code,
            Json(ErrorResponse {
                error: error_code.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

/// Handler for GET /api/checkmark - Returns every checkmark.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/checkmark",
    responses(
        (status = 200, description = "Successfully retrieved checkmarks", body = Vec<CheckmarkItem>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Checkmark"
)]
pub async fn get_all_handler(
    State(state): State<CheckmarkState>,
) -> Result<Json<Vec<CheckmarkItem>>, ApiError> {
    let items = state.service.get_all_items().await?;
    Ok(Json(items))
}

/// Handler for GET /api/checkmark/{id} - Returns a single checkmark.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/checkmark/{id}",
    params(("id" = i32, Path, description = "Checkmark ID")),
    responses(
        (status = 200, description = "Checkmark found", body = CheckmarkItem),
        (status = 400, description = "ID is not a number", body = ErrorResponse),
        (status = 404, description = "Checkmark not found", body = ErrorResponse)
    ),
    tag = "Checkmark"
)]
pub async fn get_by_id_handler(
    State(state): State<CheckmarkState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<CheckmarkItem>, ApiError> {
    let Path(id) = id?;
    state
        .service
        .get_item_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// Handler for POST /api/checkmark - Creates a checkmark.
///
/// Responds with the stored item and a `Location` header pointing at it.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    post,
    path = "/api/checkmark",
    request_body = NewCheckmark,
    responses(
        (status = 201, description = "Checkmark created", body = CheckmarkItem),
        (status = 400, description = "Malformed body or invalid checkmark fields", body = ErrorResponse)
    ),
    tag = "Checkmark"
)]
pub async fn create_handler(
    State(state): State<CheckmarkState>,
    payload: Result<Json<NewCheckmark>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(payload) = payload?;
    validate_content(&payload.title, &payload.description)?;

    let created = state.service.create_item(payload.into_item()).await?;
    let location = format!("{}/{}", CHECKMARK_BASE_PATH, created.id);
    tracing::info!("Created checkmark {}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// Handler for PUT /api/checkmark/{id} - Replaces a checkmark.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    put,
    path = "/api/checkmark/{id}",
    params(("id" = i32, Path, description = "Checkmark ID, must match the body's id")),
    request_body = CheckmarkItem,
    responses(
        (status = 204, description = "Checkmark updated"),
        (status = 400, description = "ID mismatch, malformed body or invalid fields", body = ErrorResponse),
        (status = 404, description = "Checkmark not found", body = ErrorResponse)
    ),
    tag = "Checkmark"
)]
pub async fn update_handler(
    State(state): State<CheckmarkState>,
    id: Result<Path<i32>, PathRejection>,
    item: Result<Json<CheckmarkItem>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(item) = item?;
    if id != item.id {
        return Err(ApiError::IdMismatch {
            path: id,
            payload: item.id,
        });
    }
    validate_content(&item.title, &item.description)?;

    state
        .service
        .update_item(item)
        .await?
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(ApiError::NotFound(id))
}

/// Handler for DELETE /api/checkmark/{id} - Deletes a checkmark.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    delete,
    path = "/api/checkmark/{id}",
    params(("id" = i32, Path, description = "Checkmark ID")),
    responses(
        (status = 204, description = "Checkmark deleted"),
        (status = 404, description = "Checkmark not found", body = ErrorResponse)
    ),
    tag = "Checkmark"
)]
pub async fn delete_handler(
    State(state): State<CheckmarkState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    if state.service.delete_item(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(id))
    }
}

/// Handler for GET /api/checkmark/completed.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/checkmark/completed",
    responses((status = 200, description = "Completed checkmarks", body = Vec<CheckmarkItem>)),
    tag = "Checkmark"
)]
pub async fn get_completed_handler(
    State(state): State<CheckmarkState>,
) -> Result<Json<Vec<CheckmarkItem>>, ApiError> {
    Ok(Json(state.service.get_completed_items().await?))
}

/// Handler for GET /api/checkmark/pending.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/checkmark/pending",
    responses((status = 200, description = "Pending checkmarks", body = Vec<CheckmarkItem>)),
    tag = "Checkmark"
)]
pub async fn get_pending_handler(
    State(state): State<CheckmarkState>,
) -> Result<Json<Vec<CheckmarkItem>>, ApiError> {
    Ok(Json(state.service.get_pending_items().await?))
}

/// Handler for GET /api/checkmark/priority/{level}.
///
/// `level` is a priority name (`Low`, `Medium`, `High`) or its number.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/api/checkmark/priority/{level}",
    params(("level" = String, Path, description = "Priority name or number")),
    responses(
        (status = 200, description = "Checkmarks with this priority", body = Vec<CheckmarkItem>),
        (status = 400, description = "Unknown priority level", body = ErrorResponse)
    ),
    tag = "Checkmark"
)]
pub async fn get_by_priority_handler(
    State(state): State<CheckmarkState>,
    Path(level): Path<String>,
) -> Result<Json<Vec<CheckmarkItem>>, ApiError> {
    let priority: Priority = level.parse()?;
    Ok(Json(state.service.get_items_by_priority(priority).await?))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_handler,
        get_by_id_handler,
        create_handler,
        update_handler,
        delete_handler,
        get_completed_handler,
        get_pending_handler,
        get_by_priority_handler
    ),
    components(schemas(CheckmarkItem, NewCheckmark, ErrorResponse)),
    tags((name = "Checkmark", description = "Checkmark item management"))
)]
pub struct ApiDoc;

/// Creates and returns the checkmark router with all checkmark routes.
pub fn create_checkmark_router(state: CheckmarkState) -> Router {
    Router::new()
        .route(
            CHECKMARK_BASE_PATH,
            get(get_all_handler).post(create_handler),
        )
        .route("/api/checkmark/completed", get(get_completed_handler))
        .route("/api/checkmark/pending", get(get_pending_handler))
        .route(
            "/api/checkmark/priority/{level}",
            get(get_by_priority_handler),
        )
        .route(
            "/api/checkmark/{id}",
            get(get_by_id_handler)
                .put(update_handler)
                .delete(delete_handler),
        )
        .with_state(state)
}
