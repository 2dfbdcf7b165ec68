use crate::routes::errors::ErrorResponse;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use docvault::{DocumentDraft, DocumentRecord, DocumentStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

/// Query parameters for listing documents
#[derive(Deserialize, IntoParams, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsQuery {
    /// Substring matched against name, type, department and owner
    pub filter: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DocumentListResponse {
    /// Matching records, most recently created first
    pub documents: Vec<DocumentRecord>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    /// New lifecycle status for the document
    status: DocumentStatus,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVersionRequest {
    /// New version label for the document
    version: String,
}

#[utoipa::path(
    get,
    path = "/documents",
    params(ListDocumentsQuery),
    responses(
        (status = 200, description = "Matching documents retrieved successfully", body = DocumentListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Document Management"
)]
pub async fn list_documents(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<Json<DocumentListResponse>, ErrorResponse> {
    let filter = query.filter.as_deref().unwrap_or("").trim();
    let documents = state.store.list(filter).await?;
    Ok(Json(DocumentListResponse { documents }))
}

#[utoipa::path(
    post,
    path = "/documents",
    request_body = DocumentDraft,
    responses(
        (status = 201, description = "Document created successfully", body = DocumentRecord),
        (status = 400, description = "Bad request - Required field empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Document Management"
)]
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<DocumentDraft>,
) -> Result<(StatusCode, Json<DocumentRecord>), ErrorResponse> {
    let record = state.store.create(draft).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    get,
    path = "/documents/{id}",
    params(
        ("id" = i64, Path, description = "Identifier assigned to the document at creation")
    ),
    responses(
        (status = 200, description = "Document retrieved successfully", body = DocumentRecord),
        (status = 404, description = "Document not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Document Management"
)]
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DocumentRecord>, ErrorResponse> {
    let record = state.store.get(id).await?;
    Ok(Json(record))
}

#[utoipa::path(
    put,
    path = "/documents/{id}",
    request_body = DocumentDraft,
    params(
        ("id" = i64, Path, description = "Identifier assigned to the document at creation")
    ),
    responses(
        (status = 200, description = "Document updated (no-op when the id is absent)"),
        (status = 400, description = "Bad request - Required field empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Document Management"
)]
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(draft): Json<DocumentDraft>,
) -> Result<StatusCode, ErrorResponse> {
    state.store.update(id, draft).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    delete,
    path = "/documents/{id}",
    params(
        ("id" = i64, Path, description = "Identifier assigned to the document at creation")
    ),
    responses(
        (status = 200, description = "Document deleted (no-op when the id is absent)"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Document Management"
)]
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ErrorResponse> {
    state.store.delete(id).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put,
    path = "/documents/{id}/status",
    request_body = UpdateStatusRequest,
    params(
        ("id" = i64, Path, description = "Identifier assigned to the document at creation")
    ),
    responses(
        (status = 200, description = "Document status updated"),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Document Management"
)]
pub async fn update_document_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<StatusCode, ErrorResponse> {
    state.store.update_status(id, request.status).await?;
    Ok(StatusCode::OK)
}

#[utoipa::path(
    put,
    path = "/documents/{id}/version",
    request_body = UpdateVersionRequest,
    params(
        ("id" = i64, Path, description = "Identifier assigned to the document at creation")
    ),
    responses(
        (status = 200, description = "Document version updated"),
        (status = 400, description = "Bad request - Version empty", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Document Management"
)]
pub async fn update_document_version(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateVersionRequest>,
) -> Result<StatusCode, ErrorResponse> {
    state.store.update_version(id, &request.version).await?;
    Ok(StatusCode::OK)
}

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Static routes first (to avoid matching as {id})
        .route("/documents", get(list_documents))
        .route("/documents", post(create_document))
        // Dynamic routes after static ones
        .route("/documents/{id}", get(get_document))
        .route("/documents/{id}", put(update_document))
        .route("/documents/{id}", delete(delete_document))
        .route("/documents/{id}/status", put(update_document_status))
        .route("/documents/{id}/version", put(update_document_version))
        .with_state(state)
}
