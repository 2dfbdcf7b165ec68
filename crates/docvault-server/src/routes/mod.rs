pub mod documents;
pub mod errors;
pub mod status;

use crate::openapi::ApiDoc;
use crate::state::AppState;
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use utoipa::OpenApi;

pub fn configure(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .merge(status::routes())
        .merge(documents::routes(state))
}
