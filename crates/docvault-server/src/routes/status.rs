use axum::routing::get;
use axum::Router;

#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Server is running", body = String)
    ),
    tag = "Health"
)]
pub async fn status() -> &'static str {
    "ok"
}

pub fn routes() -> Router {
    Router::new().route("/status", get(status))
}
