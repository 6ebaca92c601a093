pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::uploads::handlers as uploads;
use crate::uploads::storage::{MAX_UPLOAD_BYTES, UPLOADS_URL_PREFIX};

/// Request body cap on the upload route. Set above the file limit so an
/// oversized photo is still read far enough to be reported as too large.
const UPLOAD_BODY_LIMIT: usize = 2 * MAX_UPLOAD_BYTES;

pub fn build_router(state: AppState) -> Router {
    let uploads_dir = state.uploads.dir().to_path_buf();
    let public_dir = state.config.public_dir.clone();

    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route(
            "/api/curriculo",
            get(resume::handle_get_resume).post(resume::handle_update_resume),
        )
        .route(
            "/api/curriculo/validate",
            post(resume::handle_validate_resume),
        )
        // Upload API
        .route(
            "/api/upload",
            post(uploads::handle_upload_photo).layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT)),
        )
        .nest_service(UPLOADS_URL_PREFIX, ServeDir::new(uploads_dir))
        .fallback_service(ServeDir::new(public_dir))
        .with_state(state)
}
