use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::middleware::count_hits;
use crate::state::AppState;
use crate::{admin, chirps, health, users};

/// Full application router. Only `/app` traffic is counted as a hit.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/healthz", get(health::healthz))
        .route("/api/validate_chirp", post(chirps::validate_chirp))
        .route("/api/users", post(users::create_user))
        .route("/api/chirps", get(chirps::list_chirps).post(chirps::create_chirp))
        .route("/api/chirps/{chirp_id}", get(chirps::get_chirp))
        .route("/admin/metrics", get(admin::metrics))
        .route("/admin/reset", post(admin::reset));

    let fileserver = Router::new()
        .nest_service("/app", ServeDir::new(&state.filepath_root))
        // Unmatched paths reach the fallback uncounted
        .route_layer(middleware::from_fn_with_state(state.clone(), count_hits));

    Router::new()
        .merge(api)
        .merge(fileserver)
        .with_state(state)
}
