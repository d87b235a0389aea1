use axum::{
    extract::State,
    response::{Html, IntoResponse},
};
use tracing::info;

use crate::error::ApiError;
use crate::state::{AppState, blocking_db};

pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>
  <body>
    <h1>Welcome, Chirpy Admin</h1>
    <p>Chirpy has been visited {} times!</p>
  </body>
</html>",
        state.hits.snapshot()
    ))
}

/// Clears the hit counter and every user (chirps cascade).
/// Refused outside the dev platform, in which case nothing changes.
pub async fn reset(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    if !state.platform.is_dev() {
        return Err(ApiError::Forbidden);
    }

    let removed = blocking_db(&state, |db| db.delete_all_users()).await?;
    state.hits.reset();

    info!("Reset: cleared hit counter and {} users", removed);
    Ok("Hits reset to 0")
}
