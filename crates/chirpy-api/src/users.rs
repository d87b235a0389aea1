use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::info;
use uuid::Uuid;

use chirpy_types::api::CreateUserRequest;

use crate::convert::user_from_row;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::{AppState, blocking_db};

pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let user_id = Uuid::new_v4();
    let now = chrono::Utc::now().timestamp();

    let row = blocking_db(&state, move |db| {
        db.create_user(&user_id.to_string(), &req.email, now)
    })
    .await?;

    info!("Created user {}", user_id);
    Ok((StatusCode::CREATED, Json(user_from_row(row)?)))
}
