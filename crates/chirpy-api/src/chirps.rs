use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, info};
use uuid::Uuid;

use chirpy_types::api::{CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse};
use chirpy_types::models::Chirp;

use crate::convert::chirp_from_row;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::state::{AppState, blocking_db};
use crate::validate;

/// Dry run of the chirp filter. Nothing is stored.
pub async fn validate_chirp(
    JsonBody(req): JsonBody<ValidateChirpRequest>,
) -> Result<Json<ValidateChirpResponse>, ApiError> {
    let cleaned_body = validate::validate_chirp(&req.body)?;
    Ok(Json(ValidateChirpResponse { cleaned_body }))
}

pub async fn create_chirp(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateChirpRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Reject before touching the database
    let body = validate::validate_chirp(&req.body)?;

    let chirp_id = Uuid::new_v4();
    let user_id = req.user_id;
    let now = chrono::Utc::now().timestamp();

    let row = blocking_db(&state, move |db| {
        db.create_chirp(&chirp_id.to_string(), &body, &user_id.to_string(), now)
    })
    .await?;

    info!("User {} posted chirp {}", user_id, chirp_id);
    Ok((StatusCode::CREATED, Json(chirp_from_row(row)?)))
}

pub async fn list_chirps(State(state): State<AppState>) -> Result<Json<Vec<Chirp>>, ApiError> {
    let rows = blocking_db(&state, |db| db.list_chirps()).await?;
    let chirps = rows
        .into_iter()
        .map(chirp_from_row)
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(Json(chirps))
}

pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Json<Chirp>, ApiError> {
    let chirp_id: Uuid = chirp_id.parse().map_err(|_| {
        debug!("Unparsable chirp id '{}'", chirp_id);
        ApiError::NotFound
    })?;

    let row = blocking_db(&state, move |db| db.get_chirp(&chirp_id.to_string()))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(chirp_from_row(row)?))
}
