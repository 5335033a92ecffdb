//! Chirp endpoints.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::store::Chirp;
use crate::validate::{ChirpInput, validate};
use crate::{Json, Request, Status};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cleaned {
    pub cleaned_body: String,
}

/// `POST /api/validate_chirp` — `{"body": "..."}` → `{"cleanedBody": "..."}`.
pub async fn validate_chirp(req: Request) -> Result<Json<Cleaned>, ApiError> {
    let input: ChirpInput = req.json()?;
    let cleaned_body = validate(&input, req.state().policy()).into_result()?;
    Ok(Json(Cleaned { cleaned_body }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewChirp {
    body: String,
    user_id: u64,
}

/// `POST /api/chirps` — validates, stores, and echoes the chirp with `201`.
pub async fn create_chirp(req: Request) -> Result<(Status, Json<Chirp>), ApiError> {
    let NewChirp { body, user_id } = req.json()?;
    let cleaned_body = validate(&ChirpInput { body }, req.state().policy()).into_result()?;

    let chirp = req.state()
        .store()
        .create_chirp(cleaned_body, user_id)
        .ok_or_else(|| ApiError::NotFound(format!("User {user_id} not found")))?;
    Ok((Status::Created, Json(chirp)))
}

/// `GET /api/chirps` — every stored chirp, oldest first.
pub async fn list_chirps(req: Request) -> Json<Vec<Chirp>> {
    Json(req.state().store().chirps())
}
