use serde::Deserialize;

use crate::error::ApiError;
use crate::store::User;
use crate::{Json, Request, Status};

#[derive(Debug, Deserialize)]
struct NewUser {
    email: String,
}

/// `POST /api/users` — `{"email": "..."}` → `201` with the stored user.
pub async fn create_user(req: Request) -> Result<(Status, Json<User>), ApiError> {
    let NewUser { email } = req.json()?;
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::BadRequest("Email is required".to_owned()));
    }
    let user = req.state().store().create_user(email.to_owned());
    Ok((Status::Created, Json(user)))
}
