//! Update a user's mutable fields.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::router::users::UserResponse;
use crate::user::{UserPatch, UserService};

/// Wire body of a `PUT /users/:ID` request.
///
/// All three fields are required; the id comes from the path.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Body {
    first_name: String,
    last_name: String,
    email: String,
}

pub async fn handler(
    State(users): State<UserService>,
    Path(user_id): Path<i64>,
    Json(body): Json<Body>,
) -> Result<Response> {
    let patch = UserPatch {
        first_name: body.first_name,
        last_name: body.last_name,
        email: body.email,
    };

    match users.update_user(user_id, patch).await? {
        Some(user) => Ok(Json(UserResponse::from(user)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}
