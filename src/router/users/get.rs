//! Get a user by id.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::user::{User, UserService};

/// Wire representation of a [`User`].
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

pub async fn handler(
    State(users): State<UserService>,
    Path(user_id): Path<i64>,
) -> Result<Response> {
    match users.get_user_by_id(user_id).await? {
        Some(user) => Ok(Json(UserResponse::from(user)).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;

    use super::*;
    use crate::router::users::tests::{john, state_with};
    use crate::{app, make_request};

    #[tokio::test]
    async fn test_get_user_handler() {
        let (state, _) = state_with(&[john()]).await;
        let app = app(state);

        let response =
            make_request(app, Method::GET, "/users/1", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: UserResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            body,
            UserResponse {
                id: 1,
                first_name: "John".into(),
                last_name: "Doe".into(),
                email: "john@example.com".into(),
            }
        );
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_404_with_empty_body() {
        let (state, _) = state_with(&[john()]).await;
        let app = app(state);

        let response =
            make_request(app, Method::GET, "/users/999", String::default())
                .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
