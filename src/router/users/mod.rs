//! Users-related HTTP API.
//!
//! Pure shape translation: wire DTOs in the handler files, domain calls
//! through [`crate::user::UserService`], status codes at this boundary only.

mod get;
mod update;

use axum::Router;
use axum::routing::get;

use crate::AppState;

pub(crate) use get::UserResponse;

pub fn router() -> Router<AppState> {
    Router::new()
        // `GET /users/:ID` goes to `get`, `PUT /users/:ID` goes to `update`.
        .route("/{user_id}", get(get::handler).put(update::handler))
}

/// Shared test-state builder for handler tests.
#[cfg(test)]
pub(crate) mod tests {
    use std::sync::Arc;

    use crate::config::Configuration;
    use crate::user::{InMemoryUserRepository, User, UserRepositoryPort, UserService};
    use crate::AppState;

    pub(crate) async fn state_with(
        users: &[User],
    ) -> (AppState, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        for user in users {
            repo.save(user.clone()).await.unwrap();
        }

        let state = AppState {
            config: Arc::new(Configuration::default()),
            users: UserService::new(repo.clone()),
        };
        (state, repo)
    }

    pub(crate) fn john() -> User {
        User {
            id: 1,
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
        }
    }
}
