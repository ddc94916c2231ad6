//! Use case orchestration for [`User`] operations.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::AppState;
use crate::error::Result;
use crate::user::{User, UserPatch, UserRepositoryPort};

/// User manager.
///
/// The single substitution point of the crate: any [`UserRepositoryPort`]
/// implementation can be injected at construction time.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepositoryPort>,
}

impl FromRef<AppState> for UserService {
    fn from_ref(state: &AppState) -> UserService {
        state.users.clone()
    }
}

impl UserService {
    /// Create a new [`UserService`] backed by `repository`.
    pub fn new(repository: Arc<dyn UserRepositoryPort>) -> Self {
        Self { repository }
    }

    /// Look up a user by id.
    ///
    /// Absence is a normal outcome and comes back as `Ok(None)`; only
    /// storage failures are errors.
    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        tracing::info!(user_id = id, "fetching user");

        let user = self.repository.find_by_id(id).await?;
        if let Some(user) = &user {
            tracing::info!(?user, "user found");
        }

        Ok(user)
    }

    /// Overwrite the mutable fields of an existing user and persist it.
    ///
    /// Lookup-before-write: a missing id yields `Ok(None)` and no row is
    /// ever created. The read and the write are not one atomic unit, so
    /// concurrent updates to the same id are last-writer-wins.
    pub async fn update_user(
        &self,
        id: i64,
        patch: UserPatch,
    ) -> Result<Option<User>> {
        tracing::info!(user_id = id, "updating user");

        let Some(mut user) = self.repository.find_by_id(id).await? else {
            return Ok(None);
        };

        user.apply(patch);
        let user = self.repository.save(user).await?;
        tracing::info!(?user, "user updated");

        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::InMemoryUserRepository;

    fn john() -> User {
        User {
            id: 1,
            first_name: "John".into(),
            last_name: "Doe".into(),
            email: "john@example.com".into(),
        }
    }

    fn patch() -> UserPatch {
        UserPatch {
            first_name: "JohnUpdated".into(),
            last_name: "DoeUpdated".into(),
            email: "john.updated@example.com".into(),
        }
    }

    async fn service_with(users: &[User]) -> (UserService, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::new());
        for user in users {
            repo.save(user.clone()).await.unwrap();
        }
        (UserService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn get_existing_user_returns_stored_fields() {
        let (service, _) = service_with(&[john()]).await;

        let user = service.get_user_by_id(1).await.unwrap();
        assert_eq!(user, Some(john()));
    }

    #[tokio::test]
    async fn get_missing_user_is_none() {
        let (service, _) = service_with(&[]).await;

        assert_eq!(service.get_user_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_overwrites_fields_and_preserves_id() {
        let (service, _) = service_with(&[john()]).await;

        let updated = service.update_user(1, patch()).await.unwrap().unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.first_name, "JohnUpdated");
        assert_eq!(updated.last_name, "DoeUpdated");
        assert_eq!(updated.email, "john.updated@example.com");

        // write-then-read consistency.
        let fetched = service.get_user_by_id(1).await.unwrap();
        assert_eq!(fetched, Some(updated));
    }

    #[tokio::test]
    async fn update_missing_user_creates_no_row() {
        let (service, repo) = service_with(&[]).await;

        let result = service.update_user(999, patch()).await.unwrap();
        assert_eq!(result, None);
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn update_twice_is_idempotent() {
        let (service, _) = service_with(&[john()]).await;

        let once = service.update_user(1, patch()).await.unwrap();
        let twice = service.update_user(1, patch()).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(service.get_user_by_id(1).await.unwrap(), twice);
    }
}
