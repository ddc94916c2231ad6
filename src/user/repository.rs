//! Repository port for [`User`] persistence.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::user::User;

/// Outbound port: the storage contract the domain depends on.
///
/// Exactly two operations are required from a storage backend: a keyed
/// lookup where absence is a normal outcome, and an upsert-by-primary-key
/// write returning the persisted record.
#[async_trait]
pub trait UserRepositoryPort: Send + Sync {
    /// Find a user by id. `None` when no row exists.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// Upsert a user by primary key and return the persisted record.
    async fn save(&self, user: User) -> Result<User>;
}

/// In-memory implementation of the port (for development/testing).
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<i64, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl UserRepositoryPort for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn save(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;
        users.insert(user.id, user.clone());
        Ok(user)
    }
}
