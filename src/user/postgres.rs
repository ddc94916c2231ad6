//! Postgres adapter for the repository port.
//!
//! [`UserRow`] is the storage-side shape; it never leaks past this module.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::error::Result;
use crate::user::{User, UserRepositoryPort};

/// [`UserRepositoryPort`] implementation over the `users` table.
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new [`PgUserRepository`].
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// User as saved on database.
#[derive(Clone, Debug, PartialEq, sqlx::FromRow)]
struct UserRow {
    id: i64,
    first_name: String,
    last_name: String,
    email: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

#[async_trait]
impl UserRepositoryPort for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"SELECT id, first_name, last_name, email FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn save(&self, user: User) -> Result<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"INSERT INTO users (id, first_name, last_name, email)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO UPDATE
                SET first_name = EXCLUDED.first_name,
                    last_name = EXCLUDED.last_name,
                    email = EXCLUDED.email
                RETURNING id, first_name, last_name, email"#,
        )
        .bind(user.id)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }
}
