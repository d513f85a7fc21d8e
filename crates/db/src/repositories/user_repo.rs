//! Repository for the `tb_user` and `tb_user_role` tables.

use sqlx::PgPool;
use dsmovie_core::types::DbId;

use crate::models::user::{CreateUser, User, UserDetailsProjection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash";

/// Provides operations for users and their role grants.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO tb_user (username, password_hash) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tb_user WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Grant a role to a user. Granting the same role twice is a no-op.
    pub async fn add_role(pool: &PgPool, user_id: DbId, role_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO tb_user_role (user_id, role_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(role_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// One row per role held by `username`; empty when the user is unknown.
    pub async fn search_user_and_roles_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Vec<UserDetailsProjection>, sqlx::Error> {
        sqlx::query_as::<_, UserDetailsProjection>(
            "SELECT u.username, u.password_hash, r.id AS role_id, r.authority \
             FROM tb_user u \
             JOIN tb_user_role ur ON ur.user_id = u.id \
             JOIN tb_role r ON r.id = ur.role_id \
             WHERE u.username = $1",
        )
        .bind(username)
        .fetch_all(pool)
        .await
    }
}
