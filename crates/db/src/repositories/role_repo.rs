//! Repository for the `tb_role` table.

use sqlx::PgPool;

use crate::models::role::Role;

/// Looks up seeded roles.
pub struct RoleRepo;

impl RoleRepo {
    /// Find a role by authority name (case-sensitive).
    pub async fn find_by_authority(
        pool: &PgPool,
        authority: &str,
    ) -> Result<Option<Role>, sqlx::Error> {
        sqlx::query_as::<_, Role>("SELECT id, authority FROM tb_role WHERE authority = $1")
            .bind(authority)
            .fetch_optional(pool)
            .await
    }
}
