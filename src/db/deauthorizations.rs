//! Deauthorization repository.
//!
//! A deauthorization records a member whose key changed and who was evicted
//! pending re-trust. Rows are created by the key-change listener and
//! cleared when an admin re-trusts the address via ADD.

use super::channels::parse_address;
use super::DbError;
use crate::model::{Deauthorization, PhoneNumber};
use sqlx::SqlitePool;

/// Repository for deauthorization rows.
pub struct DeauthorizationRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DeauthorizationRepository<'a> {
    /// Create a new deauthorization repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a deauthorization. Used by the key-change listener, not by
    /// command handlers.
    pub async fn create(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
        fingerprint: &str,
    ) -> Result<Deauthorization, DbError> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO deauthorizations (channel_address, member_address, fingerprint, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (channel_address, member_address)
            DO UPDATE SET fingerprint = excluded.fingerprint, created_at = excluded.created_at
            "#,
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .bind(fingerprint)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(Deauthorization {
            channel_address: channel.clone(),
            member_address: member.clone(),
            fingerprint: fingerprint.to_string(),
            created_at: now,
        })
    }

    /// Find the open deauthorization for an address, if any.
    pub async fn find(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<Option<Deauthorization>, DbError> {
        let row = sqlx::query_as::<_, (String, String, String, i64)>(
            r#"
            SELECT channel_address, member_address, fingerprint, created_at
            FROM deauthorizations
            WHERE channel_address = ? AND member_address = ?
            "#,
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(|(channel, member, fingerprint, created_at)| {
            Ok::<_, DbError>(Deauthorization {
                channel_address: parse_address(&channel)?,
                member_address: parse_address(&member)?,
                fingerprint,
                created_at,
            })
        })
        .transpose()
    }

    /// Clear a deauthorization after re-trust. Returns whether a row was
    /// deleted.
    pub async fn destroy(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(
            "DELETE FROM deauthorizations WHERE channel_address = ? AND member_address = ?",
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
