//! Hotline-message repository.
//!
//! Maps opaque per-channel ids to the member who sent a hotline message.
//! The dispatch engine only reads these; ingestion records them before a
//! hotline message is relayed to admins.

use super::channels::parse_address;
use super::DbError;
use crate::model::PhoneNumber;
use sqlx::SqlitePool;

/// Repository for hotline-message routing records.
pub struct HotlineRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> HotlineRepository<'a> {
    /// Create a new hotline repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a hotline message and return its per-channel id. Ids are
    /// serial within a channel so admins see small thread numbers.
    pub async fn record(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<i64, DbError> {
        let now = chrono::Utc::now().timestamp();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO hotline_messages (channel_address, id, member_address, created_at)
            VALUES (
                ?,
                (SELECT COALESCE(MAX(id), 0) + 1 FROM hotline_messages WHERE channel_address = ?),
                ?,
                ?
            )
            RETURNING id
            "#,
        )
        .bind(channel.as_str())
        .bind(channel.as_str())
        .bind(member.as_str())
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Resolve a hotline id back to the member who sent it.
    pub async fn find_member_address(
        &self,
        channel: &PhoneNumber,
        message_id: i64,
    ) -> Result<Option<PhoneNumber>, DbError> {
        let row = sqlx::query_as::<_, (String,)>(
            "SELECT member_address FROM hotline_messages WHERE channel_address = ? AND id = ?",
        )
        .bind(channel.as_str())
        .bind(message_id)
        .fetch_optional(self.pool)
        .await?;

        row.map(|(member,)| parse_address(&member)).transpose()
    }
}
