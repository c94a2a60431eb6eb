//! Invite repository.
//!
//! Invites are vouch credentials: one row per (channel, inviter, invitee).
//! Issuing is idempotent; accepting promotes and clears invites in one
//! transaction so no partial state survives a failure.

use super::DbError;
use crate::model::{Language, Membership, PhoneNumber, Role};
use sqlx::SqlitePool;

/// Repository for invitation rows.
pub struct InviteRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> InviteRepository<'a> {
    /// Create a new invite repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Issue an invite. Re-issuing the same (inviter, invitee) pair is a
    /// no-op success; returns whether a new row was created.
    pub async fn issue(
        &self,
        channel: &PhoneNumber,
        inviter: &PhoneNumber,
        invitee: &PhoneNumber,
    ) -> Result<bool, DbError> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO invitations
                (channel_address, inviter_address, invitee_address, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(channel.as_str())
        .bind(inviter.as_str())
        .bind(invitee.as_str())
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of distinct inviters who have vouched for an invitee.
    pub async fn count(
        &self,
        channel: &PhoneNumber,
        invitee: &PhoneNumber,
    ) -> Result<u32, DbError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM invitations
            WHERE channel_address = ? AND invitee_address = ?
            "#,
        )
        .bind(channel.as_str())
        .bind(invitee.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(count.max(0) as u32)
    }

    /// Promote an invitee to subscriber and delete their invites for this
    /// channel, atomically.
    pub async fn accept(
        &self,
        channel: &PhoneNumber,
        invitee: &PhoneNumber,
        language: Language,
    ) -> Result<Membership, DbError> {
        let now = chrono::Utc::now().timestamp();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
            INSERT INTO memberships (channel_address, member_address, member_type, language, created_at)
            VALUES (?, ?, 'SUBSCRIBER', ?, ?)
            "#,
        )
        .bind(channel.as_str())
        .bind(invitee.as_str())
        .bind(language.code())
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "DELETE FROM invitations WHERE channel_address = ? AND invitee_address = ?",
        )
        .bind(channel.as_str())
        .bind(invitee.as_str())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Membership {
            channel_address: channel.clone(),
            member_address: invitee.clone(),
            role: Role::Subscriber,
            language,
            created_at: now,
        })
    }

    /// Delete an invitee's pending invites for a channel. Returns the number
    /// of invites destroyed.
    pub async fn decline(
        &self,
        channel: &PhoneNumber,
        invitee: &PhoneNumber,
    ) -> Result<u64, DbError> {
        let result = sqlx::query(
            "DELETE FROM invitations WHERE channel_address = ? AND invitee_address = ?",
        )
        .bind(channel.as_str())
        .bind(invitee.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected())
    }
}
