//! Membership repository.
//!
//! The (channel, member) primary key is the consistency guarantee against
//! double-admission races; handlers do not lock.

use super::channels::parse_address;
use super::DbError;
use crate::model::{Language, Membership, PhoneNumber, Role};
use sqlx::SqlitePool;

pub(super) type MembershipRow = (String, String, String, String, i64);

pub(super) fn row_to_membership(row: MembershipRow) -> Result<Membership, DbError> {
    let (channel, member, member_type, language, created_at) = row;
    Ok(Membership {
        channel_address: parse_address(&channel)?,
        member_address: parse_address(&member)?,
        role: Role::from_code(&member_type)
            .ok_or_else(|| DbError::Internal(format!("unknown member type: {member_type}")))?,
        language: Language::from_code(&language)
            .ok_or_else(|| DbError::Internal(format!("unknown language: {language}")))?,
        created_at,
    })
}

/// Repository for membership rows.
pub struct MembershipRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MembershipRepository<'a> {
    /// Create a new membership repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve the role an address holds on a channel. Absent rows resolve
    /// to the `None` sentinel.
    pub async fn resolve_member_type(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<Role, DbError> {
        let row = sqlx::query_as::<_, (String,)>(
            "SELECT member_type FROM memberships WHERE channel_address = ? AND member_address = ?",
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .fetch_optional(self.pool)
        .await?;

        match row {
            Some((member_type,)) => Role::from_code(&member_type)
                .ok_or_else(|| DbError::Internal(format!("unknown member type: {member_type}"))),
            None => Ok(Role::None),
        }
    }

    /// Whether an address has any membership on a channel.
    pub async fn is_member(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<bool, DbError> {
        Ok(self.resolve_member_type(channel, member).await?.is_member())
    }

    /// Find the full membership record for an address on a channel.
    pub async fn find_membership(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<Option<Membership>, DbError> {
        let row = sqlx::query_as::<_, MembershipRow>(
            r#"
            SELECT channel_address, member_address, member_type, language, created_at
            FROM memberships
            WHERE channel_address = ? AND member_address = ?
            "#,
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(row_to_membership).transpose()
    }

    /// Promote an address to admin, inserting a membership if none exists.
    /// An existing record keeps its language and creation time.
    pub async fn add_admin(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
        language: Language,
    ) -> Result<Membership, DbError> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO memberships (channel_address, member_address, member_type, language, created_at)
            VALUES (?, ?, 'ADMIN', ?, ?)
            ON CONFLICT (channel_address, member_address)
            DO UPDATE SET member_type = 'ADMIN'
            "#,
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .bind(language.code())
        .bind(now)
        .execute(self.pool)
        .await?;

        self.find_membership(channel, member)
            .await?
            .ok_or_else(|| DbError::Internal("admin membership missing after upsert".to_string()))
    }

    /// Subscribe an address. Callers guard on the sender not already being
    /// a member; the primary key enforces it against races.
    pub async fn add_subscriber(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
        language: Language,
    ) -> Result<Membership, DbError> {
        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO memberships (channel_address, member_address, member_type, language, created_at)
            VALUES (?, ?, 'SUBSCRIBER', ?, ?)
            "#,
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .bind(language.code())
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(Membership {
            channel_address: channel.clone(),
            member_address: member.clone(),
            role: Role::Subscriber,
            language,
            created_at: now,
        })
    }

    /// Remove a member of any role. Returns whether a row was deleted.
    pub async fn remove_member(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(
            "DELETE FROM memberships WHERE channel_address = ? AND member_address = ?",
        )
        .bind(channel.as_str())
        .bind(member.as_str())
        .execute(self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Update a member's language preference on every channel they belong
    /// to. Returns the number of memberships updated.
    pub async fn update_language(
        &self,
        member: &PhoneNumber,
        language: Language,
    ) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE memberships SET language = ? WHERE member_address = ?")
            .bind(language.code())
            .bind(member.as_str())
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
