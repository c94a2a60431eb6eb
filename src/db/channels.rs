//! Channel repository.
//!
//! Handles channel creation, settings updates, and the deep load used to
//! assemble dispatch snapshots.

use super::memberships::row_to_membership;
use super::DbError;
use crate::model::{Channel, Deauthorization, PhoneNumber, VouchMode};
use sqlx::SqlitePool;
use std::time::Duration;

/// A flat channel row, without memberships.
#[derive(Debug, Clone)]
pub struct ChannelRecord {
    pub address: PhoneNumber,
    pub name: String,
    pub description: String,
    pub hotline_on: bool,
    pub vouch_mode: VouchMode,
    pub vouch_level: u32,
    pub message_expiry: Duration,
    pub created_at: i64,
}

type ChannelRow = (String, String, String, bool, String, i64, i64, i64);

fn row_to_record(row: ChannelRow) -> Result<ChannelRecord, DbError> {
    let (address, name, description, hotline_on, vouch_mode, vouch_level, expiry, created_at) =
        row;
    Ok(ChannelRecord {
        address: parse_address(&address)?,
        name,
        description,
        hotline_on,
        vouch_mode: VouchMode::from_code(&vouch_mode)
            .ok_or_else(|| DbError::Internal(format!("unknown vouch mode: {vouch_mode}")))?,
        vouch_level: u32::try_from(vouch_level)
            .map_err(|_| DbError::Internal(format!("vouch level out of range: {vouch_level}")))?,
        message_expiry: Duration::from_secs(expiry.max(0) as u64),
        created_at,
    })
}

pub(super) fn parse_address(raw: &str) -> Result<PhoneNumber, DbError> {
    PhoneNumber::parse(raw).map_err(|e| DbError::Internal(e.to_string()))
}

/// Repository for channel rows.
pub struct ChannelRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ChannelRepository<'a> {
    /// Create a new channel repository.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a channel. Used by the provisioning collaborator, not by
    /// command handlers.
    pub async fn create(
        &self,
        address: &PhoneNumber,
        name: &str,
        message_expiry: Duration,
    ) -> Result<ChannelRecord, DbError> {
        if self.find(address).await?.is_some() {
            return Err(DbError::ChannelExists(address.to_string()));
        }

        let now = chrono::Utc::now().timestamp();

        sqlx::query(
            r#"
            INSERT INTO channels (address, name, message_expiry_secs, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(address.as_str())
        .bind(name)
        .bind(message_expiry.as_secs() as i64)
        .bind(now)
        .execute(self.pool)
        .await?;

        Ok(ChannelRecord {
            address: address.clone(),
            name: name.to_string(),
            description: String::new(),
            hotline_on: false,
            vouch_mode: VouchMode::Off,
            vouch_level: 1,
            message_expiry,
            created_at: now,
        })
    }

    /// Find a channel by address.
    pub async fn find(&self, address: &PhoneNumber) -> Result<Option<ChannelRecord>, DbError> {
        let row = sqlx::query_as::<_, ChannelRow>(
            r#"
            SELECT address, name, description, hotline_on, vouch_mode, vouch_level,
                   message_expiry_secs, created_at
            FROM channels
            WHERE address = ?
            "#,
        )
        .bind(address.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(row_to_record).transpose()
    }

    /// Deep-load a channel: settings plus memberships and deauthorizations,
    /// the snapshot shape dispatch consumes.
    pub async fn find_deep(&self, address: &PhoneNumber) -> Result<Option<Channel>, DbError> {
        let Some(record) = self.find(address).await? else {
            return Ok(None);
        };

        let membership_rows = sqlx::query_as::<_, (String, String, String, String, i64)>(
            r#"
            SELECT channel_address, member_address, member_type, language, created_at
            FROM memberships
            WHERE channel_address = ?
            ORDER BY created_at, member_address
            "#,
        )
        .bind(address.as_str())
        .fetch_all(self.pool)
        .await?;

        let memberships = membership_rows
            .into_iter()
            .map(row_to_membership)
            .collect::<Result<Vec<_>, _>>()?;

        let deauth_rows = sqlx::query_as::<_, (String, String, String, i64)>(
            r#"
            SELECT channel_address, member_address, fingerprint, created_at
            FROM deauthorizations
            WHERE channel_address = ?
            "#,
        )
        .bind(address.as_str())
        .fetch_all(self.pool)
        .await?;

        let deauthorizations = deauth_rows
            .into_iter()
            .map(|(channel, member, fingerprint, created_at)| {
                Ok::<_, DbError>(Deauthorization {
                    channel_address: parse_address(&channel)?,
                    member_address: parse_address(&member)?,
                    fingerprint,
                    created_at,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Channel {
            address: record.address,
            name: record.name,
            description: record.description,
            hotline_on: record.hotline_on,
            vouch_mode: record.vouch_mode,
            vouch_level: record.vouch_level,
            message_expiry: record.message_expiry,
            memberships,
            deauthorizations,
        }))
    }

    /// Rename a channel.
    pub async fn set_name(&self, address: &PhoneNumber, name: &str) -> Result<(), DbError> {
        sqlx::query("UPDATE channels SET name = ? WHERE address = ?")
            .bind(name)
            .bind(address.as_str())
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Update the public description.
    pub async fn set_description(
        &self,
        address: &PhoneNumber,
        description: &str,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE channels SET description = ? WHERE address = ?")
            .bind(description)
            .bind(address.as_str())
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Toggle the hotline.
    pub async fn set_hotline(&self, address: &PhoneNumber, on: bool) -> Result<(), DbError> {
        sqlx::query("UPDATE channels SET hotline_on = ? WHERE address = ?")
            .bind(on)
            .bind(address.as_str())
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Change the vouch mode.
    pub async fn set_vouch_mode(
        &self,
        address: &PhoneNumber,
        mode: VouchMode,
    ) -> Result<(), DbError> {
        sqlx::query("UPDATE channels SET vouch_mode = ? WHERE address = ?")
            .bind(mode.code())
            .bind(address.as_str())
            .execute(self.pool)
            .await?;
        Ok(())
    }

    /// Change the vouch level. Range validation happens in the handler.
    pub async fn set_vouch_level(&self, address: &PhoneNumber, level: u32) -> Result<(), DbError> {
        sqlx::query("UPDATE channels SET vouch_level = ? WHERE address = ?")
            .bind(level as i64)
            .bind(address.as_str())
            .execute(self.pool)
            .await?;
        Ok(())
    }
}
