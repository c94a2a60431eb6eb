//! Channel-setting handlers: RENAME, DESCRIPTION, hotline toggles, vouch
//! mode/level, and the unguarded SET_LANGUAGE.

use super::{Dispatcher, Outcome};
use crate::catalog::{render_reply, Notice, Reply};
use crate::model::{Dispatchable, Language, Payload, VouchMode};
use crate::notify;
use tracing::{info, warn};

impl Dispatcher {
    /// RENAME: single-field channel update, bystander admins see old and
    /// new names.
    pub(super) async fn rename(&self, dispatchable: &Dispatchable, payload: &Payload) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }
        let Payload::Text(new_name) = payload else {
            return Outcome::noop();
        };

        if let Err(e) = self.db.channels().set_name(&channel.address, new_name).await {
            warn!(channel = %channel.address, error = ?e, "Failed to rename channel");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, old = %channel.name, new = %new_name, by = %sender.member_address, "Channel renamed");

        let notifications = notify::to_bystander_admins(
            channel,
            &[&sender.member_address],
            &Notice::ChannelRenamed {
                old: &channel.name,
                new: new_name,
            },
        );

        Outcome::success_with(
            render_reply(
                sender.language,
                &Reply::RenameSuccess {
                    old: &channel.name,
                    new: new_name,
                },
            ),
            notifications,
        )
    }

    /// DESCRIPTION: update the public channel description.
    pub(super) async fn set_description(
        &self,
        dispatchable: &Dispatchable,
        payload: &Payload,
    ) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }
        let Payload::Text(description) = payload else {
            return Outcome::noop();
        };

        if let Err(e) = self
            .db
            .channels()
            .set_description(&channel.address, description)
            .await
        {
            warn!(channel = %channel.address, error = ?e, "Failed to set description");
            return self.db_error(sender.language);
        }

        let notifications = notify::to_bystander_admins(
            channel,
            &[&sender.member_address],
            &Notice::DescriptionChanged { description },
        );

        Outcome::success_with(
            render_reply(sender.language, &Reply::DescriptionSuccess { description }),
            notifications,
        )
    }

    /// HOTLINE_ON / HOTLINE_OFF: boolean field flip.
    pub(super) async fn set_hotline(&self, dispatchable: &Dispatchable, on: bool) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }

        if let Err(e) = self.db.channels().set_hotline(&channel.address, on).await {
            warn!(channel = %channel.address, on, error = ?e, "Failed to toggle hotline");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, on, by = %sender.member_address, "Hotline toggled");

        let notifications = notify::to_bystander_admins(
            channel,
            &[&sender.member_address],
            &Notice::HotlineToggled { on },
        );

        Outcome::success_with(
            render_reply(sender.language, &Reply::HotlineToggled { on }),
            notifications,
        )
    }

    /// VOUCHING_ON / VOUCHING_OFF / VOUCHING_ADMIN.
    pub(super) async fn set_vouch_mode(
        &self,
        dispatchable: &Dispatchable,
        mode: VouchMode,
    ) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }

        if let Err(e) = self
            .db
            .channels()
            .set_vouch_mode(&channel.address, mode)
            .await
        {
            warn!(channel = %channel.address, mode = mode.code(), error = ?e, "Failed to set vouch mode");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, mode = mode.code(), by = %sender.member_address, "Vouch mode changed");

        let notifications = notify::to_bystander_admins(
            channel,
            &[&sender.member_address],
            &Notice::VouchModeChanged { mode },
        );

        Outcome::success_with(
            render_reply(sender.language, &Reply::VouchModeChanged { mode }),
            notifications,
        )
    }

    /// VOUCH_LEVEL: range-validated numeric update. Validation failure is a
    /// plain error referencing the invalid value; no store call is made.
    pub(super) async fn set_vouch_level(
        &self,
        dispatchable: &Dispatchable,
        payload: &Payload,
    ) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }
        let Payload::Level(value) = payload else {
            return Outcome::noop();
        };

        if *value < 1 || *value > i64::from(self.config.max_vouch_level) {
            return Outcome::error(render_reply(
                sender.language,
                &Reply::InvalidVouchLevel {
                    value: *value,
                    max: self.config.max_vouch_level,
                },
            ));
        }
        let level = *value as u32;

        if let Err(e) = self
            .db
            .channels()
            .set_vouch_level(&channel.address, level)
            .await
        {
            warn!(channel = %channel.address, level, error = ?e, "Failed to set vouch level");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, level, by = %sender.member_address, "Vouch level changed");

        let notifications = notify::to_bystander_admins(
            channel,
            &[&sender.member_address],
            &Notice::VouchLevelChanged { level },
        );

        Outcome::success_with(
            render_reply(sender.language, &Reply::VouchLevelSet { level }),
            notifications,
        )
    }

    /// SET_LANGUAGE: no role guard - anyone may set their own language.
    /// Members get the preference persisted; everyone gets the
    /// confirmation in the language they just chose.
    pub(super) async fn set_language(
        &self,
        dispatchable: &Dispatchable,
        new_language: Language,
    ) -> Outcome {
        let sender = &dispatchable.sender;

        if sender.role.is_member()
            && let Err(e) = self
                .db
                .memberships()
                .update_language(&sender.member_address, new_language)
                .await
        {
            warn!(member = %sender.member_address, language = new_language.code(), error = ?e, "Failed to update language");
            return self.db_error(new_language);
        }

        Outcome::success(render_reply(new_language, &Reply::LanguageSet))
    }
}
