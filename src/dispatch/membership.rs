//! Membership-mutation handlers: ADD, REMOVE, LEAVE, JOIN.

use super::{Dispatcher, Outcome};
use crate::catalog::{render_reply, Notice, Reply};
use crate::model::{Dispatchable, Payload, Role};
use crate::notify;
use tracing::{info, warn};

impl Dispatcher {
    /// ADD: promote an address to admin, re-trusting it first if it has an
    /// open deauthorization.
    pub(super) async fn add(&self, dispatchable: &Dispatchable, payload: &Payload) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }
        let Some(target) = payload.first_address() else {
            return Outcome::noop();
        };

        // Re-trust before promotion: a deauthorized address must not hold
        // admin rights under an unverified key.
        if channel.deauthorization_of(target).is_some() {
            if let Err(e) = self.trust.retrust(&channel.address, target).await {
                warn!(channel = %channel.address, target = %target, error = %e, "Re-trust failed");
                return self.db_error(sender.language);
            }
            if let Err(e) = self
                .db
                .deauthorizations()
                .destroy(&channel.address, target)
                .await
            {
                warn!(channel = %channel.address, target = %target, error = ?e, "Failed to clear deauthorization");
                return self.db_error(sender.language);
            }
        }

        let membership = match self
            .db
            .memberships()
            .add_admin(&channel.address, target, self.config.default_language)
            .await
        {
            Ok(membership) => membership,
            Err(e) => {
                warn!(channel = %channel.address, target = %target, error = ?e, "Failed to add admin");
                return self.db_error(sender.language);
            }
        };

        info!(channel = %channel.address, target = %target, by = %sender.member_address, "Admin added");

        // Welcome goes out in the new admin's stored language, not the
        // sender's.
        let mut notifications = vec![notify::to_member(
            &membership,
            &Notice::WelcomeAdmin {
                channel: &channel.name,
                added_by: &sender.member_address,
            },
        )];
        notifications.extend(notify::to_bystander_admins(
            channel,
            &[&sender.member_address, target],
            &Notice::AdminAdded { new_admin: target },
        ));

        Outcome::success_with(
            render_reply(sender.language, &Reply::AddSuccess { target }),
            notifications,
        )
    }

    /// REMOVE: evict a member of any role.
    pub(super) async fn remove(&self, dispatchable: &Dispatchable, payload: &Payload) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }
        let Some(target) = payload.first_address() else {
            return Outcome::noop();
        };

        let target_role = match self
            .db
            .memberships()
            .resolve_member_type(&channel.address, target)
            .await
        {
            Ok(role) => role,
            Err(e) => {
                warn!(channel = %channel.address, target = %target, error = ?e, "Failed to resolve member type");
                return self.db_error(sender.language);
            }
        };

        if target_role == Role::None {
            return Outcome::error(render_reply(
                sender.language,
                &Reply::TargetNotMember { target },
            ));
        }

        // The target's stored language, read from the snapshot before the
        // record is gone.
        let target_language = channel
            .membership_of(target)
            .map(|m| m.language)
            .unwrap_or(self.config.default_language);

        if let Err(e) = self
            .db
            .memberships()
            .remove_member(&channel.address, target)
            .await
        {
            warn!(channel = %channel.address, target = %target, error = ?e, "Failed to remove member");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, target = %target, role = target_role.code(), by = %sender.member_address, "Member removed");

        let (to_target, to_bystanders) = match target_role {
            Role::Admin => (
                Notice::ToRemovedAdmin {
                    channel: &channel.name,
                },
                Notice::AdminRemoved { removed: target },
            ),
            _ => (
                Notice::ToRemovedSubscriber {
                    channel: &channel.name,
                },
                Notice::SubscriberRemoved,
            ),
        };

        let mut notifications = vec![crate::model::Notification::new(
            target.clone(),
            crate::catalog::render_notice(target_language, &to_target),
        )];
        notifications.extend(notify::to_bystander_admins(
            channel,
            &[&sender.member_address, target],
            &to_bystanders,
        ));

        Outcome::success_with(
            render_reply(sender.language, &Reply::RemoveSuccess { target }),
            notifications,
        )
    }

    /// LEAVE: self-removal. Admins leaving notify the remaining admins;
    /// subscribers leave silently.
    pub(super) async fn leave(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if !sender.role.is_member() {
            return Outcome::unauthorized(render_reply(sender.language, &Reply::NotMember));
        }

        if let Err(e) = self
            .db
            .memberships()
            .remove_member(&channel.address, &sender.member_address)
            .await
        {
            warn!(channel = %channel.address, member = %sender.member_address, error = ?e, "Failed to remove leaving member");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, member = %sender.member_address, role = sender.role.code(), "Member left");

        let notifications = if sender.role.is_admin() {
            notify::to_bystander_admins(channel, &[&sender.member_address], &Notice::AdminLeft)
        } else {
            Vec::new()
        };

        Outcome::success_with(
            render_reply(
                sender.language,
                &Reply::LeaveSuccess {
                    channel: &channel.name,
                },
            ),
            notifications,
        )
    }

    /// JOIN: direct subscription, available only while vouching is off.
    pub(super) async fn join(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if sender.role.is_member() {
            return Outcome::error(render_reply(sender.language, &Reply::AlreadyMember));
        }
        if channel.vouch_mode.is_on() {
            return Outcome::error(render_reply(sender.language, &Reply::InviteRequired));
        }

        if let Err(e) = self
            .db
            .memberships()
            .add_subscriber(&channel.address, &sender.member_address, sender.language)
            .await
        {
            warn!(channel = %channel.address, member = %sender.member_address, error = ?e, "Failed to add subscriber");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, member = %sender.member_address, "Subscriber joined");

        Outcome::success(render_reply(
            sender.language,
            &Reply::JoinSuccess {
                channel: &channel.name,
                description: &channel.description,
            },
        ))
    }
}
