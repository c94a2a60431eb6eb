//! Messaging handlers: PRIVATE, REPLY, and the hotline fall-through for
//! unmatched input.

use super::{Dispatcher, Outcome};
use crate::catalog::{render_notice, render_reply, Notice, Reply};
use crate::model::{Dispatchable, Notification, Payload, Role};
use crate::notify;
use tracing::warn;

impl Dispatcher {
    /// PRIVATE: broadcast the payload verbatim to every admin, the sender
    /// included. The fan-out is the visible effect, so the response body
    /// stays empty.
    pub(super) fn private(&self, dispatchable: &Dispatchable, payload: &Payload) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }
        let Payload::Text(text) = payload else {
            return Outcome::noop();
        };

        let mut notifications =
            notify::to_all_admins(channel, &Notice::PrivateMessage { text });
        for notification in &mut notifications {
            notification.attachments = dispatchable.message.attachments.clone();
        }

        Outcome::success_with(String::new(), notifications)
    }

    /// REPLY: route an admin's answer back to an anonymous hotline sender
    /// by message id, and copy the other admins for threading.
    pub(super) async fn reply(&self, dispatchable: &Dispatchable, payload: &Payload) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }
        let Payload::HotlineReply { message_id, text } = payload else {
            return Outcome::noop();
        };

        let member_address = match self
            .db
            .hotline()
            .find_member_address(&channel.address, *message_id)
            .await
        {
            Ok(Some(address)) => address,
            Ok(None) => {
                return Outcome::error(render_reply(
                    sender.language,
                    &Reply::InvalidHotlineId { id: *message_id },
                ));
            }
            Err(e) => {
                warn!(channel = %channel.address, message_id, error = ?e, "Failed to resolve hotline id");
                return self.db_error(sender.language);
            }
        };

        // The original sender may no longer be a member; fall back to the
        // default language rather than the admin's.
        let member_language = match self
            .db
            .memberships()
            .find_membership(&channel.address, &member_address)
            .await
        {
            Ok(Some(membership)) => membership.language,
            Ok(None) => self.config.default_language,
            Err(e) => {
                warn!(channel = %channel.address, error = ?e, "Failed to resolve hotline sender language");
                return self.db_error(sender.language);
            }
        };

        let mut notifications = vec![Notification::new(
            member_address,
            render_notice(member_language, &Notice::HotlineReplyToMember { text }),
        )];
        notifications.extend(notify::to_bystander_admins(
            channel,
            &[&sender.member_address],
            &Notice::HotlineReplyToAdmins {
                id: *message_id,
                text,
            },
        ));

        Outcome::success_with(
            render_reply(
                sender.language,
                &Reply::HotlineReplySent {
                    id: *message_id,
                    text,
                },
            ),
            notifications,
        )
    }

    /// Unmatched input. Admin traffic and hotline traffic are routed
    /// upstream (broadcast or hotline relay), so the engine answers NOOP;
    /// with the hotline off, non-admins get a localized notice instead.
    pub(super) fn hotline_fallthrough(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;

        if sender.role.is_admin() || dispatchable.channel.hotline_on {
            return Outcome::noop();
        }

        let reply = match sender.role {
            Role::Subscriber => Reply::HotlineDisabledSubscriber,
            _ => Reply::HotlineDisabledNotSubscriber,
        };
        Outcome::error(render_reply(sender.language, &reply))
    }
}
