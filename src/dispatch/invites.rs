//! Invite/vouch handlers: INVITE, ACCEPT, DECLINE.

use super::{Dispatcher, Outcome};
use crate::catalog::{render_notice, render_reply, Notice, Reply};
use crate::model::{Dispatchable, Language, Notification, Payload, PhoneNumber};
use std::collections::HashSet;
use tracing::{info, warn};

impl Dispatcher {
    /// INVITE: issue vouch credentials to a list of invitees.
    ///
    /// An invitee who is already a member is counted as a silent success -
    /// no distinct response text, no invite row, no notification. The
    /// inviter cannot distinguish "already subscribed" from "newly
    /// invited", so probing numbers through INVITE learns nothing.
    ///
    /// Storage failures are per-invitee: a failing sub-invite never cancels
    /// its siblings. The aggregate is an error listing only the failed
    /// addresses, while notifications for the successes are still returned.
    pub(super) async fn invite(
        &self,
        dispatchable: &Dispatchable,
        payload: &Payload,
        invite_language: Language,
    ) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if !sender.role.is_member() {
            return Outcome::unauthorized(render_reply(sender.language, &Reply::NotMember));
        }
        if channel.vouch_mode == crate::model::VouchMode::Admin
            && let Some(denied) = self.deny_non_admin(sender)
        {
            return denied;
        }
        let Payload::Addresses(addresses) = payload else {
            return Outcome::noop();
        };

        let mut seen = HashSet::new();
        let invitees: Vec<&PhoneNumber> = addresses.iter().filter(|a| seen.insert(*a)).collect();

        let mut notifications = Vec::new();
        let mut issued = 0usize;
        let mut failed: Vec<PhoneNumber> = Vec::new();

        for invitee in invitees {
            match self
                .db
                .memberships()
                .is_member(&channel.address, invitee)
                .await
            {
                Ok(true) => {
                    // Indistinguishable from a fresh invite in the response.
                    issued += 1;
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    warn!(channel = %channel.address, invitee = %invitee, error = ?e, "Failed to check membership for invite");
                    failed.push(invitee.clone());
                    continue;
                }
            }

            if let Err(e) = self
                .db
                .invites()
                .issue(&channel.address, &sender.member_address, invitee)
                .await
            {
                warn!(channel = %channel.address, invitee = %invitee, error = ?e, "Failed to issue invite");
                failed.push(invitee.clone());
                continue;
            }

            let received = match self.db.invites().count(&channel.address, invitee).await {
                Ok(count) => count,
                Err(e) => {
                    warn!(channel = %channel.address, invitee = %invitee, error = ?e, "Failed to count invites");
                    failed.push(invitee.clone());
                    continue;
                }
            };

            issued += 1;

            // Progress-counted variant only when more than one vouch is
            // needed; the accept prompt appears once the threshold is met.
            let notice = if channel.vouch_mode.is_on() && channel.vouch_level > 1 {
                Notice::VouchedInviteReceived {
                    channel: &channel.name,
                    received,
                    required: channel.vouch_level,
                }
            } else {
                Notice::InviteReceived {
                    channel: &channel.name,
                }
            };
            notifications.push(Notification::new(
                invitee.clone(),
                render_notice(invite_language, &notice),
            ));
        }

        info!(channel = %channel.address, by = %sender.member_address, issued, failed = failed.len(), "Invites processed");

        if failed.is_empty() {
            Outcome::success_with(
                render_reply(sender.language, &Reply::InviteSuccess { count: issued }),
                notifications,
            )
        } else {
            Outcome::error_with(
                render_reply(sender.language, &Reply::InviteDbErrors { failed: &failed }),
                notifications,
            )
        }
    }

    /// ACCEPT: redeem pending invites and subscribe.
    pub(super) async fn accept(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if sender.role.is_member() {
            return Outcome::error(render_reply(sender.language, &Reply::AlreadyMember));
        }

        if channel.vouch_mode.is_on() {
            let received = match self
                .db
                .invites()
                .count(&channel.address, &sender.member_address)
                .await
            {
                Ok(count) => count,
                Err(e) => {
                    warn!(channel = %channel.address, member = %sender.member_address, error = ?e, "Failed to count invites");
                    return self.db_error(sender.language);
                }
            };

            if received < channel.vouch_level {
                return Outcome::error(render_reply(
                    sender.language,
                    &Reply::BelowVouchLevel {
                        required: channel.vouch_level,
                        actual: received,
                    },
                ));
            }
        }

        // Promotion and invite deletion are one transaction: either the
        // sender ends up subscribed with no pending invites, or nothing
        // changed.
        if let Err(e) = self
            .db
            .invites()
            .accept(&channel.address, &sender.member_address, sender.language)
            .await
        {
            warn!(channel = %channel.address, member = %sender.member_address, error = ?e, "Failed to accept invite");
            return self.db_error(sender.language);
        }

        info!(channel = %channel.address, member = %sender.member_address, "Invite accepted");

        Outcome::success(render_reply(
            sender.language,
            &Reply::AcceptSuccess {
                channel: &channel.name,
            },
        ))
    }

    /// DECLINE: destroy pending invites for the sender.
    pub(super) async fn decline(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Err(e) = self
            .db
            .invites()
            .decline(&channel.address, &sender.member_address)
            .await
        {
            warn!(channel = %channel.address, member = %sender.member_address, error = ?e, "Failed to decline invite");
            return self.db_error(sender.language);
        }

        Outcome::success(render_reply(sender.language, &Reply::DeclineSuccess))
    }
}
