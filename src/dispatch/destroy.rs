//! Two-phase channel destruction: DESTROY prompts, DESTROY_CONFIRM acts.

use super::{Dispatcher, Outcome};
use crate::catalog::{render_reply, Reply};
use crate::model::Dispatchable;
use tracing::{info, warn};

impl Dispatcher {
    /// DESTROY: confirmation prompt only, no mutation.
    pub(super) fn destroy(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }

        Outcome::success(render_reply(sender.language, &Reply::DestroyConfirm))
    }

    /// DESTROY_CONFIRM: hand off to the external destruction operation and
    /// map its result.
    pub(super) async fn destroy_confirm(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;
        let channel = &dispatchable.channel;

        if let Some(denied) = self.deny_non_admin(sender) {
            return denied;
        }

        match self
            .destroyer
            .destroy(&channel.address, &sender.member_address)
            .await
        {
            Ok(()) => {
                info!(channel = %channel.address, by = %sender.member_address, "Channel destroyed");
                Outcome::success(render_reply(sender.language, &Reply::DestroySuccess))
            }
            Err(e) => {
                warn!(channel = %channel.address, error = %e, "Channel destruction failed");
                Outcome::error(render_reply(sender.language, &Reply::DestroyFailure))
            }
        }
    }
}
