//! Pure-read handlers: HELP and INFO. Response bodies vary by role.

use super::{Dispatcher, Outcome};
use crate::catalog::{render_reply, Reply};
use crate::model::{Dispatchable, Role};

impl Dispatcher {
    pub(super) fn help(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;
        let reply = match sender.role {
            Role::Admin => Reply::HelpAdmin,
            Role::Subscriber => Reply::HelpSubscriber,
            Role::None => Reply::HelpPublic,
        };
        Outcome::success(render_reply(sender.language, &reply))
    }

    pub(super) fn info(&self, dispatchable: &Dispatchable) -> Outcome {
        let sender = &dispatchable.sender;
        let summary = dispatchable.channel.summary();
        Outcome::success(render_reply(
            sender.language,
            &Reply::Info {
                summary: &summary,
                role: sender.role,
            },
        ))
    }
}
