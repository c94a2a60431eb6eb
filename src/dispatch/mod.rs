//! Command dispatch.
//!
//! [`Dispatcher::execute`] takes one parsed [`Executable`] plus one
//! [`Dispatchable`] snapshot and produces a [`CommandResult`]: a state
//! mutation via the store, a localized response to the sender, and a
//! fan-out list of localized notifications for bystanders.
//!
//! The dispatcher itself performs no I/O and catches nothing: every
//! handler converts its own store failures into a localized response, so
//! no error ever crosses the engine boundary raw.
//!
//! Payload shapes are guaranteed by the upstream parser; a payload that
//! does not match its command dispatches as a no-op.

mod destroy;
mod invites;
mod membership;
mod messaging;
mod queries;
mod settings;

use crate::catalog::{render_reply, Reply};
use crate::config::EngineConfig;
use crate::db::Database;
use crate::model::{
    Command, CommandResult, Dispatchable, Executable, Language, Membership, Notification, Status,
};
use crate::ops::{ChannelDestroyer, TrustResolver};
use std::sync::Arc;

/// A handler's result before the dispatcher echoes command and payload.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    status: Status,
    message: String,
    notifications: Vec<Notification>,
}

impl Outcome {
    fn success(message: String) -> Self {
        Self {
            status: Status::Success,
            message,
            notifications: Vec::new(),
        }
    }

    fn success_with(message: String, notifications: Vec<Notification>) -> Self {
        Self {
            status: Status::Success,
            message,
            notifications,
        }
    }

    fn error(message: String) -> Self {
        Self {
            status: Status::Error,
            message,
            notifications: Vec::new(),
        }
    }

    fn error_with(message: String, notifications: Vec<Notification>) -> Self {
        Self {
            status: Status::Error,
            message,
            notifications,
        }
    }

    fn unauthorized(message: String) -> Self {
        Self {
            status: Status::Unauthorized,
            message,
            notifications: Vec::new(),
        }
    }

    fn noop() -> Self {
        Self {
            status: Status::Noop,
            message: String::new(),
            notifications: Vec::new(),
        }
    }
}

/// The command dispatch and authorization engine.
pub struct Dispatcher {
    db: Database,
    config: EngineConfig,
    trust: Arc<dyn TrustResolver>,
    destroyer: Arc<dyn ChannelDestroyer>,
}

impl Dispatcher {
    pub fn new(
        db: Database,
        config: EngineConfig,
        trust: Arc<dyn TrustResolver>,
        destroyer: Arc<dyn ChannelDestroyer>,
    ) -> Self {
        Self {
            db,
            config,
            trust,
            destroyer,
        }
    }

    /// Execute one command against one channel snapshot.
    pub async fn execute(
        &self,
        executable: Executable,
        dispatchable: Dispatchable,
    ) -> CommandResult {
        if let Some(error) = &executable.error {
            return self.parse_error_result(error, &executable, &dispatchable);
        }

        let language = executable.language;
        let payload = &executable.payload;

        let outcome = match executable.command {
            Command::Accept => self.accept(&dispatchable).await,
            Command::Add => self.add(&dispatchable, payload).await,
            Command::Decline => self.decline(&dispatchable).await,
            Command::Destroy => self.destroy(&dispatchable),
            Command::DestroyConfirm => self.destroy_confirm(&dispatchable).await,
            Command::Help => self.help(&dispatchable),
            Command::HotlineOn => self.set_hotline(&dispatchable, true).await,
            Command::HotlineOff => self.set_hotline(&dispatchable, false).await,
            Command::Info => self.info(&dispatchable),
            Command::Invite => self.invite(&dispatchable, payload, language).await,
            Command::Join => self.join(&dispatchable).await,
            Command::Leave => self.leave(&dispatchable).await,
            Command::None => self.hotline_fallthrough(&dispatchable),
            Command::Private => self.private(&dispatchable, payload),
            Command::Remove => self.remove(&dispatchable, payload).await,
            Command::Rename => self.rename(&dispatchable, payload).await,
            Command::Reply => self.reply(&dispatchable, payload).await,
            Command::SetDescription => self.set_description(&dispatchable, payload).await,
            Command::SetLanguage => self.set_language(&dispatchable, language).await,
            Command::VouchLevel => self.set_vouch_level(&dispatchable, payload).await,
            Command::VouchingOn => {
                self.set_vouch_mode(&dispatchable, crate::model::VouchMode::On).await
            }
            Command::VouchingOff => {
                self.set_vouch_mode(&dispatchable, crate::model::VouchMode::Off).await
            }
            Command::VouchingAdmin => {
                self.set_vouch_mode(&dispatchable, crate::model::VouchMode::Admin).await
            }
        };

        CommandResult {
            command: executable.command,
            payload: executable.payload,
            status: outcome.status,
            message: outcome.message,
            notifications: outcome.notifications,
        }
    }

    /// Surface an upstream parse error. A REPLY-shaped error from a
    /// non-admin is masked as not-authorized so hotline-reply syntax never
    /// leaks to non-admins.
    fn parse_error_result(
        &self,
        error: &str,
        executable: &Executable,
        dispatchable: &Dispatchable,
    ) -> CommandResult {
        let sender = &dispatchable.sender;
        let message = if executable.command == Command::Reply && !sender.role.is_admin() {
            render_reply(sender.language, &Reply::NotAdmin)
        } else {
            error.to_string()
        };

        CommandResult {
            command: executable.command,
            payload: executable.payload.clone(),
            status: Status::Error,
            message,
            notifications: Vec::new(),
        }
    }

    /// Admin guard. Returns the denial outcome for non-admin senders.
    fn deny_non_admin(&self, sender: &Membership) -> Option<Outcome> {
        if sender.role.is_admin() {
            None
        } else {
            Some(Outcome::unauthorized(render_reply(
                sender.language,
                &Reply::NotAdmin,
            )))
        }
    }

    /// Localized storage-failure response.
    fn db_error(&self, language: Language) -> Outcome {
        Outcome::error(render_reply(language, &Reply::DbError))
    }
}
