//! English message set.

use super::{Notice, Reply, SYSTEM_NAME};
use crate::model::{ChannelSummary, Role, VouchMode};
use std::time::Duration;

pub(super) fn reply(reply: &Reply<'_>) -> String {
    match reply {
        Reply::NotAdmin => "Sorry, only admins can issue that command.".to_string(),
        Reply::NotMember => "Sorry, you are not a member of this channel.".to_string(),
        Reply::DbError => "Oops! Something went wrong on our end. Please try again.".to_string(),
        Reply::AlreadyMember => "Whoops! You are already a member of this channel.".to_string(),
        Reply::BelowVouchLevel { required, actual } => format!(
            "Sorry, this channel requires {required} invite(s) to join. You have {actual}."
        ),
        Reply::AcceptSuccess { channel } => {
            format!("Welcome! You are now subscribed to \"{channel}\".")
        }
        Reply::DeclineSuccess => {
            "Invitation declined. All information about it has been deleted.".to_string()
        }
        Reply::JoinSuccess { channel, description } => {
            let mut text = format!("Welcome! You are now subscribed to \"{channel}\".");
            if !description.is_empty() {
                text.push_str("\n\n");
                text.push_str(description);
            }
            text
        }
        Reply::InviteRequired => {
            "Sorry, you need an invite to subscribe to this channel. Ask a member for one!"
                .to_string()
        }
        Reply::LeaveSuccess { channel } => {
            format!("You have left \"{channel}\". Goodbye!")
        }
        Reply::AddSuccess { target } => format!("{target} was added as an admin."),
        Reply::RemoveSuccess { target } => format!("{target} was removed."),
        Reply::TargetNotMember { target } => {
            format!("Whoops! {target} is not a member of this channel.")
        }
        Reply::InviteSuccess { count } => {
            if *count == 1 {
                "Issued 1 invite.".to_string()
            } else {
                format!("Issued {count} invites.")
            }
        }
        Reply::InviteDbErrors { failed } => format!(
            "Oops! Failed to issue invites for: {}. Please try them again.",
            join_numbers(failed)
        ),
        Reply::RenameSuccess { old, new } => {
            format!("Channel renamed from \"{old}\" to \"{new}\".")
        }
        Reply::DescriptionSuccess { description } => {
            format!("Channel description changed to \"{description}\".")
        }
        Reply::HotlineToggled { on } => {
            format!("Hotline turned {}.", on_off(*on))
        }
        Reply::VouchModeChanged { mode } => {
            format!("Vouching is now {}.", vouch_mode_word(*mode))
        }
        Reply::VouchLevelSet { level } => format!(
            "Vouch level set to {level}. {level} invite(s) are now required to join this channel."
        ),
        Reply::InvalidVouchLevel { value, max } => format!(
            "Whoops! \"{value}\" is not a valid vouch level. Please use a number between 1 and {max}."
        ),
        Reply::InvalidHotlineId { id } => format!(
            "Whoops! Hotline message #{id} could not be found. It may have expired or never existed."
        ),
        Reply::HotlineReplySent { id, text } => format!("[REPLY TO HOTLINE #{id}]\n{text}"),
        Reply::LanguageSet => "You will now receive messages in English!".to_string(),
        Reply::DestroyConfirm => {
            "Are you sure? This will permanently destroy the channel and all associated records. \
             To proceed, send: DESTROY CONFIRM"
                .to_string()
        }
        Reply::DestroySuccess => {
            "The channel and all associated records have been permanently destroyed.".to_string()
        }
        Reply::DestroyFailure => {
            "Oops! Something went wrong destroying the channel. Please try again.".to_string()
        }
        Reply::HotlineDisabledSubscriber => {
            "Sorry, the hotline is disabled on this channel. Send HELP to list valid commands."
                .to_string()
        }
        Reply::HotlineDisabledNotSubscriber => {
            "Sorry, the hotline is disabled on this channel. Send HELP to list valid commands \
             or JOIN to subscribe."
                .to_string()
        }
        Reply::HelpAdmin => help_admin(),
        Reply::HelpSubscriber => help_subscriber(),
        Reply::HelpPublic => help_public(),
        Reply::Info { summary, role } => info(summary, *role),
    }
}

pub(super) fn notice(notice: &Notice<'_>) -> String {
    match notice {
        Notice::WelcomeAdmin { channel, added_by } => format!(
            "You were just made an admin of \"{channel}\" by {added_by}. \
             Send HELP to list the commands available to you."
        ),
        Notice::AdminAdded { new_admin } => format!("New admin {new_admin} was just added."),
        Notice::ToRemovedAdmin { channel } => {
            format!("You were just removed as an admin from \"{channel}\".")
        }
        Notice::ToRemovedSubscriber { channel } => {
            format!("You were just removed from \"{channel}\".")
        }
        Notice::AdminRemoved { removed } => format!("Admin {removed} was removed."),
        Notice::SubscriberRemoved => "A subscriber was just removed.".to_string(),
        Notice::AdminLeft => "An admin just left the channel.".to_string(),
        Notice::ChannelRenamed { old, new } => {
            format!("The channel was renamed from \"{old}\" to \"{new}\".")
        }
        Notice::DescriptionChanged { description } => {
            format!("The channel description is now: \"{description}\"")
        }
        Notice::HotlineToggled { on } => {
            format!("The hotline was just turned {}.", on_off(*on))
        }
        Notice::VouchModeChanged { mode } => {
            format!("Vouching is now {}.", vouch_mode_word(*mode))
        }
        Notice::VouchLevelChanged { level } => {
            format!("The vouch level is now {level}; {level} invite(s) are required to join.")
        }
        Notice::InviteReceived { channel } => format!(
            "Hello! You have been invited to join the \"{channel}\" channel. \
             Reply with ACCEPT to subscribe or DECLINE to refuse."
        ),
        Notice::VouchedInviteReceived { channel, received, required } => {
            let mut text = format!(
                "Hello! You have received {received}/{required} of the invites required \
                 to join the \"{channel}\" channel."
            );
            if received >= required {
                text.push_str(" Reply with ACCEPT to subscribe or DECLINE to refuse.");
            }
            text
        }
        Notice::PrivateMessage { text } => format!("[PRIVATE]\n{text}"),
        Notice::HotlineReplyToMember { text } => format!("[PRIVATE REPLY FROM ADMINS]\n{text}"),
        Notice::HotlineReplyToAdmins { id, text } => format!("[REPLY TO HOTLINE #{id}]\n{text}"),
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

fn vouch_mode_word(mode: VouchMode) -> &'static str {
    match mode {
        VouchMode::Off => "off",
        VouchMode::On => "on",
        VouchMode::Admin => "on (admins only)",
    }
}

fn expiry_hours(expiry: Duration) -> u64 {
    expiry.as_secs() / 3600
}

fn join_numbers(numbers: &[crate::model::PhoneNumber]) -> String {
    numbers
        .iter()
        .map(|n| n.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn info(summary: &ChannelSummary, role: Role) -> String {
    let mut lines = vec![
        "---------------------------".to_string(),
        "CHANNEL INFO".to_string(),
        "---------------------------".to_string(),
        String::new(),
        format!("name: {}", summary.name),
        format!("phone number: {}", summary.address),
    ];
    match role {
        Role::Admin => {
            lines.push(format!("admins: {}", summary.admin_count));
            lines.push(format!("subscribers: {}", summary.subscriber_count));
            lines.push(format!("hotline: {}", on_off(summary.hotline_on)));
            lines.push(format!("vouching: {}", vouch_mode_word(summary.vouch_mode)));
            lines.push(format!("vouch level: {}", summary.vouch_level));
            lines.push(format!(
                "message expiry: {}h",
                expiry_hours(summary.message_expiry)
            ));
        }
        Role::Subscriber => {
            lines.push(format!("subscribers: {}", summary.subscriber_count));
            lines.push(format!("hotline: {}", on_off(summary.hotline_on)));
            lines.push(format!("vouching: {}", vouch_mode_word(summary.vouch_mode)));
        }
        Role::None => {}
    }
    if !summary.description.is_empty() {
        lines.push(format!("description: {}", summary.description));
    }
    if role == Role::None {
        lines.push(String::new());
        lines.push(format!(
            "This is a {SYSTEM_NAME} channel. Send JOIN to subscribe or HELP to list commands."
        ));
    }
    lines.join("\n")
}

fn help_admin() -> String {
    [
        "----------------------------",
        "COMMANDS",
        "----------------------------",
        "",
        "HELP",
        "-> lists commands",
        "",
        "INFO",
        "-> shows stats and explains how the channel works",
        "",
        "RENAME new name",
        "-> renames the channel to \"new name\"",
        "",
        "DESCRIPTION description of channel",
        "-> adds or updates the public description of the channel",
        "",
        "INVITE +15555555555, +14444444444",
        "-> invites people to subscribe to the channel",
        "",
        "ADD +15555555555",
        "-> adds +15555555555 as an admin of the channel",
        "",
        "REMOVE +15555555555",
        "-> removes +15555555555 from the channel",
        "",
        "HOTLINE ON / OFF",
        "-> enables or disables anonymous messages to admins",
        "",
        "VOUCHING ON / OFF / ADMIN",
        "-> controls whether an invite is required to subscribe",
        "",
        "VOUCH LEVEL level",
        "-> changes the number of invites needed to join the channel",
        "",
        "REPLY #1312 hello",
        "-> sends a private reply to [HOTLINE #1312]",
        "",
        "PRIVATE hello admins",
        "-> sends a private message to all admins",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> switches your language",
        "",
        "LEAVE",
        "-> removes you from this channel",
        "",
        "DESTROY",
        "-> permanently destroys this channel and all associated records",
    ]
    .join("\n")
}

fn help_subscriber() -> String {
    [
        "----------------------------",
        "COMMANDS",
        "----------------------------",
        "",
        "HELP",
        "-> lists commands",
        "",
        "INFO",
        "-> explains how the channel works",
        "",
        "INVITE +15555555555",
        "-> invites +15555555555 to subscribe to the channel",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> switches your language",
        "",
        "LEAVE",
        "-> unsubscribes you from this channel",
    ]
    .join("\n")
}

fn help_public() -> String {
    [
        "----------------------------",
        "COMMANDS",
        "----------------------------",
        "",
        "HELP",
        "-> lists commands",
        "",
        "INFO",
        "-> explains how the channel works",
        "",
        "JOIN",
        "-> subscribes you to announcements",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> switches your language",
    ]
    .join("\n")
}
