//! Localized message catalog.
//!
//! A pure lookup table: a message kind plus its arguments renders to a
//! string in a given language. Sender-facing responses are [`Reply`] kinds;
//! bystander fan-out uses [`Notice`] kinds. Handlers never format
//! user-visible text themselves.

mod de;
mod en;
mod es;
mod fr;

use crate::model::{ChannelSummary, Language, PhoneNumber, Role, VouchMode};

/// Name the system presents itself under in public-facing texts.
pub const SYSTEM_NAME: &str = "shoutline";

/// Sender-facing response kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<'a> {
    NotAdmin,
    NotMember,
    DbError,
    AlreadyMember,
    BelowVouchLevel { required: u32, actual: u32 },
    AcceptSuccess { channel: &'a str },
    DeclineSuccess,
    JoinSuccess { channel: &'a str, description: &'a str },
    InviteRequired,
    LeaveSuccess { channel: &'a str },
    AddSuccess { target: &'a PhoneNumber },
    RemoveSuccess { target: &'a PhoneNumber },
    TargetNotMember { target: &'a PhoneNumber },
    InviteSuccess { count: usize },
    InviteDbErrors { failed: &'a [PhoneNumber] },
    RenameSuccess { old: &'a str, new: &'a str },
    DescriptionSuccess { description: &'a str },
    HotlineToggled { on: bool },
    VouchModeChanged { mode: VouchMode },
    VouchLevelSet { level: u32 },
    InvalidVouchLevel { value: i64, max: u32 },
    InvalidHotlineId { id: i64 },
    HotlineReplySent { id: i64, text: &'a str },
    LanguageSet,
    DestroyConfirm,
    DestroySuccess,
    DestroyFailure,
    HotlineDisabledSubscriber,
    HotlineDisabledNotSubscriber,
    HelpAdmin,
    HelpSubscriber,
    HelpPublic,
    Info { summary: &'a ChannelSummary, role: Role },
}

/// Notification kinds fanned out to members other than the sender.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice<'a> {
    WelcomeAdmin { channel: &'a str, added_by: &'a PhoneNumber },
    AdminAdded { new_admin: &'a PhoneNumber },
    ToRemovedAdmin { channel: &'a str },
    ToRemovedSubscriber { channel: &'a str },
    AdminRemoved { removed: &'a PhoneNumber },
    SubscriberRemoved,
    AdminLeft,
    ChannelRenamed { old: &'a str, new: &'a str },
    DescriptionChanged { description: &'a str },
    HotlineToggled { on: bool },
    VouchModeChanged { mode: VouchMode },
    VouchLevelChanged { level: u32 },
    InviteReceived { channel: &'a str },
    VouchedInviteReceived { channel: &'a str, received: u32, required: u32 },
    PrivateMessage { text: &'a str },
    HotlineReplyToMember { text: &'a str },
    HotlineReplyToAdmins { id: i64, text: &'a str },
}

/// Render a sender-facing response in the given language.
pub fn render_reply(language: Language, reply: &Reply<'_>) -> String {
    match language {
        Language::En => en::reply(reply),
        Language::Es => es::reply(reply),
        Language::Fr => fr::reply(reply),
        Language::De => de::reply(reply),
    }
}

/// Render a bystander notification in the given language.
pub fn render_notice(language: Language, notice: &Notice<'_>) -> String {
    match language {
        Language::En => en::notice(notice),
        Language::Es => es::notice(notice),
        Language::Fr => fr::notice(notice),
        Language::De => de::notice(notice),
    }
}
