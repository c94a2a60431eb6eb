//! Core domain model for broadcast/hotline channels.
//!
//! A channel is a phone-number address with admin and subscriber
//! memberships. Commands arrive pre-parsed as an [`Executable`] together
//! with a [`Dispatchable`] snapshot of the channel and sender; the engine
//! answers with a [`CommandResult`].

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

lazy_static! {
    /// E.164: leading +, then 8-15 digits, no leading zero.
    static ref E164: Regex = Regex::new(r"^\+[1-9]\d{7,14}$").expect("static pattern compiles");
}

/// A phone number in E.164 form, the address of both channels and members.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

/// Error returned when a string is not a valid E.164 phone number.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid phone number: {0}")]
pub struct InvalidPhoneNumber(pub String);

impl PhoneNumber {
    /// Parse and validate an E.164 phone number.
    pub fn parse(raw: &str) -> Result<Self, InvalidPhoneNumber> {
        let trimmed = raw.trim();
        if E164.is_match(trimmed) {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(InvalidPhoneNumber(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PhoneNumber {
    type Err = InvalidPhoneNumber;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Languages with a full message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
    De,
}

impl Language {
    /// Two-letter code as stored in the database.
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::De => "DE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "EN" => Some(Self::En),
            "ES" => Some(Self::Es),
            "FR" => Some(Self::Fr),
            "DE" => Some(Self::De),
            _ => None,
        }
    }
}

/// Membership role on a channel.
///
/// `None` is the synthesized "no record" sentinel for senders without a
/// membership; it is never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Subscriber,
    None,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Whether the role denotes an actual membership record.
    pub fn is_member(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Database tag. Only `Admin` and `Subscriber` are ever stored.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Subscriber => "SUBSCRIBER",
            Self::None => "NONE",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ADMIN" => Some(Self::Admin),
            "SUBSCRIBER" => Some(Self::Subscriber),
            _ => None,
        }
    }
}

/// Admission policy for a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VouchMode {
    /// Anyone may JOIN directly.
    #[default]
    Off,
    /// Joining requires `vouch_level` invites; any member may invite.
    On,
    /// Joining requires `vouch_level` invites; only admins may invite.
    Admin,
}

impl VouchMode {
    pub fn is_on(&self) -> bool {
        !matches!(self, Self::Off)
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
            Self::Admin => "ADMIN",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "OFF" => Some(Self::Off),
            "ON" => Some(Self::On),
            "ADMIN" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// A membership record binding a member address to a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership {
    pub channel_address: PhoneNumber,
    pub member_address: PhoneNumber,
    pub role: Role,
    pub language: Language,
    pub created_at: i64,
}

impl Membership {
    /// Synthesize the non-member sentinel for a sender with no record.
    pub fn none(channel_address: PhoneNumber, member_address: PhoneNumber, language: Language) -> Self {
        Self {
            channel_address,
            member_address,
            role: Role::None,
            language,
            created_at: 0,
        }
    }
}

/// A pending vouch credential. Unique per (channel, inviter, invitee);
/// an invitee's invite count is the number of distinct inviters.
#[derive(Debug, Clone, PartialEq)]
pub struct Invite {
    pub channel_address: PhoneNumber,
    pub inviter_address: PhoneNumber,
    pub invitee_address: PhoneNumber,
    pub created_at: i64,
}

/// A member evicted after a key/fingerprint change, retained until
/// an admin re-trusts them via ADD.
#[derive(Debug, Clone, PartialEq)]
pub struct Deauthorization {
    pub channel_address: PhoneNumber,
    pub member_address: PhoneNumber,
    pub fingerprint: String,
    pub created_at: i64,
}

/// Ephemeral mapping from an opaque per-channel id to the member who sent
/// a hotline message, so admin replies can be routed back anonymously.
#[derive(Debug, Clone, PartialEq)]
pub struct HotlineMessage {
    pub channel_address: PhoneNumber,
    pub id: i64,
    pub member_address: PhoneNumber,
    pub created_at: i64,
}

/// A deep-loaded channel snapshot: settings plus memberships and
/// deauthorizations. Constructed by the store, mutated only through it.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub address: PhoneNumber,
    pub name: String,
    pub description: String,
    pub hotline_on: bool,
    pub vouch_mode: VouchMode,
    pub vouch_level: u32,
    pub message_expiry: Duration,
    pub memberships: Vec<Membership>,
    pub deauthorizations: Vec<Deauthorization>,
}

impl Channel {
    /// All admin memberships.
    pub fn admins(&self) -> impl Iterator<Item = &Membership> {
        self.memberships.iter().filter(|m| m.role.is_admin())
    }

    pub fn admin_count(&self) -> usize {
        self.admins().count()
    }

    pub fn subscriber_count(&self) -> usize {
        self.memberships
            .iter()
            .filter(|m| m.role == Role::Subscriber)
            .count()
    }

    /// The membership record for an address, if any.
    pub fn membership_of(&self, address: &PhoneNumber) -> Option<&Membership> {
        self.memberships
            .iter()
            .find(|m| &m.member_address == address)
    }

    /// The open deauthorization for an address, if any.
    pub fn deauthorization_of(&self, address: &PhoneNumber) -> Option<&Deauthorization> {
        self.deauthorizations
            .iter()
            .find(|d| &d.member_address == address)
    }

    /// Flat view of the channel for INFO rendering.
    pub fn summary(&self) -> ChannelSummary {
        ChannelSummary {
            address: self.address.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            admin_count: self.admin_count(),
            subscriber_count: self.subscriber_count(),
            hotline_on: self.hotline_on,
            vouch_mode: self.vouch_mode,
            vouch_level: self.vouch_level,
            message_expiry: self.message_expiry,
        }
    }
}

/// Denormalized channel facts consumed by the INFO catalog templates.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSummary {
    pub address: PhoneNumber,
    pub name: String,
    pub description: String,
    pub admin_count: usize,
    pub subscriber_count: usize,
    pub hotline_on: bool,
    pub vouch_mode: VouchMode,
    pub vouch_level: u32,
    pub message_expiry: Duration,
}

/// The raw inbound transport message accompanying a dispatch, as handed
/// over by ingestion. PRIVATE forwards its attachments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InboundMessage {
    pub body: String,
    pub attachments: Vec<String>,
}

/// Channel/sender context for one dispatch. Assembled by the caller from a
/// deep channel load and the resolved (possibly sentinel) sender membership.
#[derive(Debug, Clone)]
pub struct Dispatchable {
    pub channel: Channel,
    pub sender: Membership,
    pub message: InboundMessage,
}

/// Every command the engine understands. Closed set; dispatch is an
/// exhaustive match, with `None` covering unmatched input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Accept,
    Add,
    Decline,
    Destroy,
    DestroyConfirm,
    Help,
    HotlineOn,
    HotlineOff,
    Info,
    Invite,
    Join,
    Leave,
    None,
    Private,
    Remove,
    Rename,
    Reply,
    SetDescription,
    SetLanguage,
    VouchLevel,
    VouchingOn,
    VouchingOff,
    VouchingAdmin,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Self::Accept => "ACCEPT",
            Self::Add => "ADD",
            Self::Decline => "DECLINE",
            Self::Destroy => "DESTROY",
            Self::DestroyConfirm => "DESTROY_CONFIRM",
            Self::Help => "HELP",
            Self::HotlineOn => "HOTLINE_ON",
            Self::HotlineOff => "HOTLINE_OFF",
            Self::Info => "INFO",
            Self::Invite => "INVITE",
            Self::Join => "JOIN",
            Self::Leave => "LEAVE",
            Self::None => "NONE",
            Self::Private => "PRIVATE",
            Self::Remove => "REMOVE",
            Self::Rename => "RENAME",
            Self::Reply => "REPLY",
            Self::SetDescription => "DESCRIPTION",
            Self::SetLanguage => "LANGUAGE",
            Self::VouchLevel => "VOUCH_LEVEL",
            Self::VouchingOn => "VOUCHING_ON",
            Self::VouchingOff => "VOUCHING_OFF",
            Self::VouchingAdmin => "VOUCHING_ADMIN",
        };
        f.write_str(keyword)
    }
}

/// The parser's structured output, shaped per command.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    None,
    /// Free text (RENAME, DESCRIPTION, PRIVATE, hotline traffic).
    Text(String),
    /// Target addresses (ADD, REMOVE take one; INVITE takes many).
    Addresses(Vec<PhoneNumber>),
    /// Admin reply to a hotline message by id.
    HotlineReply { message_id: i64, text: String },
    /// Numeric vouch level, range-checked by the handler.
    Level(i64),
}

impl Payload {
    /// First address of an address payload, for single-target commands.
    pub fn first_address(&self) -> Option<&PhoneNumber> {
        match self {
            Self::Addresses(addresses) => addresses.first(),
            _ => None,
        }
    }
}

/// A parsed command ready for dispatch. `error` is set when upstream
/// parsing failed; dispatch then short-circuits without running a handler.
#[derive(Debug, Clone)]
pub struct Executable {
    pub command: Command,
    pub payload: Payload,
    pub language: Language,
    pub error: Option<String>,
}

impl Executable {
    pub fn new(command: Command, payload: Payload, language: Language) -> Self {
        Self {
            command,
            payload,
            language,
            error: None,
        }
    }
}

/// Outcome class of a dispatched command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Unauthorized,
    Noop,
}

/// One localized message bound for one recipient. Entries for a single
/// channel must be transmitted in order by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub recipient: PhoneNumber,
    pub message: String,
    pub attachments: Vec<String>,
}

impl Notification {
    pub fn new(recipient: PhoneNumber, message: String) -> Self {
        Self {
            recipient,
            message,
            attachments: Vec::new(),
        }
    }
}

/// What one `execute()` call produced: the echoed command and payload, the
/// sender-facing response, and the bystander fan-out.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub command: Command,
    pub payload: Payload,
    pub status: Status,
    pub message: String,
    pub notifications: Vec<Notification>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_e164_numbers() {
        assert!(PhoneNumber::parse("+12223334444").is_ok());
        assert!(PhoneNumber::parse("  +4915112345678 ").is_ok());
        assert_eq!(
            PhoneNumber::parse("+12223334444").unwrap().as_str(),
            "+12223334444"
        );
    }

    #[test]
    fn rejects_malformed_numbers() {
        for raw in ["12223334444", "+0123456789", "+1 222 333", "", "+12ab3334444"] {
            assert!(PhoneNumber::parse(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn language_codes_round_trip() {
        for lang in [Language::En, Language::Es, Language::Fr, Language::De] {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("tlh"), None);
    }

    #[test]
    fn role_sentinel_is_not_a_member() {
        assert!(Role::Admin.is_member());
        assert!(Role::Subscriber.is_member());
        assert!(!Role::None.is_member());
        assert_eq!(Role::from_code("NONE"), None);
    }

    #[test]
    fn channel_counts_by_role() {
        let channel = test_channel();
        assert_eq!(channel.admin_count(), 2);
        assert_eq!(channel.subscriber_count(), 1);
    }

    fn test_channel() -> Channel {
        let address = PhoneNumber::parse("+15550001111").unwrap();
        let member = |n: &str, role| Membership {
            channel_address: address.clone(),
            member_address: PhoneNumber::parse(n).unwrap(),
            role,
            language: Language::En,
            created_at: 0,
        };
        Channel {
            address: address.clone(),
            name: "test".into(),
            description: String::new(),
            hotline_on: false,
            vouch_mode: VouchMode::Off,
            vouch_level: 1,
            message_expiry: Duration::from_secs(60 * 60 * 24 * 7),
            memberships: vec![
                member("+15550002222", Role::Admin),
                member("+15550003333", Role::Admin),
                member("+15550004444", Role::Subscriber),
            ],
            deauthorizations: vec![],
        }
    }
}
