//! Notification composition.
//!
//! Handlers describe *what* happened as a catalog [`Notice`]; this module
//! decides *who* hears about it and renders each copy in the recipient's
//! own language. All per-recipient language resolution lives here.

use crate::catalog::{render_notice, Notice};
use crate::model::{Channel, Membership, Notification, PhoneNumber};

/// Render one notice for one member, in their stored language.
pub fn to_member(member: &Membership, notice: &Notice<'_>) -> Notification {
    Notification::new(
        member.member_address.clone(),
        render_notice(member.language, notice),
    )
}

/// Notifications for every admin except the excluded addresses (the actor
/// and, where applicable, the target of the command).
pub fn to_bystander_admins(
    channel: &Channel,
    exclude: &[&PhoneNumber],
    notice: &Notice<'_>,
) -> Vec<Notification> {
    channel
        .admins()
        .filter(|m| !exclude.contains(&&m.member_address))
        .map(|m| to_member(m, notice))
        .collect()
}

/// Notifications for every admin, sender included (PRIVATE fan-out).
pub fn to_all_admins(channel: &Channel, notice: &Notice<'_>) -> Vec<Notification> {
    channel.admins().map(|m| to_member(m, notice)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, Role, VouchMode};
    use std::time::Duration;

    fn member(n: &str, role: Role, language: Language) -> Membership {
        Membership {
            channel_address: PhoneNumber::parse("+15550001111").unwrap(),
            member_address: PhoneNumber::parse(n).unwrap(),
            role,
            language,
            created_at: 0,
        }
    }

    fn channel() -> Channel {
        Channel {
            address: PhoneNumber::parse("+15550001111").unwrap(),
            name: "night shift".into(),
            description: String::new(),
            hotline_on: false,
            vouch_mode: VouchMode::Off,
            vouch_level: 1,
            message_expiry: Duration::from_secs(0),
            memberships: vec![
                member("+15550002222", Role::Admin, Language::En),
                member("+15550003333", Role::Admin, Language::Fr),
                member("+15550004444", Role::Subscriber, Language::Es),
            ],
            deauthorizations: vec![],
        }
    }

    #[test]
    fn bystanders_exclude_actor_and_subscribers() {
        let channel = channel();
        let actor = PhoneNumber::parse("+15550002222").unwrap();
        let notifications =
            to_bystander_admins(&channel, &[&actor], &Notice::AdminLeft);

        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].recipient.as_str(), "+15550003333");
    }

    #[test]
    fn each_recipient_gets_their_own_language() {
        let channel = channel();
        let notifications = to_all_admins(&channel, &Notice::AdminLeft);

        assert_eq!(notifications.len(), 2);
        // EN and FR admins get different renderings of the same notice
        assert_ne!(notifications[0].message, notifications[1].message);
    }
}
