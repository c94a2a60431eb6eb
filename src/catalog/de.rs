//! German message set.

use super::{Notice, Reply, SYSTEM_NAME};
use crate::model::{ChannelSummary, Role, VouchMode};
use std::time::Duration;

pub(super) fn reply(reply: &Reply<'_>) -> String {
    match reply {
        Reply::NotAdmin => {
            "Entschuldigung, nur Admins können diesen Befehl verwenden.".to_string()
        }
        Reply::NotMember => "Entschuldigung, du bist kein Mitglied dieses Kanals.".to_string(),
        Reply::DbError => {
            "Hoppla! Bei uns ist etwas schiefgelaufen. Bitte versuche es erneut.".to_string()
        }
        Reply::AlreadyMember => "Achtung! Du bist bereits Mitglied dieses Kanals.".to_string(),
        Reply::BelowVouchLevel { required, actual } => format!(
            "Entschuldigung, für diesen Kanal sind {required} Einladung(en) zum Beitritt \
             erforderlich. Du hast {actual}."
        ),
        Reply::AcceptSuccess { channel } => {
            format!("Willkommen! Du hast \"{channel}\" jetzt abonniert.")
        }
        Reply::DeclineSuccess => {
            "Einladung abgelehnt. Alle Informationen dazu wurden gelöscht.".to_string()
        }
        Reply::JoinSuccess { channel, description } => {
            let mut text = format!("Willkommen! Du hast \"{channel}\" jetzt abonniert.");
            if !description.is_empty() {
                text.push_str("\n\n");
                text.push_str(description);
            }
            text
        }
        Reply::InviteRequired => {
            "Entschuldigung, du brauchst eine Einladung, um diesen Kanal zu abonnieren. \
             Bitte ein Mitglied um eine!"
                .to_string()
        }
        Reply::LeaveSuccess { channel } => {
            format!("Du hast \"{channel}\" verlassen. Auf Wiedersehen!")
        }
        Reply::AddSuccess { target } => format!("{target} wurde als Admin hinzugefügt."),
        Reply::RemoveSuccess { target } => format!("{target} wurde entfernt."),
        Reply::TargetNotMember { target } => {
            format!("Achtung! {target} ist kein Mitglied dieses Kanals.")
        }
        Reply::InviteSuccess { count } => {
            if *count == 1 {
                "1 Einladung verschickt.".to_string()
            } else {
                format!("{count} Einladungen verschickt.")
            }
        }
        Reply::InviteDbErrors { failed } => format!(
            "Hoppla! Einladungen konnten nicht verschickt werden an: {}. \
             Bitte versuche es erneut.",
            join_numbers(failed)
        ),
        Reply::RenameSuccess { old, new } => {
            format!("Der Kanal wurde von \"{old}\" in \"{new}\" umbenannt.")
        }
        Reply::DescriptionSuccess { description } => {
            format!("Die Kanalbeschreibung lautet jetzt \"{description}\".")
        }
        Reply::HotlineToggled { on } => {
            format!("Hotline {}.", if *on { "eingeschaltet" } else { "ausgeschaltet" })
        }
        Reply::VouchModeChanged { mode } => {
            format!("Das Bürgen ist jetzt {}.", vouch_mode_word(*mode))
        }
        Reply::VouchLevelSet { level } => format!(
            "Bürgschaftsstufe auf {level} gesetzt. Es sind nun {level} Einladung(en) \
             für den Beitritt erforderlich."
        ),
        Reply::InvalidVouchLevel { value, max } => format!(
            "Achtung! \"{value}\" ist keine gültige Bürgschaftsstufe. \
             Bitte verwende eine Zahl zwischen 1 und {max}."
        ),
        Reply::InvalidHotlineId { id } => format!(
            "Achtung! Hotline-Nachricht #{id} wurde nicht gefunden. Sie ist möglicherweise \
             abgelaufen oder hat nie existiert."
        ),
        Reply::HotlineReplySent { id, text } => {
            format!("[ANTWORT AN HOTLINE #{id}]\n{text}")
        }
        Reply::LanguageSet => "Du erhältst Nachrichten jetzt auf Deutsch!".to_string(),
        Reply::DestroyConfirm => {
            "Bist du sicher? Damit werden der Kanal und alle zugehörigen Daten dauerhaft \
             zerstört. Um fortzufahren, sende: DESTROY CONFIRM"
                .to_string()
        }
        Reply::DestroySuccess => {
            "Der Kanal und alle zugehörigen Daten wurden dauerhaft zerstört.".to_string()
        }
        Reply::DestroyFailure => {
            "Hoppla! Beim Zerstören des Kanals ist etwas schiefgelaufen. \
             Bitte versuche es erneut."
                .to_string()
        }
        Reply::HotlineDisabledSubscriber => {
            "Entschuldigung, die Hotline ist auf diesem Kanal deaktiviert. \
             Sende HELP für eine Liste gültiger Befehle."
                .to_string()
        }
        Reply::HotlineDisabledNotSubscriber => {
            "Entschuldigung, die Hotline ist auf diesem Kanal deaktiviert. \
             Sende HELP für eine Liste gültiger Befehle oder JOIN zum Abonnieren."
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
            "{added_by} hat dich gerade zum Admin von \"{channel}\" gemacht. \
             Sende HELP für eine Liste der verfügbaren Befehle."
        ),
        Notice::AdminAdded { new_admin } => {
            format!("{new_admin} wurde gerade als Admin hinzugefügt.")
        }
        Notice::ToRemovedAdmin { channel } => {
            format!("Du wurdest gerade als Admin von \"{channel}\" entfernt.")
        }
        Notice::ToRemovedSubscriber { channel } => {
            format!("Du wurdest gerade von \"{channel}\" entfernt.")
        }
        Notice::AdminRemoved { removed } => format!("Admin {removed} wurde entfernt."),
        Notice::SubscriberRemoved => "Ein Abonnent wurde gerade entfernt.".to_string(),
        Notice::AdminLeft => "Ein Admin hat gerade den Kanal verlassen.".to_string(),
        Notice::ChannelRenamed { old, new } => {
            format!("Der Kanal wurde von \"{old}\" in \"{new}\" umbenannt.")
        }
        Notice::DescriptionChanged { description } => {
            format!("Die Kanalbeschreibung lautet jetzt: \"{description}\"")
        }
        Notice::HotlineToggled { on } => format!(
            "Die Hotline wurde gerade {}.",
            if *on { "eingeschaltet" } else { "ausgeschaltet" }
        ),
        Notice::VouchModeChanged { mode } => {
            format!("Das Bürgen ist jetzt {}.", vouch_mode_word(*mode))
        }
        Notice::VouchLevelChanged { level } => format!(
            "Die Bürgschaftsstufe ist jetzt {level}; {level} Einladung(en) sind für den \
             Beitritt erforderlich."
        ),
        Notice::InviteReceived { channel } => format!(
            "Hallo! Du wurdest eingeladen, dem Kanal \"{channel}\" beizutreten. \
             Antworte mit ACCEPT zum Abonnieren oder DECLINE zum Ablehnen."
        ),
        Notice::VouchedInviteReceived { channel, received, required } => {
            let mut text = format!(
                "Hallo! Du hast {received}/{required} der Einladungen erhalten, die für den \
                 Beitritt zum Kanal \"{channel}\" erforderlich sind."
            );
            if received >= required {
                text.push_str(" Antworte mit ACCEPT zum Abonnieren oder DECLINE zum Ablehnen.");
            }
            text
        }
        Notice::PrivateMessage { text } => format!("[PRIVAT]\n{text}"),
        Notice::HotlineReplyToMember { text } => {
            format!("[PRIVATE ANTWORT DER ADMINS]\n{text}")
        }
        Notice::HotlineReplyToAdmins { id, text } => {
            format!("[ANTWORT AN HOTLINE #{id}]\n{text}")
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "eingeschaltet" } else { "ausgeschaltet" }
}

fn vouch_mode_word(mode: VouchMode) -> &'static str {
    match mode {
        VouchMode::Off => "ausgeschaltet",
        VouchMode::On => "eingeschaltet",
        VouchMode::Admin => "eingeschaltet (nur Admins)",
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
        "KANAL-INFO".to_string(),
        "---------------------------".to_string(),
        String::new(),
        format!("Name: {}", summary.name),
        format!("Telefonnummer: {}", summary.address),
    ];
    match role {
        Role::Admin => {
            lines.push(format!("Admins: {}", summary.admin_count));
            lines.push(format!("Abonnenten: {}", summary.subscriber_count));
            lines.push(format!("Hotline: {}", on_off(summary.hotline_on)));
            lines.push(format!("Bürgen: {}", vouch_mode_word(summary.vouch_mode)));
            lines.push(format!("Bürgschaftsstufe: {}", summary.vouch_level));
            lines.push(format!(
                "Nachrichtenablauf: {}h",
                expiry_hours(summary.message_expiry)
            ));
        }
        Role::Subscriber => {
            lines.push(format!("Abonnenten: {}", summary.subscriber_count));
            lines.push(format!("Hotline: {}", on_off(summary.hotline_on)));
            lines.push(format!("Bürgen: {}", vouch_mode_word(summary.vouch_mode)));
        }
        Role::None => {}
    }
    if !summary.description.is_empty() {
        lines.push(format!("Beschreibung: {}", summary.description));
    }
    if role == Role::None {
        lines.push(String::new());
        lines.push(format!(
            "Dies ist ein {SYSTEM_NAME}-Kanal. Sende JOIN zum Abonnieren oder HELP für \
             eine Liste der Befehle."
        ));
    }
    lines.join("\n")
}

fn help_admin() -> String {
    [
        "----------------------------",
        "BEFEHLE",
        "----------------------------",
        "",
        "HELP",
        "-> listet die Befehle auf",
        "",
        "INFO",
        "-> zeigt Statistiken und erklärt, wie der Kanal funktioniert",
        "",
        "RENAME neuer Name",
        "-> benennt den Kanal in \"neuer Name\" um",
        "",
        "DESCRIPTION Beschreibung des Kanals",
        "-> fügt die öffentliche Kanalbeschreibung hinzu oder aktualisiert sie",
        "",
        "INVITE +15555555555, +14444444444",
        "-> lädt Personen ein, den Kanal zu abonnieren",
        "",
        "ADD +15555555555",
        "-> fügt +15555555555 als Admin des Kanals hinzu",
        "",
        "REMOVE +15555555555",
        "-> entfernt +15555555555 aus dem Kanal",
        "",
        "HOTLINE ON / OFF",
        "-> schaltet anonyme Nachrichten an die Admins ein oder aus",
        "",
        "VOUCHING ON / OFF / ADMIN",
        "-> steuert, ob eine Einladung zum Abonnieren erforderlich ist",
        "",
        "VOUCH LEVEL Stufe",
        "-> ändert die Anzahl der für den Beitritt nötigen Einladungen",
        "",
        "REPLY #1312 hallo",
        "-> sendet eine private Antwort an [HOTLINE #1312]",
        "",
        "PRIVATE hallo Admins",
        "-> sendet eine private Nachricht an alle Admins",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> wechselt deine Sprache",
        "",
        "LEAVE",
        "-> entfernt dich aus diesem Kanal",
        "",
        "DESTROY",
        "-> zerstört diesen Kanal und alle zugehörigen Daten dauerhaft",
    ]
    .join("\n")
}

fn help_subscriber() -> String {
    [
        "----------------------------",
        "BEFEHLE",
        "----------------------------",
        "",
        "HELP",
        "-> listet die Befehle auf",
        "",
        "INFO",
        "-> erklärt, wie der Kanal funktioniert",
        "",
        "INVITE +15555555555",
        "-> lädt +15555555555 ein, den Kanal zu abonnieren",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> wechselt deine Sprache",
        "",
        "LEAVE",
        "-> beendet dein Abonnement dieses Kanals",
    ]
    .join("\n")
}

fn help_public() -> String {
    [
        "----------------------------",
        "BEFEHLE",
        "----------------------------",
        "",
        "HELP",
        "-> listet die Befehle auf",
        "",
        "INFO",
        "-> erklärt, wie der Kanal funktioniert",
        "",
        "JOIN",
        "-> abonniert die Ankündigungen",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> wechselt deine Sprache",
    ]
    .join("\n")
}
