//! French message set.

use super::{Notice, Reply, SYSTEM_NAME};
use crate::model::{ChannelSummary, Role, VouchMode};
use std::time::Duration;

pub(super) fn reply(reply: &Reply<'_>) -> String {
    match reply {
        Reply::NotAdmin => {
            "Désolé, seuls les admins peuvent utiliser cette commande.".to_string()
        }
        Reply::NotMember => "Désolé, vous n'êtes pas membre de ce canal.".to_string(),
        Reply::DbError => {
            "Oups ! Une erreur s'est produite de notre côté. Veuillez réessayer.".to_string()
        }
        Reply::AlreadyMember => "Attention ! Vous êtes déjà membre de ce canal.".to_string(),
        Reply::BelowVouchLevel { required, actual } => format!(
            "Désolé, ce canal nécessite {required} invitation(s) pour s'inscrire. \
             Vous en avez {actual}."
        ),
        Reply::AcceptSuccess { channel } => {
            format!("Bienvenue ! Vous êtes maintenant abonné·e à \"{channel}\".")
        }
        Reply::DeclineSuccess => {
            "Invitation refusée. Toutes les informations la concernant ont été supprimées."
                .to_string()
        }
        Reply::JoinSuccess { channel, description } => {
            let mut text = format!("Bienvenue ! Vous êtes maintenant abonné·e à \"{channel}\".");
            if !description.is_empty() {
                text.push_str("\n\n");
                text.push_str(description);
            }
            text
        }
        Reply::InviteRequired => {
            "Désolé, il vous faut une invitation pour vous abonner à ce canal. \
             Demandez-en une à un membre !"
                .to_string()
        }
        Reply::LeaveSuccess { channel } => {
            format!("Vous avez quitté \"{channel}\". Au revoir !")
        }
        Reply::AddSuccess { target } => format!("{target} a été ajouté·e comme admin."),
        Reply::RemoveSuccess { target } => format!("{target} a été retiré·e."),
        Reply::TargetNotMember { target } => {
            format!("Attention ! {target} n'est pas membre de ce canal.")
        }
        Reply::InviteSuccess { count } => {
            if *count == 1 {
                "1 invitation envoyée.".to_string()
            } else {
                format!("{count} invitations envoyées.")
            }
        }
        Reply::InviteDbErrors { failed } => format!(
            "Oups ! Impossible d'envoyer des invitations pour : {}. Veuillez réessayer.",
            join_numbers(failed)
        ),
        Reply::RenameSuccess { old, new } => {
            format!("Le canal a été renommé de \"{old}\" en \"{new}\".")
        }
        Reply::DescriptionSuccess { description } => {
            format!("La description du canal est maintenant \"{description}\".")
        }
        Reply::HotlineToggled { on } => {
            format!("Hotline {}.", if *on { "activée" } else { "désactivée" })
        }
        Reply::VouchModeChanged { mode } => {
            format!("Le parrainage est maintenant {}.", vouch_mode_word(*mode))
        }
        Reply::VouchLevelSet { level } => format!(
            "Niveau de parrainage fixé à {level}. {level} invitation(s) sont désormais \
             nécessaires pour rejoindre ce canal."
        ),
        Reply::InvalidVouchLevel { value, max } => format!(
            "Attention ! \"{value}\" n'est pas un niveau de parrainage valide. \
             Utilisez un nombre entre 1 et {max}."
        ),
        Reply::InvalidHotlineId { id } => format!(
            "Attention ! Le message hotline n°{id} est introuvable. Il a peut-être expiré \
             ou n'a jamais existé."
        ),
        Reply::HotlineReplySent { id, text } => {
            format!("[RÉPONSE À LA HOTLINE #{id}]\n{text}")
        }
        Reply::LanguageSet => "Vous recevrez désormais les messages en français !".to_string(),
        Reply::DestroyConfirm => {
            "Êtes-vous sûr·e ? Cela détruira définitivement le canal et tous les \
             enregistrements associés. Pour continuer, envoyez : DESTROY CONFIRM"
                .to_string()
        }
        Reply::DestroySuccess => {
            "Le canal et tous les enregistrements associés ont été définitivement détruits."
                .to_string()
        }
        Reply::DestroyFailure => {
            "Oups ! Une erreur s'est produite lors de la destruction du canal. \
             Veuillez réessayer."
                .to_string()
        }
        Reply::HotlineDisabledSubscriber => {
            "Désolé, la hotline est désactivée sur ce canal. Envoyez HELP pour voir \
             les commandes valides."
                .to_string()
        }
        Reply::HotlineDisabledNotSubscriber => {
            "Désolé, la hotline est désactivée sur ce canal. Envoyez HELP pour voir \
             les commandes valides ou JOIN pour vous abonner."
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
            "{added_by} vient de vous nommer admin de \"{channel}\". \
             Envoyez HELP pour voir les commandes disponibles."
        ),
        Notice::AdminAdded { new_admin } => {
            format!("{new_admin} vient d'être ajouté·e comme admin.")
        }
        Notice::ToRemovedAdmin { channel } => {
            format!("Vous venez d'être retiré·e comme admin de \"{channel}\".")
        }
        Notice::ToRemovedSubscriber { channel } => {
            format!("Vous venez d'être retiré·e de \"{channel}\".")
        }
        Notice::AdminRemoved { removed } => format!("L'admin {removed} a été retiré·e."),
        Notice::SubscriberRemoved => "Un·e abonné·e vient d'être retiré·e.".to_string(),
        Notice::AdminLeft => "Un admin vient de quitter le canal.".to_string(),
        Notice::ChannelRenamed { old, new } => {
            format!("Le canal a été renommé de \"{old}\" en \"{new}\".")
        }
        Notice::DescriptionChanged { description } => {
            format!("La description du canal est maintenant : \"{description}\"")
        }
        Notice::HotlineToggled { on } => format!(
            "La hotline vient d'être {}.",
            if *on { "activée" } else { "désactivée" }
        ),
        Notice::VouchModeChanged { mode } => {
            format!("Le parrainage est maintenant {}.", vouch_mode_word(*mode))
        }
        Notice::VouchLevelChanged { level } => format!(
            "Le niveau de parrainage est maintenant {level} ; {level} invitation(s) \
             sont nécessaires pour s'inscrire."
        ),
        Notice::InviteReceived { channel } => format!(
            "Bonjour ! Vous avez été invité·e à rejoindre le canal \"{channel}\". \
             Répondez ACCEPT pour vous abonner ou DECLINE pour refuser."
        ),
        Notice::VouchedInviteReceived { channel, received, required } => {
            let mut text = format!(
                "Bonjour ! Vous avez reçu {received}/{required} des invitations nécessaires \
                 pour rejoindre le canal \"{channel}\"."
            );
            if received >= required {
                text.push_str(" Répondez ACCEPT pour vous abonner ou DECLINE pour refuser.");
            }
            text
        }
        Notice::PrivateMessage { text } => format!("[PRIVÉ]\n{text}"),
        Notice::HotlineReplyToMember { text } => {
            format!("[RÉPONSE PRIVÉE DES ADMINS]\n{text}")
        }
        Notice::HotlineReplyToAdmins { id, text } => {
            format!("[RÉPONSE À LA HOTLINE #{id}]\n{text}")
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "activée" } else { "désactivée" }
}

fn vouch_mode_word(mode: VouchMode) -> &'static str {
    match mode {
        VouchMode::Off => "désactivé",
        VouchMode::On => "activé",
        VouchMode::Admin => "activé (admins uniquement)",
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
        "INFOS DU CANAL".to_string(),
        "---------------------------".to_string(),
        String::new(),
        format!("nom : {}", summary.name),
        format!("numéro de téléphone : {}", summary.address),
    ];
    match role {
        Role::Admin => {
            lines.push(format!("admins : {}", summary.admin_count));
            lines.push(format!("abonné·e·s : {}", summary.subscriber_count));
            lines.push(format!("hotline : {}", on_off(summary.hotline_on)));
            lines.push(format!("parrainage : {}", vouch_mode_word(summary.vouch_mode)));
            lines.push(format!("niveau de parrainage : {}", summary.vouch_level));
            lines.push(format!(
                "expiration des messages : {}h",
                expiry_hours(summary.message_expiry)
            ));
        }
        Role::Subscriber => {
            lines.push(format!("abonné·e·s : {}", summary.subscriber_count));
            lines.push(format!("hotline : {}", on_off(summary.hotline_on)));
            lines.push(format!("parrainage : {}", vouch_mode_word(summary.vouch_mode)));
        }
        Role::None => {}
    }
    if !summary.description.is_empty() {
        lines.push(format!("description : {}", summary.description));
    }
    if role == Role::None {
        lines.push(String::new());
        lines.push(format!(
            "Ceci est un canal {SYSTEM_NAME}. Envoyez JOIN pour vous abonner ou HELP \
             pour voir les commandes."
        ));
    }
    lines.join("\n")
}

fn help_admin() -> String {
    [
        "----------------------------",
        "COMMANDES",
        "----------------------------",
        "",
        "HELP",
        "-> liste les commandes",
        "",
        "INFO",
        "-> affiche les statistiques et explique le fonctionnement du canal",
        "",
        "RENAME nouveau nom",
        "-> renomme le canal en \"nouveau nom\"",
        "",
        "DESCRIPTION description du canal",
        "-> ajoute ou met à jour la description publique du canal",
        "",
        "INVITE +15555555555, +14444444444",
        "-> invite des personnes à s'abonner au canal",
        "",
        "ADD +15555555555",
        "-> ajoute +15555555555 comme admin du canal",
        "",
        "REMOVE +15555555555",
        "-> retire +15555555555 du canal",
        "",
        "HOTLINE ON / OFF",
        "-> active ou désactive les messages anonymes aux admins",
        "",
        "VOUCHING ON / OFF / ADMIN",
        "-> contrôle si une invitation est nécessaire pour s'abonner",
        "",
        "VOUCH LEVEL niveau",
        "-> change le nombre d'invitations nécessaires pour rejoindre le canal",
        "",
        "REPLY #1312 bonjour",
        "-> envoie une réponse privée à [HOTLINE #1312]",
        "",
        "PRIVATE bonjour les admins",
        "-> envoie un message privé à tous les admins",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> change votre langue",
        "",
        "LEAVE",
        "-> vous retire de ce canal",
        "",
        "DESTROY",
        "-> détruit définitivement ce canal et tous les enregistrements associés",
    ]
    .join("\n")
}

fn help_subscriber() -> String {
    [
        "----------------------------",
        "COMMANDES",
        "----------------------------",
        "",
        "HELP",
        "-> liste les commandes",
        "",
        "INFO",
        "-> explique le fonctionnement du canal",
        "",
        "INVITE +15555555555",
        "-> invite +15555555555 à s'abonner au canal",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> change votre langue",
        "",
        "LEAVE",
        "-> vous désabonne de ce canal",
    ]
    .join("\n")
}

fn help_public() -> String {
    [
        "----------------------------",
        "COMMANDES",
        "----------------------------",
        "",
        "HELP",
        "-> liste les commandes",
        "",
        "INFO",
        "-> explique le fonctionnement du canal",
        "",
        "JOIN",
        "-> vous abonne aux annonces",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> change votre langue",
    ]
    .join("\n")
}
