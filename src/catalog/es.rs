//! Spanish message set.

use super::{Notice, Reply, SYSTEM_NAME};
use crate::model::{ChannelSummary, Role, VouchMode};
use std::time::Duration;

pub(super) fn reply(reply: &Reply<'_>) -> String {
    match reply {
        Reply::NotAdmin => {
            "Lo sentimos, solo los admins pueden usar ese comando.".to_string()
        }
        Reply::NotMember => "Lo sentimos, no eres miembro de este canal.".to_string(),
        Reply::DbError => {
            "¡Ups! Algo salió mal de nuestro lado. Por favor, inténtalo de nuevo.".to_string()
        }
        Reply::AlreadyMember => "¡Ojo! Ya eres miembro de este canal.".to_string(),
        Reply::BelowVouchLevel { required, actual } => format!(
            "Lo sentimos, este canal requiere {required} invitación(es) para unirse. Tienes {actual}."
        ),
        Reply::AcceptSuccess { channel } => {
            format!("¡Hola! Ahora estás suscrito/a a \"{channel}\".")
        }
        Reply::DeclineSuccess => {
            "Invitación rechazada. Toda la información sobre ella ha sido eliminada.".to_string()
        }
        Reply::JoinSuccess { channel, description } => {
            let mut text = format!("¡Hola! Ahora estás suscrito/a a \"{channel}\".");
            if !description.is_empty() {
                text.push_str("\n\n");
                text.push_str(description);
            }
            text
        }
        Reply::InviteRequired => {
            "Lo sentimos, necesitas una invitación para suscribirte a este canal. \
             ¡Pídesela a un miembro!"
                .to_string()
        }
        Reply::LeaveSuccess { channel } => {
            format!("Has salido de \"{channel}\". ¡Adiós!")
        }
        Reply::AddSuccess { target } => format!("{target} fue agregado/a como admin."),
        Reply::RemoveSuccess { target } => format!("{target} fue eliminado/a."),
        Reply::TargetNotMember { target } => {
            format!("¡Ojo! {target} no es miembro de este canal.")
        }
        Reply::InviteSuccess { count } => {
            if *count == 1 {
                "Se emitió 1 invitación.".to_string()
            } else {
                format!("Se emitieron {count} invitaciones.")
            }
        }
        Reply::InviteDbErrors { failed } => format!(
            "¡Ups! No se pudieron emitir invitaciones para: {}. Inténtalo de nuevo.",
            join_numbers(failed)
        ),
        Reply::RenameSuccess { old, new } => {
            format!("El canal cambió de nombre de \"{old}\" a \"{new}\".")
        }
        Reply::DescriptionSuccess { description } => {
            format!("La descripción del canal cambió a \"{description}\".")
        }
        Reply::HotlineToggled { on } => {
            format!("Línea directa {}.", if *on { "activada" } else { "desactivada" })
        }
        Reply::VouchModeChanged { mode } => {
            format!("La validación está ahora {}.", vouch_mode_word(*mode))
        }
        Reply::VouchLevelSet { level } => format!(
            "Nivel de validación fijado en {level}. Ahora se requieren {level} invitación(es) \
             para unirse a este canal."
        ),
        Reply::InvalidVouchLevel { value, max } => format!(
            "¡Ojo! \"{value}\" no es un nivel de validación válido. Usa un número entre 1 y {max}."
        ),
        Reply::InvalidHotlineId { id } => format!(
            "¡Ojo! No se encontró el mensaje #{id} de la línea directa. Puede haber expirado \
             o nunca existió."
        ),
        Reply::HotlineReplySent { id, text } => {
            format!("[RESPUESTA A LÍNEA DIRECTA #{id}]\n{text}")
        }
        Reply::LanguageSet => "¡Ahora recibirás mensajes en español!".to_string(),
        Reply::DestroyConfirm => {
            "¿Estás seguro/a? Esto destruirá permanentemente el canal y todos sus registros. \
             Para continuar, envía: DESTROY CONFIRM"
                .to_string()
        }
        Reply::DestroySuccess => {
            "El canal y todos sus registros han sido destruidos permanentemente.".to_string()
        }
        Reply::DestroyFailure => {
            "¡Ups! Algo salió mal al destruir el canal. Por favor, inténtalo de nuevo.".to_string()
        }
        Reply::HotlineDisabledSubscriber => {
            "Lo sentimos, la línea directa está desactivada en este canal. \
             Envía HELP para ver los comandos válidos."
                .to_string()
        }
        Reply::HotlineDisabledNotSubscriber => {
            "Lo sentimos, la línea directa está desactivada en este canal. \
             Envía HELP para ver los comandos válidos o JOIN para suscribirte."
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
            "{added_by} te acaba de nombrar admin de \"{channel}\". \
             Envía HELP para ver los comandos disponibles."
        ),
        Notice::AdminAdded { new_admin } => {
            format!("Se acaba de agregar a {new_admin} como admin.")
        }
        Notice::ToRemovedAdmin { channel } => {
            format!("Acabas de ser eliminado/a como admin de \"{channel}\".")
        }
        Notice::ToRemovedSubscriber { channel } => {
            format!("Acabas de ser eliminado/a de \"{channel}\".")
        }
        Notice::AdminRemoved { removed } => format!("El admin {removed} fue eliminado."),
        Notice::SubscriberRemoved => "Un/a suscriptor/a acaba de ser eliminado/a.".to_string(),
        Notice::AdminLeft => "Un admin acaba de salir del canal.".to_string(),
        Notice::ChannelRenamed { old, new } => {
            format!("El canal cambió de nombre de \"{old}\" a \"{new}\".")
        }
        Notice::DescriptionChanged { description } => {
            format!("La descripción del canal ahora es: \"{description}\"")
        }
        Notice::HotlineToggled { on } => format!(
            "La línea directa acaba de ser {}.",
            if *on { "activada" } else { "desactivada" }
        ),
        Notice::VouchModeChanged { mode } => {
            format!("La validación está ahora {}.", vouch_mode_word(*mode))
        }
        Notice::VouchLevelChanged { level } => format!(
            "El nivel de validación ahora es {level}; se requieren {level} invitación(es) \
             para unirse."
        ),
        Notice::InviteReceived { channel } => format!(
            "¡Hola! Te invitaron a unirte al canal \"{channel}\". \
             Responde ACCEPT para suscribirte o DECLINE para rechazar."
        ),
        Notice::VouchedInviteReceived { channel, received, required } => {
            let mut text = format!(
                "¡Hola! Has recibido {received}/{required} de las invitaciones necesarias \
                 para unirte al canal \"{channel}\"."
            );
            if received >= required {
                text.push_str(" Responde ACCEPT para suscribirte o DECLINE para rechazar.");
            }
            text
        }
        Notice::PrivateMessage { text } => format!("[PRIVADO]\n{text}"),
        Notice::HotlineReplyToMember { text } => {
            format!("[RESPUESTA PRIVADA DE LOS ADMINS]\n{text}")
        }
        Notice::HotlineReplyToAdmins { id, text } => {
            format!("[RESPUESTA A LÍNEA DIRECTA #{id}]\n{text}")
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "activada" } else { "desactivada" }
}

fn vouch_mode_word(mode: VouchMode) -> &'static str {
    match mode {
        VouchMode::Off => "desactivada",
        VouchMode::On => "activada",
        VouchMode::Admin => "activada (solo admins)",
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
        "INFO DEL CANAL".to_string(),
        "---------------------------".to_string(),
        String::new(),
        format!("nombre: {}", summary.name),
        format!("número de teléfono: {}", summary.address),
    ];
    match role {
        Role::Admin => {
            lines.push(format!("admins: {}", summary.admin_count));
            lines.push(format!("suscriptores: {}", summary.subscriber_count));
            lines.push(format!("línea directa: {}", on_off(summary.hotline_on)));
            lines.push(format!("validación: {}", vouch_mode_word(summary.vouch_mode)));
            lines.push(format!("nivel de validación: {}", summary.vouch_level));
            lines.push(format!(
                "expiración de mensajes: {}h",
                expiry_hours(summary.message_expiry)
            ));
        }
        Role::Subscriber => {
            lines.push(format!("suscriptores: {}", summary.subscriber_count));
            lines.push(format!("línea directa: {}", on_off(summary.hotline_on)));
            lines.push(format!("validación: {}", vouch_mode_word(summary.vouch_mode)));
        }
        Role::None => {}
    }
    if !summary.description.is_empty() {
        lines.push(format!("descripción: {}", summary.description));
    }
    if role == Role::None {
        lines.push(String::new());
        lines.push(format!(
            "Este es un canal de {SYSTEM_NAME}. Envía JOIN para suscribirte o HELP para \
             ver los comandos."
        ));
    }
    lines.join("\n")
}

fn help_admin() -> String {
    [
        "----------------------------",
        "COMANDOS",
        "----------------------------",
        "",
        "HELP",
        "-> lista los comandos",
        "",
        "INFO",
        "-> muestra estadísticas y explica cómo funciona el canal",
        "",
        "RENAME nuevo nombre",
        "-> cambia el nombre del canal a \"nuevo nombre\"",
        "",
        "DESCRIPTION descripción del canal",
        "-> agrega o actualiza la descripción pública del canal",
        "",
        "INVITE +15555555555, +14444444444",
        "-> invita a personas a suscribirse al canal",
        "",
        "ADD +15555555555",
        "-> agrega a +15555555555 como admin del canal",
        "",
        "REMOVE +15555555555",
        "-> elimina a +15555555555 del canal",
        "",
        "HOTLINE ON / OFF",
        "-> activa o desactiva los mensajes anónimos a los admins",
        "",
        "VOUCHING ON / OFF / ADMIN",
        "-> controla si se requiere una invitación para suscribirse",
        "",
        "VOUCH LEVEL nivel",
        "-> cambia el número de invitaciones necesarias para unirse",
        "",
        "REPLY #1312 hola",
        "-> envía una respuesta privada a [LÍNEA DIRECTA #1312]",
        "",
        "PRIVATE hola admins",
        "-> envía un mensaje privado a todos los admins",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> cambia tu idioma",
        "",
        "LEAVE",
        "-> te elimina de este canal",
        "",
        "DESTROY",
        "-> destruye permanentemente este canal y todos sus registros",
    ]
    .join("\n")
}

fn help_subscriber() -> String {
    [
        "----------------------------",
        "COMANDOS",
        "----------------------------",
        "",
        "HELP",
        "-> lista los comandos",
        "",
        "INFO",
        "-> explica cómo funciona el canal",
        "",
        "INVITE +15555555555",
        "-> invita a +15555555555 a suscribirse al canal",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> cambia tu idioma",
        "",
        "LEAVE",
        "-> cancela tu suscripción a este canal",
    ]
    .join("\n")
}

fn help_public() -> String {
    [
        "----------------------------",
        "COMANDOS",
        "----------------------------",
        "",
        "HELP",
        "-> lista los comandos",
        "",
        "INFO",
        "-> explica cómo funciona el canal",
        "",
        "JOIN",
        "-> te suscribe a los anuncios",
        "",
        "ENGLISH / ESPAÑOL / FRANÇAIS / DEUTSCH",
        "-> cambia tu idioma",
    ]
    .join("\n")
}
