//! RENAME / DESCRIPTION / toggles / vouch settings / SET_LANGUAGE.

mod common;

use common::{number, TestEngine, ADMIN_EN, ADMIN_FR, CHANNEL, CHANNEL_NAME, SUBSCRIBER_ES};
use shoutline::catalog::{self, Notice, Reply};
use shoutline::model::{Command, Language, Payload, Status, VouchMode};

#[tokio::test]
async fn rename_by_subscriber_is_unauthorized_and_mutates_nothing() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(SUBSCRIBER_ES, Command::Rename, Payload::Text("newname".into()))
        .await?;

    assert_eq!(result.status, Status::Unauthorized);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::Es, &Reply::NotAdmin)
    );
    assert_eq!(engine.snapshot().await?.name, CHANNEL_NAME);
    Ok(())
}

#[tokio::test]
async fn rename_updates_channel_and_notifies_bystanders_localized() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::Rename, Payload::Text("day shift".into()))
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(engine.snapshot().await?.name, "day shift");

    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].recipient, number(ADMIN_FR));
    assert_eq!(
        result.notifications[0].message,
        catalog::render_notice(
            Language::Fr,
            &Notice::ChannelRenamed { old: CHANNEL_NAME, new: "day shift" },
        )
    );
    Ok(())
}

#[tokio::test]
async fn description_update_reaches_bystander_admins() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(
            ADMIN_EN,
            Command::SetDescription,
            Payload::Text("dispatch for the night shift".into()),
        )
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        engine.snapshot().await?.description,
        "dispatch for the night shift"
    );
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].recipient, number(ADMIN_FR));
    Ok(())
}

#[tokio::test]
async fn hotline_toggle_flips_flag_and_notifies() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let on = engine.execute(ADMIN_EN, Command::HotlineOn, Payload::None).await?;
    assert_eq!(on.status, Status::Success);
    assert!(engine.snapshot().await?.hotline_on);
    assert_eq!(on.notifications.len(), 1);
    assert_eq!(
        on.notifications[0].message,
        catalog::render_notice(Language::Fr, &Notice::HotlineToggled { on: true })
    );

    let off = engine.execute(ADMIN_EN, Command::HotlineOff, Payload::None).await?;
    assert_eq!(off.status, Status::Success);
    assert!(!engine.snapshot().await?.hotline_on);
    Ok(())
}

#[tokio::test]
async fn vouch_mode_changes_apply_immediately() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::VouchingAdmin, Payload::None)
        .await?;
    assert_eq!(result.status, Status::Success);
    assert_eq!(engine.snapshot().await?.vouch_mode, VouchMode::Admin);

    // With ADMIN vouching, subscriber invites are now refused.
    let denied = engine
        .execute(
            SUBSCRIBER_ES,
            Command::Invite,
            Payload::Addresses(vec![number("+15551110000")]),
        )
        .await?;
    assert_eq!(denied.status, Status::Unauthorized);

    let off = engine
        .execute(ADMIN_EN, Command::VouchingOff, Payload::None)
        .await?;
    assert_eq!(off.status, Status::Success);
    assert_eq!(engine.snapshot().await?.vouch_mode, VouchMode::Off);
    Ok(())
}

#[tokio::test]
async fn out_of_range_vouch_level_is_a_validation_error() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    for bad in [0i64, -3, 99] {
        let result = engine
            .execute(ADMIN_EN, Command::VouchLevel, Payload::Level(bad))
            .await?;
        assert_eq!(result.status, Status::Error);
        assert_eq!(
            result.message,
            catalog::render_reply(
                Language::En,
                &Reply::InvalidVouchLevel { value: bad, max: 10 },
            )
        );
    }

    // No store call was attempted; the level is untouched.
    assert_eq!(engine.snapshot().await?.vouch_level, 1);
    Ok(())
}

#[tokio::test]
async fn vouch_level_change_notifies_bystanders() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::VouchLevel, Payload::Level(4))
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(engine.snapshot().await?.vouch_level, 4);
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(
        result.notifications[0].message,
        catalog::render_notice(Language::Fr, &Notice::VouchLevelChanged { level: 4 })
    );
    Ok(())
}

#[tokio::test]
async fn set_language_persists_for_members_and_answers_in_new_language() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute_in(SUBSCRIBER_ES, Command::SetLanguage, Payload::None, Language::Fr)
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::Fr, &Reply::LanguageSet)
    );
    let membership = engine
        .db
        .memberships()
        .find_membership(&number(CHANNEL), &number(SUBSCRIBER_ES))
        .await?
        .expect("membership exists");
    assert_eq!(membership.language, Language::Fr);
    Ok(())
}

#[tokio::test]
async fn set_language_works_for_nonmembers_without_a_record() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;
    let stranger = "+15559990000";

    let result = engine
        .execute_in(stranger, Command::SetLanguage, Payload::None, Language::De)
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::De, &Reply::LanguageSet)
    );
    assert!(
        engine
            .db
            .memberships()
            .find_membership(&number(CHANNEL), &number(stranger))
            .await?
            .is_none()
    );
    Ok(())
}
