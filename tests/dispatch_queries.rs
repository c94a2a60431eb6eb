//! HELP / INFO role-dependent views and two-phase DESTROY.

mod common;

use common::{TestEngine, ADMIN_EN, SUBSCRIBER_ES};
use shoutline::catalog::{self, Reply};
use shoutline::model::{Command, Language, Payload, Status};
use std::sync::atomic::Ordering;

const STRANGER: &str = "+15559990000";

#[tokio::test]
async fn help_body_varies_by_role() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let admin = engine.execute(ADMIN_EN, Command::Help, Payload::None).await?;
    let subscriber = engine
        .execute(SUBSCRIBER_ES, Command::Help, Payload::None)
        .await?;
    let stranger = engine.execute(STRANGER, Command::Help, Payload::None).await?;

    assert_eq!(admin.status, Status::Success);
    assert!(admin.message.contains("DESTROY"));
    assert!(admin.message.contains("REPLY"));

    assert_eq!(
        subscriber.message,
        catalog::render_reply(Language::Es, &Reply::HelpSubscriber)
    );
    assert!(!subscriber.message.contains("DESTROY"));

    assert!(stranger.message.contains("JOIN"));
    assert!(!stranger.message.contains("LEAVE"));
    Ok(())
}

#[tokio::test]
async fn info_shows_full_stats_to_admins_only() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let admin = engine.execute(ADMIN_EN, Command::Info, Payload::None).await?;
    assert!(admin.message.contains("admins: 2"));
    assert!(admin.message.contains("subscribers: 1"));

    let stranger = engine.execute(STRANGER, Command::Info, Payload::None).await?;
    assert_eq!(stranger.status, Status::Success);
    assert!(!stranger.message.contains("admins:"));
    assert!(stranger.message.contains("JOIN"));
    Ok(())
}

#[tokio::test]
async fn destroy_prompts_without_touching_anything() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine.execute(ADMIN_EN, Command::Destroy, Payload::None).await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::En, &Reply::DestroyConfirm)
    );
    assert_eq!(engine.destroyer.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn destroy_confirm_invokes_the_destruction_operation() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::DestroyConfirm, Payload::None)
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::En, &Reply::DestroySuccess)
    );
    assert_eq!(engine.destroyer.calls.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn destroy_confirm_failure_maps_to_an_error() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;
    engine.destroyer.fail.store(true, Ordering::SeqCst);

    let result = engine
        .execute(ADMIN_EN, Command::DestroyConfirm, Payload::None)
        .await?;

    assert_eq!(result.status, Status::Error);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::En, &Reply::DestroyFailure)
    );
    Ok(())
}

#[tokio::test]
async fn destroy_is_admin_only() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    for command in [Command::Destroy, Command::DestroyConfirm] {
        let result = engine.execute(SUBSCRIBER_ES, command, Payload::None).await?;
        assert_eq!(result.status, Status::Unauthorized);
    }
    assert_eq!(engine.destroyer.calls.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn results_echo_command_and_payload() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(STRANGER, Command::Rename, Payload::Text("nope".into()))
        .await?;

    assert_eq!(result.command, Command::Rename);
    assert_eq!(result.payload, Payload::Text("nope".into()));
    assert_eq!(result.status, Status::Unauthorized);
    Ok(())
}
