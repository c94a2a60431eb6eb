//! ADD / REMOVE / LEAVE / JOIN dispatch behavior.

mod common;

use common::{address_payload, number, TestEngine, ADMIN_EN, ADMIN_FR, CHANNEL, SUBSCRIBER_ES};
use shoutline::catalog::{self, Notice, Reply};
use shoutline::model::{Command, Language, Payload, Role, Status, VouchMode};

const NEWCOMER: &str = "+15556667777";

#[tokio::test]
async fn add_promotes_and_notifies_welcome_plus_bystanders() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::Add, address_payload(NEWCOMER))
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        engine
            .db
            .memberships()
            .resolve_member_type(&number(CHANNEL), &number(NEWCOMER))
            .await?,
        Role::Admin
    );

    // Welcome to the new admin (default language), then the FR bystander.
    assert_eq!(result.notifications.len(), 2);
    assert_eq!(result.notifications[0].recipient, number(NEWCOMER));
    assert_eq!(
        result.notifications[0].message,
        catalog::render_notice(
            Language::En,
            &Notice::WelcomeAdmin {
                channel: "night shift",
                added_by: &number(ADMIN_EN),
            },
        )
    );
    assert_eq!(result.notifications[1].recipient, number(ADMIN_FR));
    assert_eq!(
        result.notifications[1].message,
        catalog::render_notice(Language::Fr, &Notice::AdminAdded { new_admin: &number(NEWCOMER) })
    );
    Ok(())
}

#[tokio::test]
async fn add_existing_subscriber_keeps_their_language() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::Add, address_payload(SUBSCRIBER_ES))
        .await?;

    assert_eq!(result.status, Status::Success);
    let membership = engine
        .db
        .memberships()
        .find_membership(&number(CHANNEL), &number(SUBSCRIBER_ES))
        .await?
        .expect("promoted membership");
    assert_eq!(membership.role, Role::Admin);
    assert_eq!(membership.language, Language::Es);
    // The welcome is rendered in the promoted member's stored language.
    assert_eq!(result.notifications[0].recipient, number(SUBSCRIBER_ES));
    assert!(result.notifications[0].message.contains("admin"));
    Ok(())
}

#[tokio::test]
async fn add_retrusts_deauthorized_target_before_promotion() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;
    engine
        .db
        .deauthorizations()
        .create(&number(CHANNEL), &number(NEWCOMER), "05deadbeef")
        .await?;

    let result = engine
        .execute(ADMIN_EN, Command::Add, address_payload(NEWCOMER))
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(engine.trust.calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    assert!(
        engine
            .db
            .deauthorizations()
            .find(&number(CHANNEL), &number(NEWCOMER))
            .await?
            .is_none()
    );
    assert_eq!(
        engine
            .db
            .memberships()
            .resolve_member_type(&number(CHANNEL), &number(NEWCOMER))
            .await?,
        Role::Admin
    );
    Ok(())
}

#[tokio::test]
async fn add_by_subscriber_is_unauthorized() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(SUBSCRIBER_ES, Command::Add, address_payload(NEWCOMER))
        .await?;

    assert_eq!(result.status, Status::Unauthorized);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::Es, &Reply::NotAdmin)
    );
    assert_eq!(
        engine
            .db
            .memberships()
            .resolve_member_type(&number(CHANNEL), &number(NEWCOMER))
            .await?,
        Role::None
    );
    Ok(())
}

#[tokio::test]
async fn remove_nonmember_is_a_distinct_error_without_mutation() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;
    let ghost = "+15553000000";

    let result = engine
        .execute(ADMIN_EN, Command::Remove, address_payload(ghost))
        .await?;

    assert_eq!(result.status, Status::Error);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::En, &Reply::TargetNotMember { target: &number(ghost) })
    );
    assert!(result.notifications.is_empty());
    Ok(())
}

#[tokio::test]
async fn remove_subscriber_notifies_target_and_bystanders() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::Remove, address_payload(SUBSCRIBER_ES))
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        engine
            .db
            .memberships()
            .resolve_member_type(&number(CHANNEL), &number(SUBSCRIBER_ES))
            .await?,
        Role::None
    );

    // The removed member hears it in their own language; the other admin
    // gets the role-specific bystander text.
    assert_eq!(result.notifications.len(), 2);
    assert_eq!(result.notifications[0].recipient, number(SUBSCRIBER_ES));
    assert_eq!(
        result.notifications[0].message,
        catalog::render_notice(
            Language::Es,
            &Notice::ToRemovedSubscriber { channel: "night shift" },
        )
    );
    assert_eq!(result.notifications[1].recipient, number(ADMIN_FR));
    assert_eq!(
        result.notifications[1].message,
        catalog::render_notice(Language::Fr, &Notice::SubscriberRemoved)
    );
    Ok(())
}

#[tokio::test]
async fn remove_admin_uses_admin_wording() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(ADMIN_EN, Command::Remove, address_payload(ADMIN_FR))
        .await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].recipient, number(ADMIN_FR));
    assert_eq!(
        result.notifications[0].message,
        catalog::render_notice(Language::Fr, &Notice::ToRemovedAdmin { channel: "night shift" })
    );
    Ok(())
}

#[tokio::test]
async fn leave_as_subscriber_is_silent() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(SUBSCRIBER_ES, Command::Leave, Payload::None)
        .await?;

    assert_eq!(result.status, Status::Success);
    assert!(result.notifications.is_empty());
    assert_eq!(
        engine
            .db
            .memberships()
            .resolve_member_type(&number(CHANNEL), &number(SUBSCRIBER_ES))
            .await?,
        Role::None
    );
    Ok(())
}

#[tokio::test]
async fn leave_as_admin_notifies_remaining_admins() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine.execute(ADMIN_EN, Command::Leave, Payload::None).await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(result.notifications.len(), 1);
    assert_eq!(result.notifications[0].recipient, number(ADMIN_FR));
    assert_eq!(
        result.notifications[0].message,
        catalog::render_notice(Language::Fr, &Notice::AdminLeft)
    );
    Ok(())
}

#[tokio::test]
async fn leave_as_nonmember_is_unauthorized() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine.execute(NEWCOMER, Command::Leave, Payload::None).await?;

    assert_eq!(result.status, Status::Unauthorized);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::En, &Reply::NotMember)
    );
    Ok(())
}

#[tokio::test]
async fn join_subscribes_when_vouching_is_off() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine.execute(NEWCOMER, Command::Join, Payload::None).await?;

    assert_eq!(result.status, Status::Success);
    assert_eq!(
        engine
            .db
            .memberships()
            .resolve_member_type(&number(CHANNEL), &number(NEWCOMER))
            .await?,
        Role::Subscriber
    );
    Ok(())
}

#[tokio::test]
async fn join_as_member_reports_already_member() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;

    let result = engine
        .execute(SUBSCRIBER_ES, Command::Join, Payload::None)
        .await?;

    assert_eq!(result.status, Status::Error);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::Es, &Reply::AlreadyMember)
    );
    Ok(())
}

#[tokio::test]
async fn join_with_vouching_on_requires_an_invite() -> anyhow::Result<()> {
    let engine = TestEngine::seeded().await?;
    engine
        .db
        .channels()
        .set_vouch_mode(&number(CHANNEL), VouchMode::On)
        .await?;

    let result = engine.execute(NEWCOMER, Command::Join, Payload::None).await?;

    assert_eq!(result.status, Status::Error);
    assert_eq!(
        result.message,
        catalog::render_reply(Language::En, &Reply::InviteRequired)
    );
    assert_eq!(
        engine
            .db
            .memberships()
            .resolve_member_type(&number(CHANNEL), &number(NEWCOMER))
            .await?,
        Role::None
    );
    Ok(())
}
