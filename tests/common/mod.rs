//! Integration test common infrastructure.
//!
//! Provides an in-memory store, fake external operations, and helpers for
//! seeding a channel and driving the dispatcher the way ingestion would.

#![allow(dead_code)]

use async_trait::async_trait;
use shoutline::db::Database;
use shoutline::dispatch::Dispatcher;
use shoutline::model::{
    Channel, Command, CommandResult, Dispatchable, Executable, InboundMessage, Language,
    Membership, Payload, PhoneNumber,
};
use shoutline::ops::{ChannelDestroyer, DestroyError, TrustError, TrustResolver};
use shoutline::EngineConfig;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub const CHANNEL: &str = "+15550001111";
pub const CHANNEL_NAME: &str = "night shift";
pub const ADMIN_EN: &str = "+15550002222";
pub const ADMIN_FR: &str = "+15550003333";
pub const SUBSCRIBER_ES: &str = "+15550004444";

pub fn number(raw: &str) -> PhoneNumber {
    PhoneNumber::parse(raw).expect("test fixture number")
}

/// Trust operation fake: counts calls, optionally fails.
#[derive(Default)]
pub struct FakeTrust {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

#[async_trait]
impl TrustResolver for FakeTrust {
    async fn retrust(
        &self,
        _channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<(), TrustError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            Err(TrustError(format!("no session for {member}")))
        } else {
            Ok(())
        }
    }
}

/// Destruction operation fake: counts calls, optionally fails.
#[derive(Default)]
pub struct FakeDestroyer {
    pub calls: AtomicUsize,
    pub fail: AtomicBool,
}

#[async_trait]
impl ChannelDestroyer for FakeDestroyer {
    async fn destroy(
        &self,
        channel: &PhoneNumber,
        _sender: &PhoneNumber,
    ) -> Result<(), DestroyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            Err(DestroyError(format!("teardown failed for {channel}")))
        } else {
            Ok(())
        }
    }
}

/// A dispatcher wired to an in-memory store and fake collaborators.
pub struct TestEngine {
    pub db: Database,
    pub dispatcher: Dispatcher,
    pub trust: Arc<FakeTrust>,
    pub destroyer: Arc<FakeDestroyer>,
}

impl TestEngine {
    /// Fresh engine over an empty in-memory store.
    pub async fn new() -> anyhow::Result<Self> {
        let db = Database::new(":memory:").await?;
        let trust = Arc::new(FakeTrust::default());
        let destroyer = Arc::new(FakeDestroyer::default());
        let dispatcher = Dispatcher::new(
            db.clone(),
            EngineConfig::default(),
            trust.clone(),
            destroyer.clone(),
        );
        Ok(Self {
            db,
            dispatcher,
            trust,
            destroyer,
        })
    }

    /// Engine with the standard seeded channel: two admins (EN, FR) and one
    /// subscriber (ES).
    pub async fn seeded() -> anyhow::Result<Self> {
        let engine = Self::new().await?;
        engine
            .db
            .channels()
            .create(
                &number(CHANNEL),
                CHANNEL_NAME,
                Duration::from_secs(60 * 60 * 24 * 7),
            )
            .await?;
        engine
            .db
            .memberships()
            .add_admin(&number(CHANNEL), &number(ADMIN_EN), Language::En)
            .await?;
        engine
            .db
            .memberships()
            .add_admin(&number(CHANNEL), &number(ADMIN_FR), Language::Fr)
            .await?;
        engine
            .db
            .memberships()
            .add_subscriber(&number(CHANNEL), &number(SUBSCRIBER_ES), Language::Es)
            .await?;
        Ok(engine)
    }

    /// Deep-load the seeded channel the way ingestion would.
    pub async fn snapshot(&self) -> anyhow::Result<Channel> {
        Ok(self
            .db
            .channels()
            .find_deep(&number(CHANNEL))
            .await?
            .expect("seeded channel exists"))
    }

    /// Assemble a dispatchable for a sender, synthesizing the non-member
    /// sentinel when they have no record.
    pub async fn dispatchable_for(&self, sender: &str) -> anyhow::Result<Dispatchable> {
        let channel = self.snapshot().await?;
        let address = number(sender);
        let sender = match channel.membership_of(&address) {
            Some(membership) => membership.clone(),
            None => Membership::none(channel.address.clone(), address, Language::En),
        };
        Ok(Dispatchable {
            channel,
            sender,
            message: InboundMessage::default(),
        })
    }

    /// Dispatch one command, rebuilding the snapshot first.
    pub async fn execute(
        &self,
        sender: &str,
        command: Command,
        payload: Payload,
    ) -> anyhow::Result<CommandResult> {
        self.execute_in(sender, command, payload, Language::En).await
    }

    /// Dispatch one command issued in a specific language.
    pub async fn execute_in(
        &self,
        sender: &str,
        command: Command,
        payload: Payload,
        language: Language,
    ) -> anyhow::Result<CommandResult> {
        let dispatchable = self.dispatchable_for(sender).await?;
        let executable = Executable::new(command, payload, language);
        Ok(self.dispatcher.execute(executable, dispatchable).await)
    }
}

/// Payload helper: a single-address payload.
pub fn address_payload(raw: &str) -> Payload {
    Payload::Addresses(vec![number(raw)])
}
