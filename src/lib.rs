//! shoutline - anonymous broadcast/hotline channel engine.
//!
//! A channel is a phone number with admins who broadcast and subscribers
//! who receive, optionally with an anonymized two-way hotline and an
//! invitation-gated ("vouching") admission policy. This crate is the
//! command dispatch and authorization engine: given an already-parsed
//! command and a channel/sender snapshot, it enforces the role model,
//! mutates state through the store, and returns the localized response and
//! bystander notifications. Ingestion, parsing, and the outbound transport
//! live elsewhere and consume [`model::CommandResult`].

pub mod catalog;
pub mod config;
pub mod db;
pub mod dispatch;
pub mod model;
pub mod notify;
pub mod ops;

pub use config::EngineConfig;
pub use db::Database;
pub use dispatch::Dispatcher;
