//! External operations the engine invokes but never implements.
//!
//! Both live behind traits so the surrounding system wires in its real
//! implementations and tests use fakes.

use crate::model::PhoneNumber;
use async_trait::async_trait;
use thiserror::Error;

/// Trust re-establishment failure.
#[derive(Debug, Error)]
#[error("trust operation failed: {0}")]
pub struct TrustError(pub String);

/// Re-establishes cryptographic trust for a previously deauthorized
/// address. Invoked only from ADD, before the deauthorization record is
/// cleared and the address promoted.
#[async_trait]
pub trait TrustResolver: Send + Sync {
    async fn retrust(
        &self,
        channel: &PhoneNumber,
        member: &PhoneNumber,
    ) -> Result<(), TrustError>;
}

/// Channel destruction failure.
#[derive(Debug, Error)]
#[error("channel destruction failed: {0}")]
pub struct DestroyError(pub String);

/// Tears down a channel and all associated records. Invoked only from
/// DESTROY_CONFIRM, after the two-phase confirmation.
#[async_trait]
pub trait ChannelDestroyer: Send + Sync {
    async fn destroy(
        &self,
        channel: &PhoneNumber,
        sender: &PhoneNumber,
    ) -> Result<(), DestroyError>;
}
