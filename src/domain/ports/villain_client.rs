//! Villains service port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::Villain;

/// Client for the remote villains service.
#[async_trait]
pub trait VillainClient: Send + Sync {
    /// Look up the villain for a hero.
    ///
    /// Any failure is reported as `RemoteInvocationFailed`; there is no retry.
    async fn find_villain(&self, hero_name: &str) -> DomainResult<Villain>;
}
