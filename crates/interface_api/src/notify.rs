//! Outbound notification adapter
//!
//! Delivery is fire-and-forget from the claim engine's perspective; this
//! adapter is the hand-off point.

use async_trait::async_trait;
use tracing::info;

use core_kernel::PortError;
use domain_claims::ports::ClaimNotifier;

/// Notifier that logs the verification link instead of emailing it.
///
/// TODO: integrate a transactional mail provider; until then the link only
/// reaches the structured log.
#[derive(Debug, Default, Clone)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClaimNotifier for TracingNotifier {
    async fn send_verification_link(
        &self,
        recipient: &str,
        verification_url: &str,
    ) -> Result<(), PortError> {
        info!(recipient = %recipient, url = %verification_url, "verification link issued");
        Ok(())
    }
}
