//! Custom assertion helpers for domain types

use domain_claims::claim::{ClaimRequest, ClaimStatus};

/// Panics unless the claim has reached a terminal state
pub fn assert_claim_terminal(claim: &ClaimRequest) {
    assert!(
        claim.status.is_terminal(),
        "expected a terminal claim status, got {:?}",
        claim.status
    );
}

/// Panics unless the claim is still pending and carries no audit trail
pub fn assert_claim_untouched(claim: &ClaimRequest) {
    assert_eq!(claim.status, ClaimStatus::Pending, "claim left pending");
    assert!(claim.admin_notes.is_none(), "no admin notes expected");
    assert!(claim.reviewed_by.is_none(), "no reviewer expected");
    assert!(claim.reviewed_at.is_none(), "no review timestamp expected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::ClaimRequestBuilder;
    use core_kernel::CompanyId;

    #[test]
    fn test_untouched_assertion_accepts_fresh_claim() {
        let claim = ClaimRequestBuilder::new(CompanyId::new()).build_email();
        assert_claim_untouched(&claim);
    }

    #[test]
    #[should_panic(expected = "expected a terminal claim status")]
    fn test_terminal_assertion_rejects_pending() {
        let claim = ClaimRequestBuilder::new(CompanyId::new()).build_email();
        assert_claim_terminal(&claim);
    }
}
