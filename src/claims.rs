multiversx_sc::imports!();

use crate::errors::ERR_ALREADY_CLAIMED;

/// Which recipients have been credited under each proposal. Shared by both
/// claim paths, so a pair can be credited at most once overall.
#[multiversx_sc::module]
pub trait ClaimsModule {
    fn require_not_claimed(&self, proposal_id: u64, recipient: &ManagedAddress) {
        require!(
            !self.has_received_airdrop(proposal_id, recipient).get(),
            ERR_ALREADY_CLAIMED
        );
    }

    /// Does not re-check the flag; callers run `require_not_claimed` first in
    /// the same transaction.
    fn record_claim(&self, proposal_id: u64, recipient: &ManagedAddress) {
        self.has_received_airdrop(proposal_id, recipient).set(true);
        self.airdrop_count(proposal_id).update(|count| *count += 1);
    }

    #[view(hasReceivedAirdrop)]
    #[storage_mapper("hasReceivedAirdrop")]
    fn has_received_airdrop(
        &self,
        proposal_id: u64,
        recipient: &ManagedAddress,
    ) -> SingleValueMapper<bool>;

    #[view(getAirdropCount)]
    #[storage_mapper("airdropCount")]
    fn airdrop_count(&self, proposal_id: u64) -> SingleValueMapper<u64>;
}
