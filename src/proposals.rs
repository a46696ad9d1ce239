multiversx_sc::imports!();

use crate::errors::ERR_PROPOSAL_NOT_FOUND;
use crate::types::Proposal;

#[multiversx_sc::module]
pub trait ProposalsModule: crate::config::ConfigModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: createAirdropProposal
    // Owner only. Ids are sequential from 1 and never reused.
    // ========================================================

    #[endpoint(createAirdropProposal)]
    fn create_airdrop_proposal(&self, title: ManagedBuffer, amount: BigUint, active: bool) -> u64 {
        self.require_caller_is_owner();

        let proposal_id = self.num_proposals().get() + 1u64;
        let proposal = Proposal {
            id: proposal_id,
            title,
            amount,
            active,
        };

        self.proposals(proposal_id).set(&proposal);
        self.num_proposals().set(proposal_id);

        self.airdrop_proposal_created_event(
            proposal_id,
            &proposal.title,
            &proposal.amount,
            proposal.active,
        );

        proposal_id
    }

    fn require_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_proposal(proposal_id)
    }

    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.num_proposals().get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for id in start..=end {
            result.push(self.proposals(id).get());
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.num_proposals().get();

        for id in 1..=total {
            let proposal = self.proposals(id).get();
            if proposal.active {
                result.push(proposal);
            }
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    /// Equals the highest assigned proposal id.
    #[view(numProposals)]
    #[storage_mapper("numProposals")]
    fn num_proposals(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;
}
