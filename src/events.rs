multiversx_sc::imports!();

/// Audit trail. Topic order is part of the public interface: indexed fields
/// come first, the trailing field is the event data.
#[multiversx_sc::module]
pub trait EventsModule {
    #[event("airdropProposalCreated")]
    fn airdrop_proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] title: &ManagedBuffer,
        #[indexed] amount: &BigUint,
        active: bool,
    );

    #[event("airdrop")]
    fn airdrop_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] recipient: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("authorizedSignerChanged")]
    fn authorized_signer_changed_event(&self, #[indexed] signer: &ManagedAddress);

    #[event("authorizationContractChanged")]
    fn authorization_contract_changed_event(&self, #[indexed] address: &ManagedAddress);

    #[event("registryContractChanged")]
    fn registry_contract_changed_event(&self, #[indexed] address: &ManagedAddress);
}
