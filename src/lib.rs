#![no_std]

multiversx_sc::imports!();

pub mod authorization_proxy;
pub mod claims;
pub mod config;
pub mod dao_self_airdrop_proxy;
pub mod errors;
pub mod events;
pub mod proposals;
pub mod registry_proxy;
pub mod types;

use errors::{
    ERR_AMOUNT_MISMATCH, ERR_NOT_AUTHORIZED, ERR_NOT_AUTHORIZED_CALLER, ERR_PROPOSAL_INACTIVE,
    ERR_PROPOSAL_NOT_FOUND, ERR_VERIFICATION_FAILED,
};

// ============================================================
// Constants
// ============================================================

/// Scope string signed into every self-claim authorization message
pub const SELF_AIRDROP_SCOPE: &str = "selfkey.self.airdrop";

/// A param selects a proposal as a big-endian integer of at most 32 bytes
const MAX_PARAM_LEN: usize = 32;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DaoSelfAirdrop:
    config::ConfigModule
    + events::EventsModule
    + proposals::ProposalsModule
    + claims::ClaimsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        authorization_contract: ManagedAddress,
        authorized_signer: ManagedAddress,
        registry_contract: ManagedAddress,
    ) {
        self.require_valid_address(&authorization_contract);
        self.require_valid_address(&authorized_signer);
        self.require_valid_address(&registry_contract);

        self.authorization_contract().set(&authorization_contract);
        self.authorized_signer().set(&authorized_signer);
        self.registry_contract().set(&registry_contract);
        self.num_proposals().set_if_empty(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: selfAirdrop
    // Recipient presents a token signed by the authorized signer.
    // The amount always comes from the proposal, never the caller.
    // ========================================================

    #[endpoint(selfAirdrop)]
    fn self_airdrop(
        &self,
        recipient: ManagedAddress,
        param: ManagedBuffer,
        timestamp: u64,
        signer: ManagedAddress,
        signature: ManagedBuffer,
    ) {
        let proposal_id = self.proposal_id_from_param(&param);
        let proposal = self.require_proposal(proposal_id);
        require!(proposal.active, ERR_PROPOSAL_INACTIVE);

        // ── Authorization: trusted signer + signature over the derived message ──
        require!(
            signer == self.authorized_signer().get(),
            ERR_VERIFICATION_FAILED
        );
        let authorization_addr = self.authorization_contract().get();
        let scope: ManagedBuffer = ManagedBuffer::from(SELF_AIRDROP_SCOPE);
        let verified: bool = self
            .tx()
            .to(&authorization_addr)
            .typed(authorization_proxy::AuthorizationProxy)
            .verify(
                self.blockchain().get_sc_address(),
                &recipient,
                &proposal.amount,
                scope,
                &param,
                timestamp,
                &signer,
                &signature,
            )
            .returns(ReturnsResult)
            .sync_call();
        require!(verified, ERR_VERIFICATION_FAILED);

        self.require_not_claimed(proposal_id, &recipient);
        self.pay_out(proposal_id, &recipient, &proposal.amount);
    }

    // ========================================================
    // ENDPOINT: airdrop
    // The controller wallet credits a recipient directly.
    // ========================================================

    #[endpoint(airdrop)]
    fn airdrop(&self, recipient: ManagedAddress, proposal_id: u64, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.authorized_signer().get(), ERR_NOT_AUTHORIZED);

        let proposal = self.require_proposal(proposal_id);
        require!(proposal.active, ERR_PROPOSAL_INACTIVE);
        require!(amount == proposal.amount, ERR_AMOUNT_MISMATCH);

        self.require_not_claimed(proposal_id, &recipient);
        self.pay_out(proposal_id, &recipient, &amount);
    }

    // ========================================================
    // INTERNAL: payout
    // Ledger first, then the registry. A failed credit reverts
    // the whole transaction, ledger write included.
    // ========================================================

    fn pay_out(&self, proposal_id: u64, recipient: &ManagedAddress, amount: &BigUint) {
        self.record_claim(proposal_id, recipient);
        self.credit_recipient(recipient, amount);
        self.airdrop_event(proposal_id, recipient, amount);
    }

    fn credit_recipient(&self, recipient: &ManagedAddress, amount: &BigUint) {
        let registry_addr = self.registry_contract().get();

        let is_authorized: bool = self
            .tx()
            .to(&registry_addr)
            .typed(registry_proxy::RegistryProxy)
            .is_authorized_caller(self.blockchain().get_sc_address())
            .returns(ReturnsResult)
            .sync_call();
        require!(is_authorized, ERR_NOT_AUTHORIZED_CALLER);

        self.tx()
            .to(&registry_addr)
            .typed(registry_proxy::RegistryProxy)
            .credit(recipient, amount)
            .sync_call();
    }

    /// Leading zero bytes are ignored, so a 32-byte zero-padded id and its
    /// minimal encoding select the same proposal.
    fn proposal_id_from_param(&self, param: &ManagedBuffer) -> u64 {
        require!(param.len() <= MAX_PARAM_LEN, ERR_PROPOSAL_NOT_FOUND);
        BigUint::from_bytes_be_buffer(param)
            .to_u64()
            .unwrap_or_else(|| sc_panic!(ERR_PROPOSAL_NOT_FOUND))
    }
}
