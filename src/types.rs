multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Proposal — a fixed-amount airdrop allocation
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    /// Paid to every recipient credited under this proposal
    pub amount: BigUint<M>,
    /// Inactive proposals accept no claims on either path
    pub active: bool,
}
