multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_ADDRESS, ERR_NOT_OWNER};

#[multiversx_sc::module]
pub trait ConfigModule: crate::events::EventsModule {
    // ========================================================
    // ENDPOINTS — owner-only maintenance
    // ========================================================

    /// Rotates the trusted signer. Tokens signed by the previous signer stop
    /// verifying immediately, and the previous controller wallet loses access
    /// to `airdrop`.
    #[endpoint(changeAuthorizedSigner)]
    fn change_authorized_signer(&self, signer: ManagedAddress) {
        self.require_caller_is_owner();
        self.require_valid_address(&signer);

        self.authorized_signer().set(&signer);
        self.authorized_signer_changed_event(&signer);
    }

    #[endpoint(setAuthorizationContract)]
    fn set_authorization_contract(&self, address: ManagedAddress) {
        self.require_caller_is_owner();
        self.require_valid_address(&address);

        self.authorization_contract().set(&address);
        self.authorization_contract_changed_event(&address);
    }

    #[endpoint(setRegistryContract)]
    fn set_registry_contract(&self, address: ManagedAddress) {
        self.require_caller_is_owner();
        self.require_valid_address(&address);

        self.registry_contract().set(&address);
        self.registry_contract_changed_event(&address);
    }

    // ========================================================
    // INTERNAL: guards
    // ========================================================

    fn require_caller_is_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.blockchain().get_owner_address(),
            ERR_NOT_OWNER
        );
    }

    fn require_valid_address(&self, address: &ManagedAddress) {
        require!(!address.is_zero(), ERR_INVALID_ADDRESS);
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(authorizationContract)]
    #[storage_mapper("authorizationContract")]
    fn authorization_contract(&self) -> SingleValueMapper<ManagedAddress>;

    /// Signs self-claim tokens off-chain and acts as the controller wallet.
    #[view(authorizedSigner)]
    #[storage_mapper("authorizedSigner")]
    fn authorized_signer(&self) -> SingleValueMapper<ManagedAddress>;

    #[view(registryContract)]
    #[storage_mapper("registryContract")]
    fn registry_contract(&self) -> SingleValueMapper<ManagedAddress>;
}
