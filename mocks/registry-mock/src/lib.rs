#![no_std]

multiversx_sc::imports!();

pub mod registry_mock_proxy;

/// Test double for the token balance registry: an allow-listed credit
/// operation over plain balances.
#[multiversx_sc::contract]
pub trait RegistryMock {
    #[init]
    fn init(&self) {}

    #[only_owner]
    #[endpoint(addAuthorizedCaller)]
    fn add_authorized_caller(&self, caller: ManagedAddress) {
        self.authorized_callers().insert(caller);
    }

    #[endpoint(credit)]
    fn credit(&self, recipient: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(
            self.authorized_callers().contains(&caller),
            "Not authorized caller"
        );

        self.balances(&recipient).update(|balance| *balance += &amount);
    }

    #[view(isAuthorizedCaller)]
    fn is_authorized_caller(&self, address: ManagedAddress) -> bool {
        self.authorized_callers().contains(&address)
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balances(&address).get()
    }

    #[storage_mapper("authorizedCallers")]
    fn authorized_callers(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("balances")]
    fn balances(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
