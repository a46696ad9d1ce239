#![no_std]

multiversx_sc::imports!();

pub mod authorization_mock_proxy;

/// Test double for the signature authorization contract.
///
/// A "signature" here is keccak256(signer || digest). Anyone can compute it
/// through `signDigest`, which is what lets scenario tests issue tokens for a
/// chosen signer without private keys. The digest covers the verifier's own
/// address, so tokens hashed by one deployment never verify at another.
#[multiversx_sc::contract]
pub trait AuthorizationMock {
    #[init]
    fn init(&self) {}

    #[view(getMessageHash)]
    fn get_message_hash(
        &self,
        from: ManagedAddress,
        to: ManagedAddress,
        amount: BigUint,
        scope: ManagedBuffer,
        param: ManagedBuffer,
        timestamp: u64,
    ) -> ManagedBuffer {
        let mut message = self.blockchain().get_sc_address().as_managed_buffer().clone();
        message.append(from.as_managed_buffer());
        message.append(to.as_managed_buffer());
        message.append(&amount.to_bytes_be_buffer());
        message.append(&scope);
        message.append(&param);
        message.append_bytes(&timestamp.to_be_bytes()[..]);

        self.crypto().keccak256(&message).as_managed_buffer().clone()
    }

    #[view(verify)]
    fn verify(
        &self,
        from: ManagedAddress,
        to: ManagedAddress,
        amount: BigUint,
        scope: ManagedBuffer,
        param: ManagedBuffer,
        timestamp: u64,
        signer: ManagedAddress,
        signature: ManagedBuffer,
    ) -> bool {
        let digest = self.get_message_hash(from, to, amount, scope, param, timestamp);
        self.sign_digest(signer, digest) == signature
    }

    #[view(signDigest)]
    fn sign_digest(&self, signer: ManagedAddress, digest: ManagedBuffer) -> ManagedBuffer {
        let mut preimage = signer.as_managed_buffer().clone();
        preimage.append(&digest);

        self.crypto().keccak256(&preimage).as_managed_buffer().clone()
    }
}
