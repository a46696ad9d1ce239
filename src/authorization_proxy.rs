use multiversx_sc::proxy_imports::*;

/// Client for the signature authorization contract. It derives the digest of
/// an authorization message and checks a signer's signature over it.
pub struct AuthorizationProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for AuthorizationProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = AuthorizationProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        AuthorizationProxyMethods { wrapped_tx: tx }
    }
}

pub struct AuthorizationProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> AuthorizationProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    #[allow(clippy::too_many_arguments)]
    pub fn verify<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<u64>,
        Arg6: ProxyArg<ManagedAddress<Env::Api>>,
        Arg7: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        amount: Arg2,
        scope: Arg3,
        param: Arg4,
        timestamp: Arg5,
        signer: Arg6,
        signature: Arg7,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("verify")
            .argument(&from)
            .argument(&to)
            .argument(&amount)
            .argument(&scope)
            .argument(&param)
            .argument(&timestamp)
            .argument(&signer)
            .argument(&signature)
            .original_result()
    }

    pub fn get_message_hash<
        Arg0: ProxyArg<ManagedAddress<Env::Api>>,
        Arg1: ProxyArg<ManagedAddress<Env::Api>>,
        Arg2: ProxyArg<BigUint<Env::Api>>,
        Arg3: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg4: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg5: ProxyArg<u64>,
    >(
        self,
        from: Arg0,
        to: Arg1,
        amount: Arg2,
        scope: Arg3,
        param: Arg4,
        timestamp: Arg5,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMessageHash")
            .argument(&from)
            .argument(&to)
            .argument(&amount)
            .argument(&scope)
            .argument(&param)
            .argument(&timestamp)
            .original_result()
    }
}
