//! Read-only query dispatch.

use crate::helpers::{self, QueryFuture, QueryOkFuture};
use crate::scheme::Scheme;
use crate::types::{AccountId, CallRequest, Options};
use crate::{rpc, Transport};
use serde::de::DeserializeOwned;

/// RPC method executing a read-only contract message on the node.
const CONTRACTS_CALL: &str = "contracts_call";

/// Dispatch engine bound to a deployed contract and a caller identity.
///
/// Holds the two pieces of state every query shares and nothing else; it is
/// immutable after construction and performs no network traffic until a
/// message is issued, so a single instance can serve any number of
/// concurrent queries.
#[derive(Debug, Clone)]
pub struct Query<T> {
    transport: T,
    address: AccountId,
    caller: AccountId,
}

impl<T: Transport> Query<T> {
    /// Bind a transport to a deployed contract and a caller identity.
    pub fn new(transport: T, address: AccountId, caller: AccountId) -> Self {
        Query {
            transport,
            address,
            caller,
        }
    }

    /// Address of the queried contract instance.
    pub fn address(&self) -> &AccountId {
        &self.address
    }

    /// Caller identity messages are executed as.
    pub fn caller(&self) -> &AccountId {
        &self.caller
    }

    /// Borrows the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call(&self, message: &str, args: Vec<rpc::Value>, options: Options) -> T::Out {
        let call = CallRequest {
            dest: self.address.clone(),
            origin: self.caller.clone(),
            message: message.into(),
            args,
            gas_limit: options.gas_limit,
            value: options.value,
        };
        self.transport
            .execute(CONTRACTS_CALL, vec![helpers::serialize(&call)])
    }

    /// Issue a plain-mode query: `message` always returns a usable value.
    pub fn plain<R>(
        &self,
        message: &str,
        args: Vec<rpc::Value>,
        options: Options,
        scheme: Option<Scheme>,
    ) -> QueryFuture<R, T::Out>
    where
        R: DeserializeOwned,
    {
        QueryFuture::new(self.call(message, args, options), scheme)
    }

    /// Issue a fallible-mode query: `message` returns a success/error union
    /// whose error branch is an ordinary domain value, not a transport
    /// failure.
    pub fn fallible<R, E>(
        &self,
        message: &str,
        args: Vec<rpc::Value>,
        options: Options,
        scheme: Option<Scheme>,
    ) -> QueryOkFuture<R, E, T::Out>
    where
        R: DeserializeOwned,
        E: DeserializeOwned,
    {
        QueryOkFuture::new(self.call(message, args, options), scheme)
    }
}

#[cfg(test)]
mod tests {
    use crate::helpers::tests::{DEST, ORIGIN};
    use crate::transports::test::{TestTransport, GAS_CONSUMED, GAS_REQUIRED};
    use crate::types::{AccountId, Id, Options, Psp34Error, RmrkError, U256};
    use futures::executor::block_on;
    use serde_json::json;

    fn rmrk(transport: &TestTransport) -> crate::Rmrk<&TestTransport> {
        crate::Rmrk::new(transport, DEST.into(), ORIGIN.into())
    }

    #[test]
    fn reports_execution_metadata() {
        let mut transport = TestTransport::default();
        transport.set_outcome(json!(3));

        let result = block_on(rmrk(&transport).psp34().balance_of(ORIGIN.into(), Options::default())).unwrap();

        assert_eq!(result.value, 3);
        assert_eq!(result.gas_consumed, GAS_CONSUMED);
        assert_eq!(result.gas_required, GAS_REQUIRED);
    }

    #[test]
    fn big_balances_survive_decoding() {
        // A supply beyond u64 precision must round-trip exactly.
        let mut transport = TestTransport::default();
        transport.set_outcome(json!("999999999999999999999"));

        let result = block_on(rmrk(&transport).psp34().total_supply(Options::default())).unwrap();

        assert_eq!(
            result.value,
            U256::from_dec_str("999999999999999999999").unwrap()
        );
    }

    #[test]
    fn identical_queries_decode_identically() {
        let mut transport = TestTransport::default();
        transport.add_outcome(json!({"Some": "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty"}));
        transport.add_outcome(json!({"Some": "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty"}));

        let client = rmrk(&transport);
        let first = block_on(client.psp34().owner_of(Id::U64(1), Options::default())).unwrap();
        let second = block_on(client.psp34().owner_of(Id::U64(1), Options::default())).unwrap();

        assert_eq!(first, second);
        transport.assert_request("contracts_call", &[crate::helpers::tests::descriptor(
            "psp34::ownerOf",
            r#"[{"U64":1}]"#,
        )]);
        transport.assert_request("contracts_call", &[crate::helpers::tests::descriptor(
            "psp34::ownerOf",
            r#"[{"U64":1}]"#,
        )]);
        transport.assert_no_more_requests();
    }

    #[test]
    fn owner_of_missing_token_is_none() {
        let mut transport = TestTransport::default();
        transport.set_outcome(json!(null));

        let result = block_on(rmrk(&transport).psp34().owner_of(Id::U64(404), Options::default())).unwrap();

        assert_eq!(result.value, None);
    }

    #[test]
    fn unauthorised_transfer_child_is_a_value() {
        let mut transport = TestTransport::default();
        transport.set_outcome(json!({"Err": {"Custom": "NotAuthorised"}}));

        let child = (AccountId::from(DEST), Id::U64(2));
        let result = block_on(rmrk(&transport).nesting().transfer_child(
            Id::U64(1),
            Id::U64(3),
            child,
            Options::default(),
        ))
        .unwrap();

        assert_eq!(result.value, Err(Psp34Error::custom(RmrkError::NotAuthorised)));
        assert_eq!(
            result.value.unwrap_err().as_rmrk(),
            Some(RmrkError::NotAuthorised)
        );
    }

    #[test]
    fn written_base_uri_is_observable() {
        let mut transport = TestTransport::default();
        transport.add_outcome(json!({"Ok": null}));
        transport.add_outcome(json!({"Ok": "ipfs://x/1.json"}));

        let client = rmrk(&transport);
        let written = block_on(client.utils().set_base_uri("ipfs://x/".into(), Options::default())).unwrap();
        assert_eq!(written.value, Ok(()));

        let read = block_on(client.utils().token_uri(1, Options::default())).unwrap();
        assert_eq!(read.value, Ok("ipfs://x/1.json".into()));
    }

    #[test]
    fn argument_order_is_load_bearing() {
        // Swapping two differently-typed positional arguments must produce
        // a different descriptor.
        let mut transport = TestTransport::default();
        transport.add_outcome(json!({"Ok": null}));
        transport.add_outcome(json!({"Ok": null}));

        let client = rmrk(&transport);
        let _ = block_on(client.multi_asset().add_asset_entry(
            1,
            0,
            1,
            b"ipfs://meta".to_vec().into(),
            vec![1, 2],
            Options::default(),
        ));
        let _ = block_on(client.multi_asset().add_asset_entry(
            1,
            1,
            0,
            b"ipfs://meta".to_vec().into(),
            vec![2, 1],
            Options::default(),
        ));

        let requests = transport.requests();
        assert_ne!(requests[0], requests[1]);
    }

    #[test]
    fn attached_value_and_gas_limit_reach_the_descriptor() {
        let mut transport = TestTransport::default();
        transport.set_outcome(json!({"Ok": null}));

        let options = Options::with(|options| {
            options.gas_limit = Some(9_375_000_000);
            options.value = Some(1_000_000u64.into());
        });
        let _ = block_on(rmrk(&transport).minting().mint_next(options));

        transport.assert_request(
            "contracts_call",
            &[format!(
                r#"{{"args":[],"dest":"{}","gasLimit":9375000000,"message":"minting::mintNext","origin":"{}","value":"0xf4240"}}"#,
                DEST, ORIGIN
            )],
        );
        transport.assert_no_more_requests();
    }
}
