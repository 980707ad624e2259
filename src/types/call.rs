use super::{AccountId, U256};
use crate::rpc;
use serde::{Deserialize, Serialize};

/// Call descriptor for a single read-only message execution.
///
/// `args` is positional and order-significant: the node encodes it against
/// the message's declared parameter list without any further checking, so
/// descriptor construction is the only place a wrong argument order could
/// silently corrupt a call.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallRequest {
    /// Address of the contract instance being queried.
    pub dest: AccountId,
    /// Caller identity the node executes the message as.
    pub origin: AccountId,
    /// Namespaced message path, e.g. `psp34::totalSupply`.
    pub message: String,
    /// Positional message arguments.
    pub args: Vec<rpc::Value>,
    /// Gas limit for the simulated execution.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_limit: Option<u64>,
    /// Value attached to the simulated call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
}

/// Contract call options.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Options {
    /// Fixed gas limit.
    pub gas_limit: Option<u64>,
    /// Value to transfer with the call. Minting messages reject
    /// simulations that do not attach the mint price.
    pub value: Option<U256>,
}

impl Options {
    /// Create new default `Options` object with some modifications.
    pub fn with<F>(func: F) -> Options
    where
        F: FnOnce(&mut Options),
    {
        let mut options = Options::default();
        func(&mut options);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_absent_options() {
        let call = CallRequest {
            dest: "contract".into(),
            origin: "caller".into(),
            message: "psp34::totalSupply".into(),
            args: vec![],
            gas_limit: None,
            value: None,
        };
        assert_eq!(
            serde_json::to_string(&call).unwrap(),
            r#"{"dest":"contract","origin":"caller","message":"psp34::totalSupply","args":[]}"#
        );

        let call = CallRequest {
            gas_limit: Some(9_375_000_000),
            value: Some(1_000_000u64.into()),
            ..call
        };
        assert_eq!(
            serde_json::to_string(&call).unwrap(),
            r#"{"dest":"contract","origin":"caller","message":"psp34::totalSupply","args":[],"gasLimit":9375000000,"value":"0xf4240"}"#
        );
    }
}
