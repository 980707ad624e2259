use crate::rpc;
use serde::Deserialize;

/// Raw execution envelope returned by the transport for a simulated call.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallOutcome {
    /// Gas burned by the simulated execution.
    pub gas_consumed: u64,
    /// Gas the execution would require as a limit.
    pub gas_required: u64,
    /// Raw decoded return value of the message.
    pub value: rpc::Value,
}

/// Typed query result together with the execution metadata it came with.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOutput<T> {
    /// Decoded return value.
    pub value: T,
    /// Gas burned by the simulated execution.
    pub gas_consumed: u64,
    /// Gas the execution would require as a limit.
    pub gas_required: u64,
}

impl<T> QueryOutput<T> {
    /// Map the decoded value, keeping the execution metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> QueryOutput<U> {
        QueryOutput {
            value: f(self.value),
            gas_consumed: self.gas_consumed,
            gas_required: self.gas_required,
        }
    }
}
