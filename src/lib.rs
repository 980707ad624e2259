//! RMRK NFT contract query client.
//!
//! Turns the read-only surface of a deployed [RMRK] contract (PSP34
//! ownership accounting plus the ownable, metadata, enumerable, minting,
//! nesting and multi-asset facets) into strongly-typed Rust methods. Each
//! method simulates its message through a node's `contracts_call` RPC and
//! decodes the raw response into a structured result. Nothing in this crate
//! signs or submits transactions.
//!
//! ```no_run
//! use rmrk_client::{transports::Http, types::Id, Rmrk};
//!
//! #[tokio::main]
//! async fn main() -> rmrk_client::Result<()> {
//!     let transport = Http::new("http://localhost:9944")?;
//!     let rmrk = Rmrk::new(
//!         transport,
//!         "5C4hrfjw9DjXZTzV3MwzrrAr9P1MJhSrvWGWqi1eSuyUpnhM".into(),
//!         "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY".into(),
//!     );
//!
//!     let supply = rmrk.psp34().total_supply(Default::default()).await?;
//!     println!("total supply: {}", supply.value);
//!
//!     // Contract-level rejections are ordinary values, not errors.
//!     let minted = rmrk.minting().mint_next(Default::default()).await?;
//!     if let Err(e) = minted.value {
//!         println!("mint would fail with {:?}", e);
//!     }
//!
//!     let owner = rmrk.psp34().owner_of(Id::U64(1), Default::default()).await?;
//!     println!("owner of #1: {:?}", owner.value);
//!     Ok(())
//! }
//! ```
//!
//! [RMRK]: https://www.rmrk.app/

#![warn(missing_docs)]

use jsonrpc_core as rpc;

// it needs to be before other modules
// otherwise the macro for tests is not available.
#[macro_use]
pub mod helpers;

pub mod api;
pub mod error;
pub mod query;
pub mod scheme;
pub mod transports;
pub mod types;

pub use crate::api::Rmrk;
pub use crate::error::{Error, Result};
pub use crate::query::Query;

/// Assigned RequestId
pub type RequestId = usize;

/// Transport implementation: executes a prepared RPC call against a
/// contracts node and yields the raw response value.
pub trait Transport: std::fmt::Debug + Clone {
    /// The type of future this transport returns when a call is made.
    type Out: futures::Future<Output = error::Result<rpc::Value>> + Unpin;

    /// Prepare serializable RPC call for given method with parameters.
    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call);

    /// Execute prepared RPC call.
    fn send(&self, id: RequestId, request: rpc::Call) -> Self::Out;

    /// Execute remote method with given parameters.
    fn execute(&self, method: &str, params: Vec<rpc::Value>) -> Self::Out {
        let (id, request) = self.prepare(method, params);
        self.send(id, request)
    }
}

impl<X, T> Transport for X
where
    T: Transport + ?Sized,
    X: std::ops::Deref<Target = T>,
    X: std::fmt::Debug,
    X: Clone,
    X: Unpin,
{
    type Out = T::Out;

    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call) {
        (**self).prepare(method, params)
    }

    fn send(&self, id: RequestId, request: rpc::Call) -> Self::Out {
        (**self).send(id, request)
    }
}
