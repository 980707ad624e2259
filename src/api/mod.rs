//! Facets of the RMRK contract surface.

mod enumerable;
mod metadata;
mod minting;
mod multi_asset;
mod nesting;
mod ownable;
mod psp34;
mod utils;

pub use self::enumerable::Enumerable;
pub use self::metadata::Metadata;
pub use self::minting::Minting;
pub use self::multi_asset::MultiAsset;
pub use self::nesting::Nesting;
pub use self::ownable::Ownable;
pub use self::psp34::Psp34;
pub use self::utils::Utils;

use crate::query::Query;
use crate::types::AccountId;
use crate::Transport;

/// Common API for all contract facets.
pub trait Facet<T: Transport>: Clone {
    /// Creates a new facet over the given dispatcher.
    fn new(query: Query<T>) -> Self;

    /// Borrows the dispatcher.
    fn query(&self) -> &Query<T>;
}

/// `Rmrk` wrapper for all facets of one deployed contract.
#[derive(Debug, Clone)]
pub struct Rmrk<T: Transport> {
    query: Query<T>,
}

impl<T: Transport> Rmrk<T> {
    /// Create a new client for the contract at `address`, executing every
    /// query as `caller`.
    pub fn new(transport: T, address: AccountId, caller: AccountId) -> Self {
        Rmrk {
            query: Query::new(transport, address, caller),
        }
    }

    /// Borrows the dispatcher.
    pub fn query(&self) -> &Query<T> {
        &self.query
    }

    /// Access a facet of the contract surface.
    pub fn api<F: Facet<T>>(&self) -> F {
        F::new(self.query.clone())
    }

    /// Fungible-style ownership accounting (`psp34`).
    pub fn psp34(&self) -> Psp34<T> {
        self.api()
    }

    /// Ownership administration (`ownable`).
    pub fn ownable(&self) -> Ownable<T> {
        self.api()
    }

    /// Token attributes (`psp34Metadata`).
    pub fn metadata(&self) -> Metadata<T> {
        self.api()
    }

    /// Token enumeration (`psp34Enumerable`).
    pub fn enumerable(&self) -> Enumerable<T> {
        self.api()
    }

    /// Collection utilities (`utils`).
    pub fn utils(&self) -> Utils<T> {
        self.api()
    }

    /// Token issuance (`minting`).
    pub fn minting(&self) -> Minting<T> {
        self.api()
    }

    /// Hierarchical token nesting (`nesting`).
    pub fn nesting(&self) -> Nesting<T> {
        self.api()
    }

    /// Multi-asset attachment (`multiAsset`).
    pub fn multi_asset(&self) -> MultiAsset<T> {
        self.api()
    }
}
