//! `psp34Enumerable` facet: token enumeration.

use crate::api::Facet;
use crate::helpers::{self, QueryOkFuture};
use crate::query::Query;
use crate::scheme::Scheme;
use crate::types::{AccountId, Id, Options, Psp34Error, U256};
use crate::Transport;

/// `psp34Enumerable` facet of the contract.
#[derive(Debug, Clone)]
pub struct Enumerable<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for Enumerable<T> {
    fn new(query: Query<T>) -> Self {
        Enumerable { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> Enumerable<T> {
    /// Token at `index` in the global enumeration of minted tokens.
    pub fn token_by_index(
        &self,
        index: U256,
        options: Options,
    ) -> QueryOkFuture<Id, Psp34Error, T::Out> {
        let index = helpers::serialize(&index);
        self.query.fallible(
            "psp34Enumerable::tokenByIndex",
            vec![index],
            options,
            Some(Scheme::TokenId),
        )
    }

    /// Token at `index` among the tokens owned by `owner`.
    pub fn owners_token_by_index(
        &self,
        owner: AccountId,
        index: U256,
        options: Options,
    ) -> QueryOkFuture<Id, Psp34Error, T::Out> {
        let owner = helpers::serialize(&owner);
        let index = helpers::serialize(&index);
        self.query.fallible(
            "psp34Enumerable::ownersTokenByIndex",
            vec![owner, index],
            options,
            Some(Scheme::TokenId),
        )
    }
}
