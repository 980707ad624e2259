//! `psp34` facet: fungible-style ownership accounting.

use crate::api::Facet;
use crate::helpers::{self, QueryFuture, QueryOkFuture};
use crate::query::Query;
use crate::scheme::Scheme;
use crate::types::{AccountId, Bytes, Id, Options, Psp34Error, U256};
use crate::Transport;

/// `psp34` facet of the contract.
#[derive(Debug, Clone)]
pub struct Psp34<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for Psp34<T> {
    fn new(query: Query<T>) -> Self {
        Psp34 { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> Psp34<T> {
    /// Total amount of tokens ever minted.
    pub fn total_supply(&self, options: Options) -> QueryFuture<U256, T::Out> {
        self.query
            .plain("psp34::totalSupply", vec![], options, Some(Scheme::Number))
    }

    /// Allow `operator` to transfer the given token (or all of the
    /// caller's tokens when `id` is `None`) on the caller's behalf.
    pub fn approve(
        &self,
        operator: AccountId,
        id: Option<Id>,
        approved: bool,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let operator = helpers::serialize(&operator);
        let id = helpers::serialize(&id);
        let approved = helpers::serialize(&approved);
        self.query
            .fallible("psp34::approve", vec![operator, id, approved], options, None)
    }

    /// Transfer token `id` to `to`. `data` is passed to the receiver's
    /// acceptance check untouched.
    pub fn transfer(
        &self,
        to: AccountId,
        id: Id,
        data: Bytes,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let to = helpers::serialize(&to);
        let id = helpers::serialize(&id);
        let data = helpers::serialize(&data);
        self.query
            .fallible("psp34::transfer", vec![to, id, data], options, None)
    }

    /// Number of tokens the account owns.
    pub fn balance_of(&self, owner: AccountId, options: Options) -> QueryFuture<u32, T::Out> {
        let owner = helpers::serialize(&owner);
        self.query
            .plain("psp34::balanceOf", vec![owner], options, None)
    }

    /// Whether `operator` is allowed to transfer the given token (or all
    /// tokens, when `id` is `None`) owned by `owner`.
    pub fn allowance(
        &self,
        owner: AccountId,
        operator: AccountId,
        id: Option<Id>,
        options: Options,
    ) -> QueryFuture<bool, T::Out> {
        let owner = helpers::serialize(&owner);
        let operator = helpers::serialize(&operator);
        let id = helpers::serialize(&id);
        self.query
            .plain("psp34::allowance", vec![owner, operator, id], options, None)
    }

    /// Owner of token `id`, `None` if the token was never minted.
    pub fn owner_of(&self, id: Id, options: Options) -> QueryFuture<Option<AccountId>, T::Out> {
        let id = helpers::serialize(&id);
        self.query
            .plain("psp34::ownerOf", vec![id], options, Some(Scheme::Nullable))
    }

    /// Collection id of the contract instance.
    pub fn collection_id(&self, options: Options) -> QueryFuture<Id, T::Out> {
        self.query
            .plain("psp34::collectionId", vec![], options, Some(Scheme::TokenId))
    }
}
