//! `nesting` facet: hierarchical token nesting.
//!
//! A token can own tokens of other collections. A child arrives in the
//! parent's pending set via `addChild` and moves to the accepted set once
//! the parent's owner calls `acceptChild`.

use crate::api::Facet;
use crate::helpers::{self, QueryOkFuture};
use crate::query::Query;
use crate::types::{ChildNft, Id, Options, Psp34Error};
use crate::Transport;

/// `nesting` facet of the contract.
#[derive(Debug, Clone)]
pub struct Nesting<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for Nesting<T> {
    fn new(query: Query<T>) -> Self {
        Nesting { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> Nesting<T> {
    /// Add `child_nft` to the pending children of `parent_token_id`.
    pub fn add_child(
        &self,
        parent_token_id: Id,
        child_nft: ChildNft,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.child_op("nesting::addChild", parent_token_id, child_nft, options)
    }

    /// Remove an accepted child from `parent_token_id`. Parent owner only.
    pub fn remove_child(
        &self,
        parent_token_id: Id,
        child_nft: ChildNft,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.child_op("nesting::removeChild", parent_token_id, child_nft, options)
    }

    /// Accept a pending child of `parent_token_id`. Parent owner only.
    pub fn accept_child(
        &self,
        parent_token_id: Id,
        child_nft: ChildNft,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.child_op("nesting::acceptChild", parent_token_id, child_nft, options)
    }

    /// Reject a pending child of `parent_token_id`. Parent owner only.
    pub fn reject_child(
        &self,
        parent_token_id: Id,
        child_nft: ChildNft,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.child_op("nesting::rejectChild", parent_token_id, child_nft, options)
    }

    /// Move an accepted child from parent `from` to parent `to`.
    pub fn transfer_child(
        &self,
        from: Id,
        to: Id,
        child_nft: ChildNft,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let from = helpers::serialize(&from);
        let to = helpers::serialize(&to);
        let child_nft = helpers::serialize(&child_nft);
        self.query.fallible(
            "nesting::transferChild",
            vec![from, to, child_nft],
            options,
            None,
        )
    }

    /// Accepted and pending children counts of `parent_token_id`.
    pub fn children_balance(
        &self,
        parent_token_id: Id,
        options: Options,
    ) -> QueryOkFuture<(u64, u64), Psp34Error, T::Out> {
        let parent_token_id = helpers::serialize(&parent_token_id);
        self.query.fallible(
            "nesting::childrenBalance",
            vec![parent_token_id],
            options,
            None,
        )
    }

    fn child_op(
        &self,
        message: &str,
        parent_token_id: Id,
        child_nft: ChildNft,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let parent_token_id = helpers::serialize(&parent_token_id);
        let child_nft = helpers::serialize(&child_nft);
        self.query
            .fallible(message, vec![parent_token_id, child_nft], options, None)
    }
}
