//! `multiAsset` facet: multi-asset attachment.
//!
//! Assets are collection-wide entries (an URI plus equippable metadata)
//! that tokens reference. Like children, an asset proposed for a token is
//! pending until the token owner accepts it.

use crate::api::Facet;
use crate::helpers::{self, QueryFuture, QueryOkFuture};
use crate::query::Query;
use crate::scheme::Scheme;
use crate::types::{Bytes, Id, Options, Psp34Error};
use crate::Transport;

/// `multiAsset` facet of the contract.
#[derive(Debug, Clone)]
pub struct MultiAsset<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for MultiAsset<T> {
    fn new(query: Query<T>) -> Self {
        MultiAsset { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> MultiAsset<T> {
    /// Create a collection-wide asset entry. Owner only.
    pub fn add_asset_entry(
        &self,
        id: u32,
        equippable_group_id: u32,
        base_id: u32,
        asset_uri: Bytes,
        part_ids: Vec<u32>,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let id = helpers::serialize(&id);
        let equippable_group_id = helpers::serialize(&equippable_group_id);
        let base_id = helpers::serialize(&base_id);
        let asset_uri = helpers::serialize(&asset_uri);
        let part_ids = helpers::serialize(&part_ids);
        self.query.fallible(
            "multiAsset::addAssetEntry",
            vec![id, equippable_group_id, base_id, asset_uri, part_ids],
            options,
            None,
        )
    }

    /// Set the priority order of the accepted assets of `token_id`.
    pub fn set_priority(
        &self,
        token_id: Id,
        priorities: Vec<u32>,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let token_id = helpers::serialize(&token_id);
        let priorities = helpers::serialize(&priorities);
        self.query.fallible(
            "multiAsset::setPriority",
            vec![token_id, priorities],
            options,
            None,
        )
    }

    /// Propose asset `asset_id` for `token_id`, optionally replacing an
    /// already accepted asset.
    pub fn add_asset_to_token(
        &self,
        token_id: Id,
        asset_id: u32,
        replaces_asset_with_id: Option<Id>,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let token_id = helpers::serialize(&token_id);
        let asset_id = helpers::serialize(&asset_id);
        let replaces_asset_with_id = helpers::serialize(&replaces_asset_with_id);
        self.query.fallible(
            "multiAsset::addAssetToToken",
            vec![token_id, asset_id, replaces_asset_with_id],
            options,
            None,
        )
    }

    /// Accept a pending asset of `token_id`. Token owner only.
    pub fn accept_asset(
        &self,
        token_id: Id,
        asset_id: u32,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.asset_op("multiAsset::acceptAsset", token_id, asset_id, options)
    }

    /// Reject a pending asset of `token_id`. Token owner only.
    pub fn reject_asset(
        &self,
        token_id: Id,
        asset_id: u32,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.asset_op("multiAsset::rejectAsset", token_id, asset_id, options)
    }

    /// Remove an accepted asset from `token_id`. Token owner only.
    pub fn remove_asset(
        &self,
        token_id: Id,
        asset_id: u32,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.asset_op("multiAsset::removeAsset", token_id, asset_id, options)
    }

    /// Accepted and pending asset counts of `token_id`.
    pub fn total_token_assets(
        &self,
        token_id: Id,
        options: Options,
    ) -> QueryOkFuture<(u64, u64), Psp34Error, T::Out> {
        let token_id = helpers::serialize(&token_id);
        self.query.fallible(
            "multiAsset::totalTokenAssets",
            vec![token_id],
            options,
            None,
        )
    }

    /// URI of asset `asset_id`, `None` for an unknown asset.
    pub fn get_asset_uri(
        &self,
        asset_id: u32,
        options: Options,
    ) -> QueryFuture<Option<Bytes>, T::Out> {
        let asset_id = helpers::serialize(&asset_id);
        self.query.plain(
            "multiAsset::getAssetUri",
            vec![asset_id],
            options,
            Some(Scheme::Nullable),
        )
    }

    /// Number of collection-wide asset entries.
    pub fn total_assets(&self, options: Options) -> QueryFuture<u32, T::Out> {
        self.query
            .plain("multiAsset::totalAssets", vec![], options, None)
    }

    /// Ids of the accepted assets of `token_id`.
    pub fn get_accepted_token_assets(
        &self,
        token_id: Id,
        options: Options,
    ) -> QueryOkFuture<Option<Vec<u32>>, Psp34Error, T::Out> {
        let token_id = helpers::serialize(&token_id);
        self.query.fallible(
            "multiAsset::getAcceptedTokenAssets",
            vec![token_id],
            options,
            Some(Scheme::Nullable),
        )
    }

    fn asset_op(
        &self,
        message: &str,
        token_id: Id,
        asset_id: u32,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let token_id = helpers::serialize(&token_id);
        let asset_id = helpers::serialize(&asset_id);
        self.query
            .fallible(message, vec![token_id, asset_id], options, None)
    }
}
