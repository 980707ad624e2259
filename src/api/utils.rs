//! `utils` facet: collection utilities.

use crate::api::Facet;
use crate::helpers::{self, QueryFuture, QueryOkFuture};
use crate::query::Query;
use crate::scheme::Scheme;
use crate::types::{Options, Psp34Error, U256};
use crate::Transport;

/// `utils` facet of the contract.
#[derive(Debug, Clone)]
pub struct Utils<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for Utils<T> {
    fn new(query: Query<T>) -> Self {
        Utils { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> Utils<T> {
    /// URI of token `token_id`: the collection base URI with
    /// `<token_id>.json` appended.
    pub fn token_uri(
        &self,
        token_id: u64,
        options: Options,
    ) -> QueryOkFuture<String, Psp34Error, T::Out> {
        let token_id = helpers::serialize(&token_id);
        self.query
            .fallible("utils::tokenUri", vec![token_id], options, Some(Scheme::Utf8))
    }

    /// Maximum amount of mintable tokens in this collection.
    pub fn max_supply(&self, options: Options) -> QueryFuture<u64, T::Out> {
        self.query.plain("utils::maxSupply", vec![], options, None)
    }

    /// Set the collection base URI. Owner only.
    pub fn set_base_uri(
        &self,
        uri: String,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let uri = helpers::serialize(&uri);
        self.query
            .fallible("utils::setBaseUri", vec![uri], options, None)
    }

    /// Price of minting a single token.
    pub fn price(&self, options: Options) -> QueryFuture<U256, T::Out> {
        self.query
            .plain("utils::price", vec![], options, Some(Scheme::Number))
    }

    /// Withdraw the contract balance to the owner. Owner only.
    pub fn withdraw(&self, options: Options) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.query.fallible("utils::withdraw", vec![], options, None)
    }
}

#[cfg(test)]
mod tests {
    use super::Utils;
    use crate::types::{Psp34Error, RmrkError, U256};
    use serde_json::json;

    query_test!(
        Utils: token_uri, 1u64
            => "utils::tokenUri", "[1]";
        json!({"Ok": "0x697066733a2f2f782f312e6a736f6e"}) => Ok("ipfs://x/1.json".to_string())
    );

    query_test!(
        Utils: token_uri: token_uri_of_missing_token, 404u64
            => "utils::tokenUri", "[404]";
        json!({"Err": "TokenNotExists"}) => Err(Psp34Error::TokenNotExists)
    );

    query_test!(
        Utils: max_supply => "utils::maxSupply";
        json!(10000) => 10000
    );

    query_test!(
        Utils: set_base_uri, "ipfs://x/".to_string()
            => "utils::setBaseUri", r#"["ipfs://x/"]"#;
        json!({"Ok": null}) => Ok(())
    );

    query_test!(
        Utils: set_base_uri: set_base_uri_by_non_owner, "ipfs://x/".to_string()
            => "utils::setBaseUri", r#"["ipfs://x/"]"#;
        json!({"Err": {"Custom": "NotAuthorised"}}) => Err(Psp34Error::custom(RmrkError::NotAuthorised))
    );

    query_test!(
        Utils: price => "utils::price";
        json!("1000000000000000000") => U256::from_dec_str("1000000000000000000").unwrap()
    );

    query_test!(
        Utils: withdraw: withdraw_failure_is_a_value => "utils::withdraw";
        json!({"Err": {"Custom": "WithdrawalFailed"}}) => Err::<(), _>(Psp34Error::custom(RmrkError::WithdrawalFailed))
    );
}
