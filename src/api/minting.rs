//! `minting` facet: token issuance.
//!
//! Both messages are payable on chain: the simulation must attach the mint
//! price through [`Options::value`](crate::types::Options) or the contract
//! rejects it with a `BadMintValue`/`MintUnderpriced` rejection.

use crate::api::Facet;
use crate::helpers::{self, QueryOkFuture};
use crate::query::Query;
use crate::types::{AccountId, Options, Psp34Error};
use crate::Transport;

/// `minting` facet of the contract.
#[derive(Debug, Clone)]
pub struct Minting<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for Minting<T> {
    fn new(query: Query<T>) -> Self {
        Minting { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> Minting<T> {
    /// Mint `mint_amount` tokens to `to`.
    pub fn mint(
        &self,
        to: AccountId,
        mint_amount: u64,
        options: Options,
    ) -> QueryOkFuture<(), Psp34Error, T::Out> {
        let to = helpers::serialize(&to);
        let mint_amount = helpers::serialize(&mint_amount);
        self.query
            .fallible("minting::mint", vec![to, mint_amount], options, None)
    }

    /// Mint the next available token to the caller.
    pub fn mint_next(&self, options: Options) -> QueryOkFuture<(), Psp34Error, T::Out> {
        self.query.fallible("minting::mintNext", vec![], options, None)
    }
}

#[cfg(test)]
mod tests {
    use super::Minting;
    use crate::helpers::tests::ORIGIN;
    use crate::types::{AccountId, Psp34Error, RmrkError};
    use serde_json::json;

    query_test!(
        Minting: mint, AccountId::from(ORIGIN), 3u64
            => "minting::mint", format!(r#"["{}",3]"#, ORIGIN);
        json!({"Ok": null}) => Ok(())
    );

    query_test!(
        Minting: mint: mint_zero_tokens, AccountId::from(ORIGIN), 0u64
            => "minting::mint", format!(r#"["{}",0]"#, ORIGIN);
        json!({"Err": {"Custom": "CannotMintZeroTokens"}}) => Err(Psp34Error::custom(RmrkError::CannotMintZeroTokens))
    );

    query_test!(
        Minting: mint_next => "minting::mintNext";
        json!({"Ok": null}) => Ok(())
    );

    query_test!(
        Minting: mint_next: mint_next_underpriced => "minting::mintNext";
        json!({"Err": {"Custom": "MintUnderpriced"}}) => Err::<(), _>(Psp34Error::custom(RmrkError::MintUnderpriced))
    );
}
