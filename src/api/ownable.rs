//! `ownable` facet: contract ownership administration.

use crate::api::Facet;
use crate::helpers::{self, QueryFuture, QueryOkFuture};
use crate::query::Query;
use crate::types::{AccountId, Options, OwnableError};
use crate::Transport;

/// `ownable` facet of the contract.
#[derive(Debug, Clone)]
pub struct Ownable<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for Ownable<T> {
    fn new(query: Query<T>) -> Self {
        Ownable { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> Ownable<T> {
    /// Hand contract ownership over to `new_owner`.
    pub fn transfer_ownership(
        &self,
        new_owner: AccountId,
        options: Options,
    ) -> QueryOkFuture<(), OwnableError, T::Out> {
        let new_owner = helpers::serialize(&new_owner);
        self.query
            .fallible("ownable::transferOwnership", vec![new_owner], options, None)
    }

    /// Give up contract ownership, leaving the contract without an owner.
    pub fn renounce_ownership(&self, options: Options) -> QueryOkFuture<(), OwnableError, T::Out> {
        self.query
            .fallible("ownable::renounceOwnership", vec![], options, None)
    }

    /// Current contract owner.
    pub fn owner(&self, options: Options) -> QueryFuture<AccountId, T::Out> {
        self.query.plain("ownable::owner", vec![], options, None)
    }
}

#[cfg(test)]
mod tests {
    use super::Ownable;
    use crate::helpers::tests::ORIGIN;
    use crate::types::{AccountId, OwnableError};
    use serde_json::json;

    const NEW_OWNER: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

    query_test!(
        Ownable: transfer_ownership, AccountId::from(NEW_OWNER)
            => "ownable::transferOwnership", format!(r#"["{}"]"#, NEW_OWNER);
        json!({"Ok": null}) => Ok(())
    );

    query_test!(
        Ownable: transfer_ownership: transfer_ownership_by_non_owner, AccountId::from(NEW_OWNER)
            => "ownable::transferOwnership", format!(r#"["{}"]"#, NEW_OWNER);
        json!({"Err": "CallerIsNotOwner"}) => Err(OwnableError::CallerIsNotOwner)
    );

    query_test!(
        Ownable: renounce_ownership => "ownable::renounceOwnership";
        json!({"Ok": null}) => Ok(())
    );

    query_test!(
        Ownable: owner => "ownable::owner";
        json!(ORIGIN) => AccountId::from(ORIGIN)
    );
}
