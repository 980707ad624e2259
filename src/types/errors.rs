//! Contract-level error values.
//!
//! These are decoded out of the error branch of fallible messages. They are
//! ordinary values, not `Err`s of the transport channel: a query resolving
//! to `Ok(Err(Psp34Error::TokenNotExists))` completed successfully and the
//! contract rejected it.

use serde::{Deserialize, Serialize};

/// PSP34 standard errors.
///
/// One shared set across the psp34, enumeration, utility, minting, nesting
/// and multi-asset facets: the contract wraps its own rejections into
/// `Custom` payloads, see [`RmrkError`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Psp34Error {
    /// Contract-specific rejection carried as a payload string.
    Custom(String),
    /// Caller tried to approve their own account.
    SelfApprove,
    /// Caller is neither owner nor approved operator of the token.
    NotApproved,
    /// Token already exists.
    TokenExists,
    /// Token does not exist.
    TokenNotExists,
    /// Receiver rejected the safe transfer.
    SafeTransferCheckFailed(String),
}

impl Psp34Error {
    /// Wrap an RMRK rejection the way the contract does.
    pub fn custom(err: RmrkError) -> Self {
        Psp34Error::Custom(err.as_str().into())
    }

    /// Recover the RMRK rejection carried by a `Custom` payload, if any.
    pub fn as_rmrk(&self) -> Option<RmrkError> {
        match self {
            Psp34Error::Custom(payload) => RmrkError::from_payload(payload),
            _ => None,
        }
    }
}

/// Ownership-administration errors (`ownable` facet).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnableError {
    /// Caller is not the contract owner.
    CallerIsNotOwner,
    /// No new owner was set.
    NewOwnerIsNotSet,
}

/// RMRK-specific rejections, transported as [`Psp34Error::Custom`] payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RmrkError {
    /// Caller is not authorised to act on the token.
    NotAuthorised,
    /// Caller does not own the token.
    NotTokenOwner,
    /// Mint amount of zero.
    CannotMintZeroTokens,
    /// No token ids left to mint.
    CollectionIsFull,
    /// Collection is full or locked for further minting.
    CollectionFullOrLocked,
    /// Attached value does not cover the mint price.
    MintUnderpriced,
    /// Attached value does not match amount times price.
    BadMintValue,
    /// Child is already accepted on the parent.
    AlreadyAddedChild,
    /// Child is already pending on the parent.
    AddingPendingChild,
    /// Child is not present on the parent.
    ChildNotFound,
    /// Child collection contract is not approved.
    ChildContractNotApproved,
    /// Balance withdrawal failed.
    WithdrawalFailed,
}

impl RmrkError {
    /// The payload string the contract wraps into `Psp34Error::Custom`.
    pub fn as_str(&self) -> &'static str {
        use self::RmrkError::*;
        match self {
            NotAuthorised => "NotAuthorised",
            NotTokenOwner => "NotTokenOwner",
            CannotMintZeroTokens => "CannotMintZeroTokens",
            CollectionIsFull => "CollectionIsFull",
            CollectionFullOrLocked => "CollectionFullOrLocked",
            MintUnderpriced => "MintUnderpriced",
            BadMintValue => "BadMintValue",
            AlreadyAddedChild => "AlreadyAddedChild",
            AddingPendingChild => "AddingPendingChild",
            ChildNotFound => "ChildNotFound",
            ChildContractNotApproved => "ChildContractNotApproved",
            WithdrawalFailed => "WithdrawalFailed",
        }
    }

    fn from_payload(payload: &str) -> Option<Self> {
        use self::RmrkError::*;
        Some(match payload {
            "NotAuthorised" => NotAuthorised,
            "NotTokenOwner" => NotTokenOwner,
            "CannotMintZeroTokens" => CannotMintZeroTokens,
            "CollectionIsFull" => CollectionIsFull,
            "CollectionFullOrLocked" => CollectionFullOrLocked,
            "MintUnderpriced" => MintUnderpriced,
            "BadMintValue" => BadMintValue,
            "AlreadyAddedChild" => AlreadyAddedChild,
            "AddingPendingChild" => AddingPendingChild,
            "ChildNotFound" => ChildNotFound,
            "ChildContractNotApproved" => ChildContractNotApproved,
            "WithdrawalFailed" => WithdrawalFailed,
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_unit_and_payload_variants() {
        assert_eq!(
            serde_json::from_str::<Psp34Error>(r#""TokenNotExists""#).unwrap(),
            Psp34Error::TokenNotExists
        );
        assert_eq!(
            serde_json::from_str::<Psp34Error>(r#"{"Custom":"NotAuthorised"}"#).unwrap(),
            Psp34Error::custom(RmrkError::NotAuthorised)
        );
        assert_eq!(
            serde_json::from_str::<OwnableError>(r#""CallerIsNotOwner""#).unwrap(),
            OwnableError::CallerIsNotOwner
        );
    }

    #[test]
    fn rmrk_payloads_round_trip() {
        let all = [
            RmrkError::NotAuthorised,
            RmrkError::NotTokenOwner,
            RmrkError::CannotMintZeroTokens,
            RmrkError::CollectionIsFull,
            RmrkError::CollectionFullOrLocked,
            RmrkError::MintUnderpriced,
            RmrkError::BadMintValue,
            RmrkError::AlreadyAddedChild,
            RmrkError::AddingPendingChild,
            RmrkError::ChildNotFound,
            RmrkError::ChildContractNotApproved,
            RmrkError::WithdrawalFailed,
        ];
        for err in all.iter().copied() {
            assert_eq!(Psp34Error::custom(err).as_rmrk(), Some(err));
        }
        assert_eq!(Psp34Error::Custom("SomethingElse".into()).as_rmrk(), None);
        assert_eq!(Psp34Error::TokenNotExists.as_rmrk(), None);
    }
}
