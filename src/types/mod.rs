//! Contract-side value types.

mod account;
mod bytes;
mod call;
mod errors;
mod id;
mod outcome;

pub use self::account::AccountId;
pub use self::bytes::Bytes;
pub use self::call::{CallRequest, Options};
pub use self::errors::{OwnableError, Psp34Error, RmrkError};
pub use self::id::Id;
pub use self::outcome::{CallOutcome, QueryOutput};

pub use ethereum_types::U256;

/// A child token held by a parent: collection address and token id within
/// that collection.
pub type ChildNft = (AccountId, Id);
