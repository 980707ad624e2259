use serde::{Deserialize, Serialize};
use std::fmt;

/// SS58-encoded account address.
///
/// Kept opaque: the node is the authority on address validity, this client
/// only moves the string around.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Wrap an SS58 address string.
    pub fn new<T: Into<String>>(address: T) -> Self {
        AccountId(address.into())
    }

    /// The address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(address: &str) -> Self {
        AccountId(address.into())
    }
}

impl From<String> for AccountId {
    fn from(address: String) -> Self {
        AccountId(address)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
