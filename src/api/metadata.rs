//! `psp34Metadata` facet: collection attributes.

use crate::api::Facet;
use crate::helpers::{self, QueryFuture};
use crate::query::Query;
use crate::scheme::Scheme;
use crate::types::{Bytes, Id, Options};
use crate::Transport;

/// `psp34Metadata` facet of the contract.
#[derive(Debug, Clone)]
pub struct Metadata<T> {
    query: Query<T>,
}

impl<T: Transport> Facet<T> for Metadata<T> {
    fn new(query: Query<T>) -> Self {
        Metadata { query }
    }

    fn query(&self) -> &Query<T> {
        &self.query
    }
}

impl<T: Transport> Metadata<T> {
    /// Attribute `key` of token `id`, `None` when unset. Collection-wide
    /// attributes (`baseUri`, ...) live on the collection id.
    pub fn get_attribute(
        &self,
        id: Id,
        key: Bytes,
        options: Options,
    ) -> QueryFuture<Option<Bytes>, T::Out> {
        let id = helpers::serialize(&id);
        let key = helpers::serialize(&key);
        self.query.plain(
            "psp34Metadata::getAttribute",
            vec![id, key],
            options,
            Some(Scheme::Nullable),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::Metadata;
    use crate::types::{Bytes, Id};
    use serde_json::json;

    query_test!(
        Metadata: get_attribute, Id::U64(1), Bytes::from(b"baseUri".to_vec())
            => "psp34Metadata::getAttribute", r#"[{"U64":1},"0x62617365557269"]"#;
        json!({"Some": "0x697066733a2f2f78"}) => Some(Bytes::from(b"ipfs://x".to_vec()))
    );

    query_test!(
        Metadata: get_attribute: get_attribute_unset, Id::U64(1), Bytes::from(b"color".to_vec())
            => "psp34Metadata::getAttribute", r#"[{"U64":1},"0x636f6c6f72"]"#;
        json!(null) => None
    );
}
