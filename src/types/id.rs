use super::Bytes;
use serde::{Deserialize, Serialize};

/// PSP34 token identifier.
///
/// Mirrors the on-chain `Id` enum. The JSON form is externally tagged:
/// `{"U64": 1}`, `{"Bytes": "0x0102"}`, ...
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Id {
    /// 8-bit identifier.
    U8(u8),
    /// 16-bit identifier.
    U16(u16),
    /// 32-bit identifier.
    U32(u32),
    /// 64-bit identifier.
    U64(u64),
    /// 128-bit identifier.
    U128(u128),
    /// Arbitrary byte identifier.
    Bytes(Bytes),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_externally_tagged() {
        assert_eq!(serde_json::to_string(&Id::U64(1)).unwrap(), r#"{"U64":1}"#);
        assert_eq!(
            serde_json::to_string(&Id::Bytes(vec![1, 2].into())).unwrap(),
            r#"{"Bytes":"0x0102"}"#
        );

        assert_eq!(serde_json::from_str::<Id>(r#"{"U32":7}"#).unwrap(), Id::U32(7));
        assert_eq!(
            serde_json::from_str::<Id>(r#"{"Bytes":[1,2]}"#).unwrap(),
            Id::Bytes(vec![1, 2].into())
        );
        assert!(serde_json::from_str::<Id>(r#"{"U64":"0x1"}"#).is_err());
    }
}
