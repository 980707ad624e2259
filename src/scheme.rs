//! Type-directed decoding schemes.
//!
//! Some return shapes need normalization before typed decoding: option
//! tagging, big integers rendered as strings, byte payloads standing in for
//! UTF-8 text, token id variant maps with stringified numbers. The original
//! contract metadata describes these shapes through opaque numeric type
//! descriptors; here each distinct shape is one [`Scheme`] variant resolved
//! at compile time.

use crate::{error, rpc, Error};
use ethereum_types::U256;

/// Decoding scheme for a composite return shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scheme {
    /// Option-tagged value: `{"Some": v}`, `{"None": null}` or bare `null`.
    Nullable,
    /// Big unsigned integer: decimal string, `0x` hex string or number.
    Number,
    /// Byte payload (hex string or array of bytes) carrying UTF-8 text.
    Utf8,
    /// Token identifier variant map, possibly with stringified payload.
    TokenId,
}

impl Scheme {
    /// Normalize `value` into the JSON shape its typed decode expects.
    ///
    /// Pure and total over the shapes the transport can produce for this
    /// scheme; anything else is a `Decoder` error.
    pub fn apply(self, value: rpc::Value) -> error::Result<rpc::Value> {
        match self {
            Scheme::Nullable => Ok(untag_option(value)),
            Scheme::Number => number(value),
            Scheme::Utf8 => utf8(value),
            Scheme::TokenId => token_id(value),
        }
    }
}

/// Raw transport value paired with any decoding it still requires.
#[derive(Clone, Debug, PartialEq)]
pub enum Decoded {
    /// Already in its final JSON shape.
    Ready(rpc::Value),
    /// Needs scheme normalization before typed decoding.
    Pending(rpc::Value, Scheme),
}

impl Decoded {
    /// Pair a raw value with the scheme it requires, if any.
    pub fn new(value: rpc::Value, scheme: Option<Scheme>) -> Self {
        match scheme {
            Some(scheme) => Decoded::Pending(value, scheme),
            None => Decoded::Ready(value),
        }
    }

    /// Resolve to the final JSON shape.
    pub fn finish(self) -> error::Result<rpc::Value> {
        match self {
            Decoded::Ready(value) => Ok(value),
            Decoded::Pending(value, scheme) => scheme.apply(value),
        }
    }
}

fn untag_option(value: rpc::Value) -> rpc::Value {
    if let rpc::Value::Object(mut map) = value {
        if map.len() == 1 {
            if let Some(inner) = map.remove("Some") {
                return inner;
            }
            if map.contains_key("None") {
                return rpc::Value::Null;
            }
        }
        return rpc::Value::Object(map);
    }
    value
}

fn number(value: rpc::Value) -> error::Result<rpc::Value> {
    let number = match value {
        rpc::Value::Number(ref n) => n
            .as_u64()
            .map(U256::from)
            .ok_or_else(|| Error::Decoder(format!("expected unsigned number, got: {}", value)))?,
        rpc::Value::String(ref s) => match s.strip_prefix("0x") {
            Some(hex) => U256::from_str_radix(hex, 16)
                .map_err(|e| Error::Decoder(format!("invalid hex number: {:?}", e)))?,
            None => U256::from_dec_str(s)
                .map_err(|e| Error::Decoder(format!("invalid decimal number: {:?}", e)))?,
        },
        other => return Err(Error::Decoder(format!("expected number, got: {}", other))),
    };
    Ok(rpc::Value::String(format!("0x{:x}", number)))
}

fn utf8(value: rpc::Value) -> error::Result<rpc::Value> {
    let bytes = match value {
        // Already text, unless it is a hex rendering of the bytes.
        rpc::Value::String(s) => match s.strip_prefix("0x") {
            Some(hex) => hex::decode(hex)?,
            None => return Ok(rpc::Value::String(s)),
        },
        rpc::Value::Array(values) => values.iter().map(byte).collect::<error::Result<_>>()?,
        other => return Err(Error::Decoder(format!("expected bytes, got: {}", other))),
    };
    String::from_utf8(bytes)
        .map(rpc::Value::String)
        .map_err(|e| Error::Decoder(format!("invalid utf-8 payload: {}", e)))
}

fn token_id(value: rpc::Value) -> error::Result<rpc::Value> {
    let map = match value {
        rpc::Value::Object(map) => map,
        other => return Err(Error::Decoder(format!("expected id variant map, got: {}", other))),
    };
    if map.len() != 1 {
        return Err(Error::Decoder(format!(
            "expected single id variant, got {} keys",
            map.len()
        )));
    }
    let (variant, payload) = map.into_iter().next().expect("One entry checked above; qed");
    let payload = match variant.as_str() {
        "U8" | "U16" | "U32" | "U64" | "U128" => numeric_payload(payload)?,
        // `Bytes` payloads decode through the `Bytes` type as-is.
        "Bytes" => payload,
        other => return Err(Error::Decoder(format!("unknown id variant: {}", other))),
    };
    let mut normalized = serde_json::Map::with_capacity(1);
    normalized.insert(variant, payload);
    Ok(rpc::Value::Object(normalized))
}

fn numeric_payload(value: rpc::Value) -> error::Result<rpc::Value> {
    match value {
        rpc::Value::Number(n) => Ok(rpc::Value::Number(n)),
        rpc::Value::String(ref s) => {
            let parsed = match s.strip_prefix("0x") {
                Some(hex) => u64::from_str_radix(hex, 16),
                None => s.parse::<u64>(),
            }
            .map_err(|e| Error::Decoder(format!("invalid id payload: {:?}", e)))?;
            Ok(rpc::Value::Number(parsed.into()))
        }
        other => Err(Error::Decoder(format!("expected id payload, got: {}", other))),
    }
}

fn byte(value: &rpc::Value) -> error::Result<u8> {
    value
        .as_u64()
        .and_then(|b| if b <= u8::MAX as u64 { Some(b as u8) } else { None })
        .ok_or_else(|| Error::Decoder(format!("expected byte, got: {}", value)))
}
