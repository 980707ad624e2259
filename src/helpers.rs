//! Client helpers.

use crate::scheme::{Decoded, Scheme};
use crate::types::{CallOutcome, QueryOutput};
use crate::{error, rpc};
use futures::{
    ready,
    task::{Context, Poll},
    Future,
};
use pin_project::pin_project;
use serde::Deserialize;
use std::{marker::PhantomData, pin::Pin};

/// Takes any type which is deserializable from rpc::Value and such a value and
/// yields the deserialized value
pub fn decode<T: serde::de::DeserializeOwned>(value: rpc::Value) -> error::Result<T> {
    serde_json::from_value(value).map_err(Into::into)
}

/// Serialize a type. Panics if the type is returns error during serialization.
pub fn serialize<T: serde::Serialize>(t: &T) -> rpc::Value {
    serde_json::to_value(t).expect("Types never fail to serialize.")
}

/// Serializes a request to string. Panics if the type returns error during serialization.
pub fn to_string<T: serde::Serialize>(request: &T) -> String {
    serde_json::to_string(&request).expect("String serialization never fails.")
}

/// Build a JSON-RPC request.
pub fn build_request(id: usize, method: &str, params: Vec<rpc::Value>) -> rpc::Call {
    rpc::Call::MethodCall(rpc::MethodCall {
        jsonrpc: Some(rpc::Version::V2),
        method: method.into(),
        params: rpc::Params::Array(params),
        id: rpc::Id::Num(id as u64),
    })
}

/// Parse `rpc::Output` into `Result`.
pub fn to_result_from_output(output: rpc::Output) -> error::Result<rpc::Value> {
    match output {
        rpc::Output::Success(success) => Ok(success.result),
        rpc::Output::Failure(failure) => Err(error::Error::Rpc(failure.error)),
    }
}

/// On-chain success/error union in its raw, externally tagged JSON form.
#[derive(Debug, Deserialize)]
enum RawResult {
    Ok(rpc::Value),
    Err(rpc::Value),
}

/// Future yielding a plain-mode query result.
///
/// Decodes the execution envelope from the transport, applies the optional
/// decoding scheme and deserializes the final value.
#[pin_project]
#[derive(Debug)]
pub struct QueryFuture<T, F> {
    #[pin]
    inner: F,
    scheme: Option<Scheme>,
    _marker: PhantomData<T>,
}

impl<T, F> QueryFuture<T, F> {
    /// Create a new QueryFuture wrapping the inner future.
    pub fn new(inner: F, scheme: Option<Scheme>) -> Self {
        QueryFuture {
            inner,
            scheme,
            _marker: PhantomData,
        }
    }
}

impl<T, F> Future for QueryFuture<T, F>
where
    T: serde::de::DeserializeOwned,
    F: Future<Output = error::Result<rpc::Value>>,
{
    type Output = error::Result<QueryOutput<T>>;

    fn poll(self: Pin<&mut Self>, ctx: &mut Context) -> Poll<Self::Output> {
        let this = self.project();
        let raw = ready!(this.inner.poll(ctx));
        let scheme = this.scheme.take();
        Poll::Ready(raw.and_then(|raw| {
            let CallOutcome {
                gas_consumed,
                gas_required,
                value,
            } = decode(raw)?;
            let value = decode(Decoded::new(value, scheme).finish()?)?;
            Ok(QueryOutput {
                value,
                gas_consumed,
                gas_required,
            })
        }))
    }
}

/// Future yielding a fallible-mode query result.
///
/// The on-chain return type is itself a success/error union; the success
/// branch is unwrapped and scheme-normalized, the error branch is decoded
/// untransformed into the domain error type and surfaced as an ordinary
/// value.
#[pin_project]
#[derive(Debug)]
pub struct QueryOkFuture<T, E, F> {
    #[pin]
    inner: F,
    scheme: Option<Scheme>,
    _marker: PhantomData<(T, E)>,
}

impl<T, E, F> QueryOkFuture<T, E, F> {
    /// Create a new QueryOkFuture wrapping the inner future.
    pub fn new(inner: F, scheme: Option<Scheme>) -> Self {
        QueryOkFuture {
            inner,
            scheme,
            _marker: PhantomData,
        }
    }
}

impl<T, E, F> Future for QueryOkFuture<T, E, F>
where
    T: serde::de::DeserializeOwned,
    E: serde::de::DeserializeOwned,
    F: Future<Output = error::Result<rpc::Value>>,
{
    type Output = error::Result<QueryOutput<Result<T, E>>>;

    fn poll(self: Pin<&mut Self>, ctx: &mut Context) -> Poll<Self::Output> {
        let this = self.project();
        let raw = ready!(this.inner.poll(ctx));
        let scheme = this.scheme.take();
        Poll::Ready(raw.and_then(|raw| {
            let CallOutcome {
                gas_consumed,
                gas_required,
                value,
            } = decode(raw)?;
            let value = match decode(value)? {
                RawResult::Ok(value) => Ok(decode(Decoded::new(value, scheme).finish()?)?),
                RawResult::Err(err) => Err(decode(err)?),
            };
            Ok(QueryOutput {
                value,
                gas_consumed,
                gas_required,
            })
        }))
    }
}
