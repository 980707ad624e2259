//! Test Transport

use crate::{error, helpers, rpc, Error, RequestId, Transport};
use futures::future::{self, BoxFuture, FutureExt};
use std::{cell::RefCell, collections::VecDeque, rc::Rc};

type Result<T> = BoxFuture<'static, error::Result<T>>;

/// Gas consumed reported by outcomes queued via `set_outcome`/`add_outcome`.
pub const GAS_CONSUMED: u64 = 7_357_000_000;
/// Gas required reported by outcomes queued via `set_outcome`/`add_outcome`.
pub const GAS_REQUIRED: u64 = 9_480_000_000;

/// Test Transport
///
/// Records every executed call and replays queued responses in order, so a
/// test can both drive the decode pipeline and assert the exact descriptor
/// (message path, argument order, options) a query produced.
#[derive(Debug, Default, Clone)]
pub struct TestTransport {
    asserted: usize,
    requests: Rc<RefCell<Vec<(String, Vec<rpc::Value>)>>>,
    responses: Rc<RefCell<VecDeque<rpc::Value>>>,
}

impl Transport for TestTransport {
    type Out = Result<rpc::Value>;

    fn prepare(&self, method: &str, params: Vec<rpc::Value>) -> (RequestId, rpc::Call) {
        let request = helpers::build_request(1, method, params.clone());
        self.requests.borrow_mut().push((method.into(), params));
        (self.requests.borrow().len(), request)
    }

    fn send(&self, id: RequestId, request: rpc::Call) -> Result<rpc::Value> {
        future::ready(match self.responses.borrow_mut().pop_front() {
            Some(response) => Ok(response),
            None => {
                println!("Unexpected request (id: {:?}): {:?}", id, request);
                Err(Error::Unreachable)
            }
        })
        .boxed()
    }
}

impl TestTransport {
    /// Set response
    pub fn set_response(&mut self, value: rpc::Value) {
        *self.responses.borrow_mut() = vec![value].into();
    }

    /// Add response
    pub fn add_response(&mut self, value: rpc::Value) {
        self.responses.borrow_mut().push_back(value);
    }

    /// Set a single successful call outcome carrying `value`.
    pub fn set_outcome(&mut self, value: rpc::Value) {
        self.set_response(outcome(value));
    }

    /// Queue an additional successful call outcome carrying `value`.
    pub fn add_outcome(&mut self, value: rpc::Value) {
        self.add_response(outcome(value));
    }

    /// All recorded requests, in execution order.
    pub fn requests(&self) -> Vec<(String, Vec<rpc::Value>)> {
        self.requests.borrow().clone()
    }

    /// Assert request
    pub fn assert_request(&mut self, method: &str, params: &[String]) {
        let idx = self.asserted;
        self.asserted += 1;

        let (m, p) = self.requests.borrow().get(idx).expect("Expected result.").clone();
        assert_eq!(&m, method);
        let p: Vec<String> = p.into_iter().map(|p| serde_json::to_string(&p).unwrap()).collect();
        assert_eq!(p, params);
    }

    /// Assert no more requests
    pub fn assert_no_more_requests(&self) {
        let requests = self.requests.borrow();
        assert_eq!(
            self.asserted,
            requests.len(),
            "Expected no more requests, got: {:?}",
            &requests[self.asserted..]
        );
    }
}

/// Wrap a raw message value into the execution envelope a contracts node
/// returns for a simulated call.
fn outcome(value: rpc::Value) -> rpc::Value {
    serde_json::json!({
        "gasConsumed": GAS_CONSUMED,
        "gasRequired": GAS_REQUIRED,
        "value": value,
    })
}
