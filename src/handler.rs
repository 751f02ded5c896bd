//! Type erasure for routed handlers.
//!
//! The router keeps one radix tree per method and stores every route's
//! handler behind the same trait object:
//!
//! ```text
//! JsonEndpoint::new(params, spec, f)?      ← router.on_json(POST, "/hello", …)
//!        ↓ implements ErasedHandler
//! Arc::new(endpoint)  stored as BoxedHandler
//!        ↓
//! handler.call(req)   at request time
//! ```
//!
//! Per request that costs one `Arc` clone and one virtual call.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::request::Request;
use crate::response::Response;

/// A heap-allocated, type-erased future that resolves to a [`Response`].
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Dispatch interface the router calls into.
pub(crate) trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A type-erased handler shared across concurrent requests.
pub(crate) type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;
