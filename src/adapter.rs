//! JSON endpoints: body → remap → bind → handler → JSON.
//!
//! A [`JsonEndpoint`] ties one handler to one [`RemapSpec`] at registration
//! time. The handler declares its parameter names up front; the spec is
//! checked against them once, in [`JsonEndpoint::new`], so a route that could
//! never bind its arguments is refused before the server starts.
//!
//! ```rust
//! use remapi::{Arguments, Error, JsonEndpoint, RemapSpec, Router};
//! use remapi::Method;
//! use serde_json::{Value, json};
//!
//! fn add(args: Arguments) -> Result<Value, Error> {
//!     let a = args.value("a")?.as_i64().unwrap_or_default();
//!     let b = args.value("b")?.as_i64().unwrap_or_default();
//!     Ok(json!({ "sum": a + b }))
//! }
//!
//! # fn main() -> Result<(), remapi::SignatureError> {
//! let endpoint = JsonEndpoint::new(&["a", "b"], RemapSpec::keys(["x", "y"]), add)?;
//! let app = Router::new().on_json(Method::POST, "/add", endpoint);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::error::Error;
use crate::handler::{BoxFuture, ErasedHandler};
use crate::remap::{CallArgs, RemapSpec, remap};
use crate::request::Request;
use crate::response::{IntoResponse, Json, Response};

/// A handler's declared parameter names, in call order.
pub type Params = &'static [&'static str];

/// Why a [`JsonEndpoint`] could not be registered.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum SignatureError {
    #[error("parameter `{0}` is declared twice")]
    DuplicateParam(&'static str),

    #[error("{keys} key(s) remapped onto {params} parameter(s)")]
    KeyCount { params: usize, keys: usize },

    #[error("rename target `{0}` is not a declared parameter")]
    UnknownTarget(String),

    #[error("rename target `{0}` is listed twice")]
    DuplicateTarget(String),
}

/// Why remapped arguments did not fit the handler's parameters.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum BindError {
    #[error("takes {expected} positional argument(s) but {given} were given")]
    TooManyPositional { expected: usize, given: usize },

    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    #[error("got an unexpected keyword argument `{0}`")]
    UnexpectedKeyword(String),
}

/// Call arguments bound onto a handler's declared parameters.
///
/// Every declared parameter has exactly one value.
#[derive(Clone, Debug, PartialEq)]
pub struct Arguments {
    params: Params,
    values: Vec<Value>,
}

impl Arguments {
    /// Binds remapped call arguments onto `params`.
    ///
    /// Positional values fill parameters left to right. Keyword entries must
    /// each name a declared parameter, and every parameter must be supplied.
    pub fn bind(params: Params, args: CallArgs) -> Result<Self, BindError> {
        let values = match args {
            CallArgs::Positional(values) => {
                if values.len() > params.len() {
                    return Err(BindError::TooManyPositional {
                        expected: params.len(),
                        given: values.len(),
                    });
                }
                if let Some(&missing) = params.get(values.len()) {
                    return Err(BindError::MissingArgument(missing));
                }
                values
            }
            CallArgs::Keyword(mut map) => {
                let found: Vec<_> = params.iter().map(|&name| map.remove(name)).collect();
                if let Some(extra) = map.keys().next() {
                    return Err(BindError::UnexpectedKeyword(extra.clone()));
                }
                found
                    .into_iter()
                    .zip(params)
                    .map(|(value, &name)| value.ok_or(BindError::MissingArgument(name)))
                    .collect::<Result<Vec<_>, _>>()?
            }
        };
        Ok(Self { params, values })
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        let idx = self.params.iter().position(|&p| p == name)?;
        self.values.get(idx)
    }

    /// Like [`get`](Self::get), but an undeclared name is a handler error.
    pub fn value(&self, name: &str) -> Result<&Value, Error> {
        self.get(name)
            .ok_or_else(|| Error::Handler(format!("no parameter named `{name}`")))
    }

    /// Text form of an argument for message building: strings as-is, any
    /// other JSON value as its compact JSON text (`true`, `null`, `["a"]`),
    /// not a Python-style repr such as `True` or `None`.
    pub fn text(&self, name: &str) -> Result<String, Error> {
        Ok(match self.value(name)? {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

type BoxedJsonFn = Arc<dyn Fn(Arguments) -> Response + Send + Sync + 'static>;

/// One route's request adapter.
#[derive(Clone)]
pub struct JsonEndpoint {
    params: Params,
    spec: RemapSpec,
    handler: BoxedJsonFn,
}

impl JsonEndpoint {
    /// Binds `handler`, declared with `params`, to `spec`.
    ///
    /// Refuses specs that could never produce a valid call: duplicate
    /// parameter names, a key list whose length differs from the parameter
    /// count, or a rename target that is not a parameter (or appears twice).
    pub fn new<F, R>(params: Params, spec: RemapSpec, handler: F) -> Result<Self, SignatureError>
    where
        F: Fn(Arguments) -> Result<R, Error> + Send + Sync + 'static,
        R: Serialize,
    {
        check_signature(params, &spec)?;
        let handler: BoxedJsonFn = Arc::new(move |args| handler(args).map(Json).into_response());
        Ok(Self { params, spec, handler })
    }

    pub fn params(&self) -> Params { self.params }
    pub fn spec(&self) -> &RemapSpec { &self.spec }

    /// Runs the full pipeline for one request.
    ///
    /// Nothing is caught here: a body, remap or binding failure is returned
    /// as-is and the handler is not called.
    pub fn respond(&self, req: &Request) -> Result<Response, Error> {
        let payload = req.json_object()?;
        let args = remap(payload, &self.spec)?;
        debug!(path = req.path(), ?args, "remapped request body");
        let args = Arguments::bind(self.params, args)?;
        Ok((self.handler)(args))
    }
}

impl ErasedHandler for JsonEndpoint {
    fn call(&self, req: Request) -> BoxFuture {
        let res = self.respond(&req).into_response();
        Box::pin(std::future::ready(res))
    }
}

impl fmt::Debug for JsonEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonEndpoint")
            .field("params", &self.params)
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

fn check_signature(params: Params, spec: &RemapSpec) -> Result<(), SignatureError> {
    let mut seen = HashSet::new();
    if let Some(dup) = params.iter().copied().find(|p| !seen.insert(*p)) {
        return Err(SignatureError::DuplicateParam(dup));
    }

    if spec.is_pass_through() {
        return Ok(());
    }
    match spec {
        RemapSpec::PassThrough => Ok(()),
        RemapSpec::Keys(keys) if keys.len() != params.len() => Err(SignatureError::KeyCount {
            params: params.len(),
            keys: keys.len(),
        }),
        RemapSpec::Keys(_) => Ok(()),
        RemapSpec::Rename(pairs) => {
            let mut targets = HashSet::new();
            for (target, _) in pairs {
                if !params.contains(&target.as_str()) {
                    return Err(SignatureError::UnknownTarget(target.clone()));
                }
                if !targets.insert(target.as_str()) {
                    return Err(SignatureError::DuplicateTarget(target.clone()));
                }
            }
            Ok(())
        }
    }
}
