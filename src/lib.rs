//! # remapi
//!
//! A minimal HTTP JSON API. Each endpoint takes a JSON object, remaps its
//! keys onto a handler's declared parameters, calls the handler and answers
//! with the handler's result as JSON.
//!
//! ## The pipeline
//!
//! ```text
//! POST body ─▶ Request::json_object ─▶ remap(spec) ─▶ Arguments::bind ─▶ handler ─▶ Json
//! ```
//!
//! - [`RemapSpec`] — pass-through, ordered key list, or key rename
//! - [`JsonEndpoint`] — one handler bound to one spec, checked at registration
//! - [`Router`] — radix-tree routing per method via [`matchit`]
//! - [`Server`] — hyper, HTTP/1.1 + HTTP/2, graceful shutdown on SIGTERM / Ctrl-C
//!
//! Nothing is shared between requests except the read-only route table.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use remapi::{Arguments, Error, JsonEndpoint, Method, RemapSpec, Router, Server};
//! use serde_json::{Value, json};
//!
//! fn hello(args: Arguments) -> Result<Value, Error> {
//!     Ok(json!({ "status": 0, "message": format!("Hello, {}!", args.text("name")?) }))
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let app = Router::new().on_json(
//!         Method::POST,
//!         "/hello",
//!         JsonEndpoint::new(&["name"], RemapSpec::rename([("name", "who")]), hello)?,
//!     );
//!
//!     Server::bind("127.0.0.1:5000".parse()?).await?.serve(app).await?;
//!     Ok(())
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod adapter;
pub mod config;
pub mod greet;
pub mod logging;
pub mod remap;

pub use adapter::{Arguments, BindError, JsonEndpoint, Params, SignatureError};
pub use config::Config;
pub use error::Error;
pub use http::{Method, StatusCode};
pub use remap::{CallArgs, Payload, RemapError, RemapSpec, remap};
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
