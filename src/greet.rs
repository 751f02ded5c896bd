//! The greeting API.
//!
//! | Path | Remap | Body |
//! |---|---|---|
//! | `POST /hello` | pass-through | `{"name": .., "family": ..}` |
//! | `POST /seeyou` | keys `key1`, `key2` | `{"key1": .., "key2": ..}` |
//! | `POST /thankyou` | rename `family` ← `key2` | `{"name": .., "key2": ..}` |
//!
//! Every handler answers `{"status":0,"message":"<greeting>, <name> <family>!"}`.

use http::Method;
use serde::Serialize;

use crate::adapter::{Arguments, JsonEndpoint, Params, SignatureError};
use crate::error::Error;
use crate::remap::RemapSpec;
use crate::router::Router;

const NAME_FAMILY: Params = &["name", "family"];

/// Body of every greeting response. `status` is `0` on success.
#[derive(Debug, Serialize)]
pub struct Reply {
    pub status: i32,
    pub message: String,
}

pub fn hello(args: Arguments) -> Result<Reply, Error> {
    greet("Hello", &args)
}

pub fn seeyou(args: Arguments) -> Result<Reply, Error> {
    greet("See you", &args)
}

pub fn thankyou(args: Arguments) -> Result<Reply, Error> {
    greet("Thank you", &args)
}

fn greet(greeting: &str, args: &Arguments) -> Result<Reply, Error> {
    let name = args.text("name")?;
    let family = args.text("family")?;
    Ok(Reply { status: 0, message: format!("{greeting}, {name} {family}!") })
}

/// Builds the route table for the three greeting endpoints.
pub fn routes() -> Result<Router, SignatureError> {
    Ok(Router::new()
        .on_json(
            Method::POST,
            "/hello",
            JsonEndpoint::new(NAME_FAMILY, RemapSpec::PassThrough, hello)?,
        )
        .on_json(
            Method::POST,
            "/seeyou",
            JsonEndpoint::new(NAME_FAMILY, RemapSpec::keys(["key1", "key2"]), seeyou)?,
        )
        .on_json(
            Method::POST,
            "/thankyou",
            JsonEndpoint::new(NAME_FAMILY, RemapSpec::rename([("family", "key2")]), thankyou)?,
        ))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::remap::CallArgs;

    fn args(name: serde_json::Value, family: serde_json::Value) -> Arguments {
        Arguments::bind(NAME_FAMILY, CallArgs::Positional(vec![name, family])).unwrap()
    }

    #[test]
    fn messages() {
        let a = args(json!("Tarou"), json!("Yamada"));
        assert_eq!(hello(a.clone()).unwrap().message, "Hello, Tarou Yamada!");
        assert_eq!(seeyou(a.clone()).unwrap().message, "See you, Tarou Yamada!");
        assert_eq!(thankyou(a).unwrap().message, "Thank you, Tarou Yamada!");
    }

    #[test]
    fn reply_serializes_status_first() {
        let reply = hello(args(json!("Tarou"), json!(7))).unwrap();
        assert_eq!(
            serde_json::to_string(&reply).unwrap(),
            r#"{"status":0,"message":"Hello, Tarou 7!"}"#
        );
    }

    #[test]
    fn routes_register() {
        assert!(routes().is_ok());
    }
}
