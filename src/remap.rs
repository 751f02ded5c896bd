//! Request-body remapping.
//!
//! A handler declares parameter names. Clients send JSON objects whose keys
//! do not always match them. A [`RemapSpec`] says how to get from one to the
//! other, and [`remap`] does it:
//!
//! | Mode | Spec | `{"key1": "a", "key2": "b"}` becomes |
//! |---|---|---|
//! | pass-through | `RemapSpec::PassThrough` | keywords `{key1: "a", key2: "b"}` |
//! | keys | `RemapSpec::keys(["key2", "key1"])` | positional `["b", "a"]` |
//! | rename | `RemapSpec::rename([("family", "key2")])` | keywords `{key1: "a", family: "b"}` |
//!
//! Remapping is pure. It never looks at the handler; binding the result onto
//! the handler's parameters is [`adapter`](crate::adapter)'s job.

use serde_json::{Map, Value};
use thiserror::Error;

/// A JSON request body: string keys to arbitrary values.
pub type Payload = Map<String, Value>;

/// How a request body turns into call arguments.
///
/// Build it with [`RemapSpec::new`] (or the `keys` / `rename` shortcuts) so
/// that precedence is applied consistently:
///
/// ```rust
/// use remapi::RemapSpec;
///
/// // keys win, rename is ignored
/// let spec = RemapSpec::new(vec!["a".into()], vec![("x".into(), "b".into())]);
/// assert_eq!(spec, RemapSpec::Keys(vec!["a".into()]));
///
/// // neither → pass-through
/// assert_eq!(RemapSpec::new(vec![], vec![]), RemapSpec::PassThrough);
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum RemapSpec {
    /// Hand the body over untouched, as keyword arguments.
    #[default]
    PassThrough,
    /// Pick these keys, in this order, as positional arguments.
    Keys(Vec<String>),
    /// `(target, source)` pairs: move `body[source]` to `target`, keep the rest.
    Rename(Vec<(String, String)>),
}

impl RemapSpec {
    /// Resolves the active mode. A non-empty key list takes precedence and
    /// the rename pairs are then dropped without complaint.
    pub fn new(keys: Vec<String>, rename: Vec<(String, String)>) -> Self {
        if !keys.is_empty() {
            Self::Keys(keys)
        } else if !rename.is_empty() {
            Self::Rename(rename)
        } else {
            Self::PassThrough
        }
    }

    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(keys.into_iter().map(Into::into).collect(), Vec::new())
    }

    pub fn rename<I, T, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (T, S)>,
        T: Into<String>,
        S: Into<String>,
    {
        let pairs = pairs.into_iter().map(|(t, s)| (t.into(), s.into())).collect();
        Self::new(Vec::new(), pairs)
    }

    /// True when the body goes through untouched: `PassThrough`, or a key
    /// or rename list with nothing in it.
    pub fn is_pass_through(&self) -> bool {
        match self {
            Self::PassThrough => true,
            Self::Keys(keys) => keys.is_empty(),
            Self::Rename(pairs) => pairs.is_empty(),
        }
    }
}

/// The output of [`remap`]: exactly one of positional or keyword arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum CallArgs {
    Positional(Vec<Value>),
    Keyword(Payload),
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum RemapError {
    #[error("request body has no key `{0}`")]
    MissingKey(String),
}

/// Turns a request body into call arguments according to `spec`.
///
/// Rename pairs are applied one after another against the evolving map, so a
/// second pair reading the same source key fails, and a target that already
/// exists in the body is overwritten. An empty key list or rename list is
/// pass-through, however the spec was built.
pub fn remap(mut payload: Payload, spec: &RemapSpec) -> Result<CallArgs, RemapError> {
    if spec.is_pass_through() {
        return Ok(CallArgs::Keyword(payload));
    }
    match spec {
        RemapSpec::PassThrough => Ok(CallArgs::Keyword(payload)),
        RemapSpec::Keys(keys) => keys
            .iter()
            .map(|key| {
                payload
                    .get(key)
                    .cloned()
                    .ok_or_else(|| RemapError::MissingKey(key.clone()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(CallArgs::Positional),
        RemapSpec::Rename(pairs) => {
            for (target, source) in pairs {
                let value = payload
                    .remove(source)
                    .ok_or_else(|| RemapError::MissingKey(source.clone()))?;
                payload.insert(target.clone(), value);
            }
            Ok(CallArgs::Keyword(payload))
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: Value) -> Payload {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn pass_through_keeps_body() {
        let body = payload(json!({"name": "Tarou", "family": "Yamada", "n": 3}));
        let args = remap(body.clone(), &RemapSpec::PassThrough).unwrap();
        assert_eq!(args, CallArgs::Keyword(body));
    }

    #[test]
    fn keys_follow_caller_order() {
        let body = payload(json!({"key1": "Tarou", "key2": "Yamada", "extra": true}));
        let args = remap(body, &RemapSpec::keys(["key2", "key1"])).unwrap();
        assert_eq!(args, CallArgs::Positional(vec![json!("Yamada"), json!("Tarou")]));
    }

    #[test]
    fn keys_missing_key_fails() {
        let body = payload(json!({"key1": "Tarou"}));
        let err = remap(body, &RemapSpec::keys(["key1", "key2"])).unwrap_err();
        assert_eq!(err, RemapError::MissingKey("key2".into()));
    }

    #[test]
    fn keys_may_repeat_a_key() {
        let body = payload(json!({"a": 1}));
        let args = remap(body, &RemapSpec::keys(["a", "a"]));
        // keys read from the body without consuming it
        assert_eq!(args, Ok(CallArgs::Positional(vec![json!(1), json!(1)])));
    }

    #[test]
    fn rename_moves_value_and_keeps_rest() {
        let body = payload(json!({"name": "Tarou", "key2": "Yamada", "age": 30}));
        let args = remap(body, &RemapSpec::rename([("family", "key2")])).unwrap();
        assert_eq!(
            args,
            CallArgs::Keyword(payload(json!({"name": "Tarou", "family": "Yamada", "age": 30})))
        );
    }

    #[test]
    fn rename_missing_source_fails() {
        let body = payload(json!({"name": "Tarou"}));
        let err = remap(body, &RemapSpec::rename([("family", "key2")])).unwrap_err();
        assert_eq!(err, RemapError::MissingKey("key2".into()));
    }

    #[test]
    fn rename_same_source_twice_fails_on_second() {
        let body = payload(json!({"key": "v"}));
        let spec = RemapSpec::rename([("a", "key"), ("b", "key")]);
        assert_eq!(remap(body, &spec).unwrap_err(), RemapError::MissingKey("key".into()));
    }

    #[test]
    fn rename_overwrites_existing_target() {
        let body = payload(json!({"family": "old", "key2": "new"}));
        let args = remap(body, &RemapSpec::rename([("family", "key2")])).unwrap();
        assert_eq!(args, CallArgs::Keyword(payload(json!({"family": "new"}))));
    }

    #[test]
    fn keys_take_precedence_over_rename() {
        let spec = RemapSpec::new(vec!["k".into()], vec![("a".into(), "b".into())]);
        let args = remap(payload(json!({"k": 1, "b": 2})), &spec).unwrap();
        assert_eq!(args, CallArgs::Positional(vec![json!(1)]));
    }

    #[test]
    fn empty_variants_built_directly_pass_through() {
        let body = payload(json!({"name": "Tarou", "family": "Yamada"}));
        for spec in [RemapSpec::Keys(Vec::new()), RemapSpec::Rename(Vec::new())] {
            assert!(spec.is_pass_through());
            let args = remap(body.clone(), &spec).unwrap();
            assert_eq!(args, CallArgs::Keyword(body.clone()), "{spec:?}");
        }
        assert!(!RemapSpec::keys(["k"]).is_pass_through());
    }

    #[test]
    fn empty_shortcuts_fall_back_to_pass_through() {
        assert_eq!(RemapSpec::keys(Vec::<String>::new()), RemapSpec::PassThrough);
        assert_eq!(RemapSpec::rename(Vec::<(String, String)>::new()), RemapSpec::PassThrough);
    }
}
