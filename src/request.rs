//! Incoming HTTP request type.

use bytes::Bytes;
use http::{HeaderMap, Method, header};
use serde_json::Value;

use crate::error::Error;
use crate::remap::Payload;

/// An incoming HTTP request with its body already buffered.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, headers: HeaderMap, body: Bytes) -> Self {
        Self { method, path: path.into(), headers, body }
    }

    pub(crate) fn from_parts(parts: http::request::Parts, body: Bytes) -> Self {
        Self::new(parts.method, parts.uri.path(), parts.headers, body)
    }

    pub fn method(&self) -> &Method { &self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Values that are not visible ASCII read
    /// as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parses the body as a JSON object.
    ///
    /// The content type must be `application/json` or a `+json` suffix type,
    /// otherwise [`Error::UnsupportedMediaType`]. An empty or malformed body,
    /// or any JSON value other than an object, is [`Error::BadRequest`].
    pub fn json_object(&self) -> Result<Payload, Error> {
        if !self.header(header::CONTENT_TYPE.as_str()).is_some_and(is_json) {
            return Err(Error::UnsupportedMediaType);
        }
        match serde_json::from_slice(&self.body) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(Error::BadRequest("expected a JSON object".into())),
            Err(e) => Err(Error::BadRequest(format!("invalid JSON body: {e}"))),
        }
    }
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use http::HeaderValue;

    use super::*;

    fn post(content_type: Option<&'static str>, body: &'static str) -> Request {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(ct));
        }
        Request::new(Method::POST, "/hello", headers, Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn parses_object() {
        let req = post(Some("application/json"), r#"{"name":"Tarou"}"#);
        let map = req.json_object().unwrap();
        assert_eq!(map["name"], "Tarou");
    }

    #[test]
    fn accepts_charset_and_suffix_types() {
        assert!(post(Some("application/json; charset=utf-8"), "{}").json_object().is_ok());
        assert!(post(Some("application/merge-patch+json"), "{}").json_object().is_ok());
        assert!(post(Some("Application/JSON"), "{}").json_object().is_ok());
    }

    #[test]
    fn rejects_other_content_types() {
        for ct in [None, Some("text/plain"), Some("application/jsonx"), Some("text/+json")] {
            let err = post(ct, "{}").json_object().unwrap_err();
            assert!(matches!(err, Error::UnsupportedMediaType), "{ct:?}");
        }
    }

    #[test]
    fn rejects_bad_bodies() {
        for body in ["", "{", "[1,2]", "\"name\"", "null"] {
            let err = post(Some("application/json"), body).json_object().unwrap_err();
            assert!(matches!(err, Error::BadRequest(_)), "{body:?}");
        }
    }
}
