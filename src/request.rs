//! The incoming-request descriptor consumed by the dispatcher.

use crate::method::Method;

use std::borrow::Cow;
use std::collections::BTreeMap;

use http::Uri;
use percent_encoding::percent_decode_str;
use serde_json::Value;
use url::form_urlencoded;

/// Coalesced request input, see [`Dispatcher::input`](crate::Dispatcher::input).
pub type Input = BTreeMap<String, String>;

/// What the dispatcher needs to know about a request.
///
/// The body is expected to be fully read before dispatch.
pub trait Request {
    /// Uppercase HTTP verb.
    fn method(&self) -> &Method;

    /// Decoded path, without the query string.
    fn path(&self) -> &str;

    /// Raw query string, without the leading `?`.
    fn query(&self) -> &str;

    fn body_size(&self) -> usize;

    fn parsed_body(&self) -> Input;
}

impl<R: Request + ?Sized> Request for &R {
    fn method(&self) -> &Method {
        (**self).method()
    }

    fn path(&self) -> &str {
        (**self).path()
    }

    fn query(&self) -> &str {
        (**self).query()
    }

    fn body_size(&self) -> usize {
        (**self).body_size()
    }

    fn parsed_body(&self) -> Input {
        (**self).parsed_body()
    }
}

/// An owned, fully read request.
#[derive(Debug, Clone)]
pub struct ServerRequest {
    method: Method,
    path: String,
    query: String,
    content_type: Option<String>,
    body: Vec<u8>,
}

impl ServerRequest {
    /// Builds a request from a request target such as `/about/?foo=bar`.
    ///
    /// The path is percent-decoded; an unparsable target is treated as a bare
    /// path.
    pub fn new(method: Method, target: &str) -> Self {
        let (path, query) = match target.parse::<Uri>() {
            Ok(uri) => (uri.path().to_owned(), uri.query().unwrap_or("").to_owned()),
            Err(_) => match target.split_once('?') {
                Some((p, q)) => (p.to_owned(), q.to_owned()),
                None => (target.to_owned(), String::new()),
            },
        };

        let decoded = percent_decode_str(&path)
            .decode_utf8()
            .ok()
            .map(Cow::into_owned);
        let path = decoded.unwrap_or(path);

        Self {
            method,
            path,
            query,
            content_type: None,
            body: Vec::new(),
        }
    }

    pub fn get(target: &str) -> Self {
        Self::new(Method::GET, target)
    }

    pub fn post(target: &str) -> Self {
        Self::new(Method::POST, target)
    }

    pub fn with_body(mut self, content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.content_type = Some(content_type.into());
        self.body = body.into();
        self
    }

    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

impl Request for ServerRequest {
    fn method(&self) -> &Method {
        &self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn body_size(&self) -> usize {
        self.body.len()
    }

    fn parsed_body(&self) -> Input {
        let is_json = self
            .content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
            .unwrap_or(false);

        if is_json {
            parse_json(&self.body)
        } else {
            parse_form(&self.body)
        }
    }
}

/// Parses `a=1&b=2` pairs; a repeated key keeps its last value.
pub fn parse_form(input: &[u8]) -> Input {
    form_urlencoded::parse(input)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Top-level fields of a JSON object. Non-string values keep their JSON text.
pub fn parse_json(input: &[u8]) -> Input {
    match serde_json::from_slice::<Value>(input) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .map(|(k, v)| {
                let v = match v {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (k, v)
            })
            .collect(),
        _ => Input::new(),
    }
}
