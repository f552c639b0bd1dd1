use crate::error::RouterError;
use crate::method::{self, Method, MethodSet};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Registration-time attributes of a route.
///
/// The bag is free-form; `methods`, `name`, `id` and `filters` are interpreted
/// when the route is built, every key stays readable through
/// [`Route::attribute`](crate::Route::attribute).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteOptions {
    map: Map<String, Value>,
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name.into())
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id.into())
    }

    /// Accepts a comma-delimited list, e.g. `"GET,POST"`.
    pub fn methods(self, methods: impl Into<String>) -> Self {
        self.attr("methods", methods.into())
    }

    pub fn method(mut self, method: Method) -> Self {
        let entry = self
            .map
            .entry("methods")
            .or_insert_with(|| Value::Array(Vec::new()));
        match entry {
            Value::Array(list) => list.push(Value::from(method.as_str())),
            other => *other = Value::Array(vec![Value::from(method.as_str())]),
        }
        self
    }

    pub fn filter(mut self, placeholder: impl Into<String>, fragment: impl Into<String>) -> Self {
        let entry = self
            .map
            .entry("filters")
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(filters) = entry {
            filters.insert(placeholder.into(), Value::String(fragment.into()));
        }
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.map
    }
}

impl From<Map<String, Value>> for RouteOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self { map }
    }
}

/// Recognised options, validated.
pub(super) struct Parsed {
    pub(super) methods: Option<MethodSet>,
    pub(super) name: Option<String>,
    pub(super) id: Option<String>,
    pub(super) filters: Vec<(String, String)>,
}

impl RouteOptions {
    pub(super) fn parse(&self) -> Result<Parsed, RouterError> {
        let methods = match self.map.get("methods") {
            None => None,
            Some(Value::String(s)) => Some(method::parse_methods(s)?),
            Some(Value::Array(list)) => {
                let mut names: Vec<&str> = Vec::with_capacity(list.len());
                for v in list {
                    match v.as_str() {
                        Some(s) => names.push(s),
                        None => {
                            return Err(RouterError::invalid_option(
                                "methods",
                                "a list of method strings",
                            ))
                        }
                    }
                }
                Some(method::validate_methods(names)?)
            }
            Some(_) => {
                return Err(RouterError::invalid_option(
                    "methods",
                    "a string or a list of strings",
                ))
            }
        };

        let name = match self.map.get("name") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => return Err(RouterError::invalid_option("name", "a string")),
        };

        let id = match self.map.get("id") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(_) => return Err(RouterError::invalid_option("id", "a string or a number")),
        };

        let mut filters = Vec::new();
        match self.map.get("filters") {
            None | Some(Value::Null) => {}
            Some(Value::Object(map)) => {
                for (k, v) in map {
                    match v.as_str() {
                        Some(fragment) => filters.push((k.clone(), fragment.to_owned())),
                        None => {
                            return Err(RouterError::invalid_option(
                                "filters",
                                "a map of regex fragments",
                            ))
                        }
                    }
                }
            }
            Some(_) => {
                return Err(RouterError::invalid_option(
                    "filters",
                    "a map of regex fragments",
                ))
            }
        }

        Ok(Parsed {
            methods,
            name,
            id,
            filters,
        })
    }
}
