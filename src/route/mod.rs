mod options;
mod params;
pub(crate) mod pattern;

pub use self::options::RouteOptions;
pub use self::params::Params;

use self::pattern::SLASH;
use crate::error::RouterError;
use crate::method::{self, Method, MethodSet};

use regex::Regex;
use serde_json::{Map, Value};

/// A registered mapping from a URI template to a target.
#[derive(Debug, Clone)]
pub struct Route {
    id: Option<String>,
    uri: String,
    methods: MethodSet,
    target: String,
    name: Option<String>,
    filters: Vec<(String, String)>,
    attributes: Map<String, Value>,
    names: Vec<Box<str>>,
    regex: Regex,
    params: Params,
}

impl Route {
    /// Builds a route, normalizing `uri` to end with `/`.
    ///
    /// Fails when `options` names a method outside
    /// [`ALLOWED_METHODS`](crate::method::ALLOWED_METHODS), when a filter is
    /// not a valid regex, or when a recognised option has the wrong type.
    pub fn new(
        uri: impl Into<String>,
        target: impl Into<String>,
        options: RouteOptions,
    ) -> Result<Self, RouterError> {
        let mut uri = uri.into();
        if !uri.ends_with(SLASH) {
            uri.push(SLASH);
        }

        let parsed = options.parse()?;
        let regex = pattern::compile(&uri, &parsed.filters)?;
        let names = pattern::placeholders(&uri)
            .iter()
            .map(|p| p.name.into())
            .collect();

        Ok(Self {
            id: parsed.id,
            methods: parsed.methods.unwrap_or_else(method::default_methods),
            target: target.into(),
            name: parsed.name,
            filters: parsed.filters,
            attributes: options.into_inner(),
            names,
            regex,
            params: Params::new(),
            uri,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    #[inline]
    pub fn allows(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    pub fn filters(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.filters.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Placeholder names in template order. Repeated names appear repeatedly.
    pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|n| &**n)
    }

    /// Source of the compiled matcher (case-insensitive).
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn parameters(&self) -> &Params {
        &self.params
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Tests `path` without touching the stored parameters.
    pub fn captures(&self, path: &str) -> Option<Params> {
        let caps = self.regex.captures(path)?;

        let values = (0..self.names.len()).map(|i| {
            caps.name(&pattern::group_name(i))
                .map(|m| m.as_str())
        });

        let mut params = Params::new();
        for (name, value) in self.names.iter().zip(values) {
            if let Some(value) = value {
                params.insert(name, value)
            }
        }
        Some(params)
    }

    /// Replaces the stored parameters with those captured from `path`.
    ///
    /// Returns whether `path` matched; on a miss the parameters are left empty.
    pub fn set_parameters(&mut self, path: &str) -> bool {
        match self.captures(path) {
            Some(params) => {
                self.params = params;
                true
            }
            None => {
                self.params.clear();
                false
            }
        }
    }

    pub fn clear_parameters(&mut self) {
        self.params.clear()
    }
}
