#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    #[error("route map uses invalid HTTP methods: {methods}")]
    InvalidMethods { methods: String },

    #[error("invalid filter for placeholder {name:?}: {source}")]
    InvalidFilter {
        name: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid route pattern {uri:?}: {source}")]
    InvalidPattern {
        uri: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid route option {key:?}: expected {expected}")]
    InvalidOption {
        key: &'static str,
        expected: &'static str,
    },

    #[error("invalid route name: {0}")]
    RouteNotFound(String),

    #[error("failed to load route table: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported route table format: {0:?}")]
    Format(String),
}

impl RouterError {
    pub(crate) fn invalid_methods(methods: impl Into<String>) -> Self {
        Self::InvalidMethods {
            methods: methods.into(),
        }
    }

    pub(crate) fn invalid_option(key: &'static str, expected: &'static str) -> Self {
        Self::InvalidOption { key, expected }
    }
}
