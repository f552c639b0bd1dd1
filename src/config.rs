//! Route tables loaded from TOML or JSON.
//!
//! ```toml
//! [[route]]
//! uri = "/about"
//! target = "pages/about"
//! name = "about"
//! methods = "GET"
//!
//! [[route]]
//! uri = "/user/:id"
//! target = "users/show"
//! filters = { id = '\d+' }
//! ```

use crate::dispatcher::Dispatcher;
use crate::error::{ConfigError, RouterError};
use crate::request::Request;
use crate::route::RouteOptions;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde(default, rename = "route")]
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub uri: String,
    #[serde(default)]
    pub target: String,
    #[serde(flatten)]
    pub options: RouteOptions,
}

impl RouteTable {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Reads a table, picking the format by file extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            other => Err(ConfigError::Format(other.unwrap_or("").to_owned())),
        }
    }
}

impl<R: Request> Dispatcher<R> {
    /// Maps every entry in table order, stopping at the first invalid one.
    pub fn load(&mut self, table: RouteTable) -> Result<&mut Self, RouterError> {
        let count = table.routes.len();
        for entry in table.routes {
            self.map(&entry.uri, &entry.target, entry.options)?;
        }
        debug!(count, "route table loaded");
        Ok(self)
    }

    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, RouterError> {
        let table = RouteTable::from_path(path)?;
        self.load(table)
    }
}
