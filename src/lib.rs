//! A request dispatcher: named routes, placeholder filters and reverse routing.
//!
//! ```
//! use dispatch_router::{Dispatcher, RouteOptions, ServerRequest};
//!
//! let mut d = Dispatcher::new(ServerRequest::get("/about/?foo=bar"));
//! d.map("/about", "pages/about", RouteOptions::new().name("about").methods("GET"))
//!     .unwrap();
//!
//! let route = d.match_route().unwrap();
//! assert_eq!(route.name(), Some("about"));
//! assert_eq!(route.target(), "pages/about");
//! assert_eq!(d.input()["foo"], "bar");
//! ```

#![forbid(unsafe_code)]

mod config;
mod dispatcher;
mod error;
mod request;
mod route;
mod routes_macro;

pub mod method;

pub use self::config::{RouteEntry, RouteTable};
pub use self::dispatcher::Dispatcher;
pub use self::error::{ConfigError, RouterError};
pub use self::method::Method;
pub use self::request::{parse_form, parse_json, Input, Request, ServerRequest};
pub use self::route::{Params, Route, RouteOptions};
