mod input;
mod reverse;

use crate::error::RouterError;
use crate::request::Request;
use crate::route::{Route, RouteOptions};

use std::collections::HashMap;

use tracing::{debug, trace, warn};

/// Resolves the current request against routes in registration order.
///
/// A dispatcher serves one request context at a time. Use
/// [`set_request`](Self::set_request) to reuse the registered routes for the
/// next request.
#[derive(Debug)]
pub struct Dispatcher<R> {
    request: R,
    routes: Vec<Route>,
    named: HashMap<String, usize>,
    resolved: Option<usize>,
}

impl<R: Request> Dispatcher<R> {
    pub fn new(request: R) -> Self {
        Self {
            request,
            routes: Vec::new(),
            named: HashMap::new(),
            resolved: None,
        }
    }

    /// Registers a route. Registration order is match priority.
    ///
    /// A name that is already taken is rebound to the new route; the earlier
    /// route stays in the match order.
    pub fn map(
        &mut self,
        uri: &str,
        target: &str,
        options: RouteOptions,
    ) -> Result<&mut Self, RouterError> {
        let route = Route::new(uri, target, options)?;
        self.push(route);
        Ok(self)
    }

    /// Registers an already built route.
    pub fn push(&mut self, route: Route) -> &mut Self {
        let index = self.routes.len();

        if let Some(name) = route.name() {
            if let Some(prev) = self.named.insert(name.to_owned(), index) {
                warn!(
                    name,
                    previous = self.routes[prev].uri(),
                    uri = route.uri(),
                    "route name rebound"
                );
            }
        }

        debug!(
            uri = route.uri(),
            target = route.target(),
            name = route.name(),
            methods = ?route.methods(),
            "route registered"
        );

        self.routes.push(route);
        self
    }

    /// Resolves the current request; the first registered route whose
    /// methods and pattern accept it wins.
    ///
    /// `None` means no route matched. The winning route's parameters are
    /// replaced by those captured from the request path.
    pub fn match_route(&mut self) -> Option<&Route> {
        if let Some(prev) = self.resolved.take() {
            self.routes[prev].clear_parameters();
        }

        let method = self.request.method();
        let path = self.request.path();

        let mut found = None;
        for (i, route) in self.routes.iter_mut().enumerate() {
            if !route.allows(method) {
                trace!(uri = route.uri(), %method, "method not allowed");
                continue;
            }
            if route.set_parameters(path) {
                found = Some(i);
                break;
            }
            trace!(uri = route.uri(), path, "pattern mismatch");
        }

        match found {
            Some(i) => {
                let route = &self.routes[i];
                debug!(%method, path, uri = route.uri(), target = route.target(), "route resolved");
                self.resolved = Some(i);
                Some(route)
            }
            None => {
                debug!(%method, path, "no route matched");
                None
            }
        }
    }

    /// The route chosen by the last [`match_route`](Self::match_route).
    pub fn route(&self) -> Option<&Route> {
        self.resolved.map(|i| &self.routes[i])
    }

    pub fn request(&self) -> &R {
        &self.request
    }

    /// Swaps in the next request, returning the previous one.
    ///
    /// The resolved route is reset.
    pub fn set_request(&mut self, request: R) -> R {
        if let Some(prev) = self.resolved.take() {
            self.routes[prev].clear_parameters();
        }
        std::mem::replace(&mut self.request, request)
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn named(&self, name: &str) -> Option<&Route> {
        self.named.get(name).map(|&i| &self.routes[i])
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
