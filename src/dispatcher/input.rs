use super::Dispatcher;

use crate::request::{parse_form, Input, Request};

impl<R: Request> Dispatcher<R> {
    /// Coalesces the request input.
    ///
    /// Query parameters are overridden by body fields, which are overridden
    /// by the resolved route's path parameters.
    pub fn input(&self) -> Input {
        let mut input = parse_form(self.request.query().as_bytes());

        if self.request.body_size() > 0 {
            input.extend(self.request.parsed_body());
        }

        if let Some(route) = self.route() {
            input.extend(
                route
                    .parameters()
                    .iter()
                    .map(|(k, v)| (k.to_owned(), v.to_owned())),
            );
        }

        input
    }
}
