use super::Dispatcher;

use crate::error::RouterError;
use crate::request::Request;
use crate::route::pattern::placeholders;

use smallvec::SmallVec;
use tracing::debug;

impl<R: Request> Dispatcher<R> {
    /// Builds the URI of a named route.
    ///
    /// Placeholders are visited in template order; each one whose name has a
    /// value in `params` replaces the first still unsubstituted occurrence of
    /// that placeholder. Placeholders without a value are left as they are.
    pub fn uri<I, K, V>(&self, name: &str, params: I) -> Result<String, RouterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let route = self
            .named(name)
            .ok_or_else(|| RouterError::RouteNotFound(name.to_owned()))?;

        let params: SmallVec<[(K, V); 4]> = params.into_iter().collect();
        let value_of = |key: &str| {
            params
                .iter()
                .rev()
                .find(|(k, _)| k.as_ref() == key)
                .map(|(_, v)| v.as_ref())
        };

        let uri = substitute(route.uri(), value_of);
        debug!(name, uri = %uri, "reverse routed");
        Ok(uri)
    }
}

pub(crate) fn substitute<'v>(template: &str, value_of: impl Fn(&str) -> Option<&'v str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut last = 0;

    for p in placeholders(template) {
        out.push_str(&template[last..p.span.start]);
        match value_of(p.name) {
            Some(value) => out.push_str(value),
            None => out.push_str(&template[p.span.clone()]),
        }
        last = p.span.end;
    }
    out.push_str(&template[last..]);
    out
}
