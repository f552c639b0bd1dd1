use crate::error::RouterError;

pub use http::Method;

use smallvec::SmallVec;

/// HTTP verbs a route may be registered for.
pub const ALLOWED_METHODS: [Method; 9] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::HEAD,
    Method::PATCH,
    Method::OPTIONS,
    Method::TRACE,
    Method::CONNECT,
];

pub type MethodSet = SmallVec<[Method; 4]>;

pub(crate) fn default_methods() -> MethodSet {
    SmallVec::from_iter([Method::GET, Method::HEAD])
}

#[inline]
pub fn is_allowed(method: &Method) -> bool {
    ALLOWED_METHODS.contains(method)
}

/// Parses a comma-delimited method list such as `"GET,POST"`.
pub fn parse_methods(list: &str) -> Result<MethodSet, RouterError> {
    collect_methods(list.split(','), || list.to_owned())
}

/// Validates an explicit method list against [`ALLOWED_METHODS`].
pub fn validate_methods<I, S>(list: I) -> Result<MethodSet, RouterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let list: SmallVec<[S; 4]> = list.into_iter().collect();
    let describe = || {
        list.iter()
            .map(|s| s.as_ref())
            .collect::<Vec<_>>()
            .join(", ")
    };
    collect_methods(list.iter().map(|s| s.as_ref()), describe)
}

fn collect_methods<'a>(
    entries: impl Iterator<Item = &'a str>,
    describe: impl FnOnce() -> String,
) -> Result<MethodSet, RouterError> {
    let mut set = MethodSet::new();
    let mut invalid = false;

    for entry in entries {
        match Method::from_bytes(entry.trim().as_bytes()) {
            Ok(m) if is_allowed(&m) => {
                if !set.contains(&m) {
                    set.push(m)
                }
            }
            _ => invalid = true,
        }
    }

    if invalid || set.is_empty() {
        return Err(RouterError::invalid_methods(describe()));
    }
    Ok(set)
}
