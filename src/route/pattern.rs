use crate::error::RouterError;

use std::ops::Range;

use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;

pub(crate) const COLON: char = ':';
pub(crate) const SLASH: char = '/';

pub(crate) const DEFAULT_FRAGMENT: &str = r"[\w-]+";

/// A `:name` placeholder inside a route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Placeholder<'a> {
    pub(crate) name: &'a str,
    /// Byte span of `:name`, colon included.
    pub(crate) span: Range<usize>,
}

#[inline]
fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Scans `template` for placeholders, left to right.
///
/// A colon not followed by a word character is literal text.
pub(crate) fn placeholders(template: &str) -> SmallVec<[Placeholder<'_>; 4]> {
    let mut out = SmallVec::new();
    let mut iter = template.char_indices().peekable();

    while let Some((start, c)) = iter.next() {
        if c != COLON {
            continue;
        }
        let name_start = start + c.len_utf8();
        let mut end = name_start;
        while let Some(&(i, c)) = iter.peek() {
            if !is_word(c) {
                break;
            }
            end = i + c.len_utf8();
            iter.next();
        }
        if end > name_start {
            out.push(Placeholder {
                name: &template[name_start..end],
                span: start..end,
            })
        }
    }

    out
}

#[inline]
pub(crate) fn group_name(index: usize) -> String {
    format!("p{}", index)
}

/// Builds the matcher source for a normalized template.
///
/// Literal text is escaped, each placeholder becomes a named group holding its
/// filter fragment (or [`DEFAULT_FRAGMENT`]). The template's trailing separator
/// may repeat or be absent, and any suffix after it is accepted.
pub(crate) fn pattern_source<'f>(
    template: &str,
    filter: impl Fn(&str) -> Option<&'f str>,
) -> String {
    let body = template.strip_suffix(SLASH).unwrap_or(template);

    let mut src = String::with_capacity(template.len() * 2 + 16);
    src.push('^');

    let mut last = 0;
    for (i, p) in placeholders(body).iter().enumerate() {
        src.push_str(&regex::escape(&body[last..p.span.start]));
        let fragment = filter(p.name).unwrap_or(DEFAULT_FRAGMENT);
        src.push_str("(?P<");
        src.push_str(&group_name(i));
        src.push('>');
        src.push_str(fragment);
        src.push(')');
        last = p.span.end;
    }
    src.push_str(&regex::escape(&body[last..]));

    src.push_str("/*.*$");
    src
}

/// Compiles a template into a case-insensitive matcher.
///
/// Filters are checked one by one first so a bad fragment is reported against
/// its placeholder.
pub(crate) fn compile(template: &str, filters: &[(String, String)]) -> Result<Regex, RouterError> {
    for (name, fragment) in filters {
        if let Err(source) = Regex::new(fragment) {
            return Err(RouterError::InvalidFilter {
                name: name.clone(),
                source,
            });
        }
    }

    let lookup = |name: &str| {
        filters
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, f)| f.as_str())
    };

    let src = pattern_source(template, lookup);
    RegexBuilder::new(&src)
        .case_insensitive(true)
        .build()
        .map_err(|source| RouterError::InvalidPattern {
            uri: template.to_owned(),
            source,
        })
}
