// Copyright 2026 The weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reference resolution and syntax-based normalization.
//!
//! Relative references follow the older RFC 3986 grammar, so resolution
//! splits the reference per RFC 3986 appendix B, derives the target
//! components per §5.2.2, and funnels the assembled target back through
//! the URL parser.

use std::cmp::Ordering;

use crate::parser::{ParseError, ParseResult};
use crate::percent_encoding::normalize_triples;
use crate::slicing::Position;
use crate::Url;

/// How much normalization [`Url::compare`] and [`Url::normalize`] apply.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ComparisonLevel {
    /// Compare the serialized forms byte for byte.
    StringBased,
    /// RFC 3986 §6.2.2: lowercase scheme and host, uppercase
    /// percent-encoded hex digits, decode unreserved bytes, remove dot
    /// segments.
    SyntaxBased,
}

/// A reference split into its five components per RFC 3986 appendix B.
struct ReferenceParts<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> ReferenceParts<'a> {
    fn split(input: &'a str) -> ReferenceParts<'a> {
        let (rest, fragment) = match input.find('#') {
            Some(i) => (&input[..i], Some(&input[i + 1..])),
            None => (input, None),
        };
        let (rest, query) = match rest.find('?') {
            Some(i) => (&rest[..i], Some(&rest[i + 1..])),
            None => (rest, None),
        };
        let (rest, scheme) = match split_scheme(rest) {
            Some((scheme, rest)) => (rest, Some(scheme)),
            None => (rest, None),
        };
        let (path, authority) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after
                    .find(|c| matches!(c, '/' | '?' | '#'))
                    .unwrap_or_else(|| after.len());
                (&after[end..], Some(&after[..end]))
            }
            None => (rest, None),
        };
        ReferenceParts {
            scheme,
            authority,
            path,
            query,
            fragment,
        }
    }
}

/// `scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`
fn split_scheme(input: &str) -> Option<(&str, &str)> {
    let colon = input.find(':')?;
    let candidate = &input[..colon];
    let mut chars = candidate.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
        Some((candidate, &input[colon + 1..]))
    } else {
        None
    }
}

/// RFC 3986 §5.2.4, the five-rule input-buffer/output-buffer walk.
///
/// The result contains no `.` or `..` segments and the function is
/// idempotent.
pub(crate) fn remove_dot_segments(path: &str) -> String {
    let mut input = path;
    let mut output = String::with_capacity(path.len());
    while !input.is_empty() {
        if input.starts_with("../") {
            input = &input[3..];
        } else if input.starts_with("./") {
            input = &input[2..];
        } else if input.starts_with("/./") {
            input = &input[2..];
        } else if input == "/." {
            input = "/";
        } else if input.starts_with("/../") {
            input = &input[3..];
            pop_output_segment(&mut output);
        } else if input == "/.." {
            input = "/";
            pop_output_segment(&mut output);
        } else if input == "." || input == ".." {
            input = "";
        } else {
            let start = if input.starts_with('/') { 1 } else { 0 };
            let end = input[start..]
                .find('/')
                .map(|i| i + start)
                .unwrap_or_else(|| input.len());
            output.push_str(&input[..end]);
            input = &input[end..];
        }
    }
    output
}

fn pop_output_segment(output: &mut String) {
    let end = output.rfind('/').unwrap_or(0);
    output.truncate(end);
}

/// RFC 3986 §5.3 path merging.
fn merge_paths(base_has_authority: bool, base_path: &str, reference_path: &str) -> String {
    if base_has_authority && base_path.is_empty() {
        return format!("/{}", reference_path);
    }
    match base_path.rfind('/') {
        Some(i) => format!("{}{}", &base_path[..=i], reference_path),
        None => reference_path.to_owned(),
    }
}

impl Url {
    /// Resolve a (possibly relative) reference against `self` per the
    /// RFC 3986 §5.2 algorithm.
    ///
    /// A reference that already has a scheme is returned as parsed,
    /// without further transformation. For WHATWG-style relative parsing
    /// use [`Url::join`] instead; the two differ in how leniently the
    /// reference itself is interpreted.
    pub fn resolve_reference(&self, reference: &str) -> ParseResult<Url> {
        let r = ReferenceParts::split(reference);
        if r.scheme.is_some() {
            return Url::parse(reference);
        }
        if self.cannot_be_a_base() {
            // An opaque base cannot merge paths; only same-document
            // references resolve against it.
            if r.authority.is_none() && r.path.is_empty() && r.query.is_none() {
                let mut target = self[..Position::QueryEnd].to_owned();
                if let Some(fragment) = r.fragment {
                    target.push('#');
                    target.push_str(fragment);
                }
                return Url::parse(&target);
            }
            return Err(ParseError::InvalidSyntax);
        }

        let base_authority = self.authority();
        let t_authority: Option<String>;
        let t_path: String;
        let t_query: Option<String>;
        if let Some(authority) = r.authority {
            t_authority = Some(authority.to_owned());
            t_path = remove_dot_segments(r.path);
            t_query = r.query.map(str::to_owned);
        } else {
            t_authority = base_authority.map(str::to_owned);
            if r.path.is_empty() {
                t_path = self.path().to_owned();
                t_query = r.query.or_else(|| self.query()).map(str::to_owned);
            } else {
                if r.path.starts_with('/') {
                    t_path = remove_dot_segments(r.path);
                } else {
                    let merged =
                        merge_paths(base_authority.is_some(), self.path(), r.path);
                    t_path = remove_dot_segments(&merged);
                }
                t_query = r.query.map(str::to_owned);
            }
        }

        let mut target = String::with_capacity(reference.len() + self.as_str().len());
        target.push_str(self.scheme());
        target.push(':');
        match t_authority {
            Some(ref authority) => {
                target.push_str("//");
                target.push_str(authority);
            }
            // Keep a path starting with `//` from being re-parsed as an
            // authority.
            None if t_path.starts_with("//") => target.push_str("/."),
            None => {}
        }
        target.push_str(&t_path);
        if let Some(query) = t_query {
            target.push('?');
            target.push_str(&query);
        }
        if let Some(fragment) = r.fragment {
            target.push('#');
            target.push_str(fragment);
        }
        Url::parse(&target)
    }

    /// Express `other` relative to `self`.
    ///
    /// When either URL is opaque, or the schemes or authorities differ,
    /// `other`’s full serialization is returned unchanged. Otherwise the
    /// result is `other`’s syntax-normalized path followed by its query
    /// and fragment. No shared-prefix shortening is attempted.
    pub fn make_relative(&self, other: &Url) -> String {
        if self.cannot_be_a_base() || other.cannot_be_a_base() {
            return other.as_str().to_owned();
        }
        if self.scheme() != other.scheme() {
            return other.as_str().to_owned();
        }
        if self.authority() != other.authority() {
            return other.as_str().to_owned();
        }
        if self.path().is_empty() || other.path().is_empty() {
            return other.as_str().to_owned();
        }
        let normalized = other.normalize(ComparisonLevel::SyntaxBased);
        let mut relative = normalized.path().to_owned();
        if let Some(query) = other.query() {
            relative.push('?');
            relative.push_str(query);
        }
        if let Some(fragment) = other.fragment() {
            relative.push('#');
            relative.push_str(fragment);
        }
        relative
    }

    /// Return a normalized copy of this URL.
    ///
    /// String-based normalization is the identity. Syntax-based
    /// normalization uppercases the hex digits of every percent-encoded
    /// triple, decodes triples whose byte is unreserved, and removes dot
    /// segments from hierarchical paths; scheme and host are already
    /// lowercased by the parser. The operation is idempotent.
    pub fn normalize(&self, level: ComparisonLevel) -> Url {
        match level {
            ComparisonLevel::StringBased => self.clone(),
            ComparisonLevel::SyntaxBased => {
                let renormalized = normalize_triples(self.as_str());
                let interim = Url::parse(&renormalized)
                    .expect("syntax normalization preserves parsability");
                if interim.cannot_be_a_base() {
                    return interim;
                }
                let normalized_path = remove_dot_segments(interim.path());
                if normalized_path == interim.path() {
                    return interim;
                }
                let rebuilt = format!(
                    "{}{}{}",
                    &interim[..Position::PathStart],
                    normalized_path,
                    &interim[Position::PathEnd..]
                );
                Url::parse(&rebuilt).expect("syntax normalization preserves parsability")
            }
        }
    }

    /// Compare two URLs after normalizing both at the given level.
    ///
    /// The ordering is the lexicographic byte ordering of the normalized
    /// serialized forms.
    pub fn compare(&self, other: &Url, level: ComparisonLevel) -> Ordering {
        if level == ComparisonLevel::StringBased {
            return self.as_str().cmp(other.as_str());
        }
        self.normalize(level)
            .as_str()
            .cmp(other.normalize(level).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_segment_removal() {
        assert_eq!(remove_dot_segments("/a/b/c/./../../g"), "/a/g");
        assert_eq!(remove_dot_segments("mid/content=5/../6"), "mid/6");
        assert_eq!(remove_dot_segments("/./"), "/");
        assert_eq!(remove_dot_segments("/../a"), "/a");
        assert_eq!(remove_dot_segments(".."), "");
        assert_eq!(remove_dot_segments("/a/.."), "/");
        assert_eq!(remove_dot_segments("/a/."), "/a/");
    }

    #[test]
    fn dot_segment_removal_is_idempotent() {
        for path in &["/a/b/c/./../../g", "a/../..", "/..//../x/.", "/a/../a/../a"] {
            let once = remove_dot_segments(path);
            assert_eq!(remove_dot_segments(&once), once, "input {:?}", path);
            for segment in once.split('/') {
                assert!(segment != "." && segment != "..");
            }
        }
    }

    #[test]
    fn merge() {
        assert_eq!(merge_paths(true, "", "g"), "/g");
        assert_eq!(merge_paths(true, "/b/c/d;p", "g"), "/b/c/g");
        assert_eq!(merge_paths(false, "a", "g"), "g");
    }

    #[test]
    fn reference_splitting() {
        let r = ReferenceParts::split("http://h/p?q#f");
        assert_eq!(r.scheme, Some("http"));
        assert_eq!(r.authority, Some("h"));
        assert_eq!(r.path, "/p");
        assert_eq!(r.query, Some("q"));
        assert_eq!(r.fragment, Some("f"));

        let r = ReferenceParts::split("../g");
        assert_eq!(r.scheme, None);
        assert_eq!(r.authority, None);
        assert_eq!(r.path, "../g");
        assert_eq!(r.query, None);
        assert_eq!(r.fragment, None);

        // A colon inside the first path segment does not start a scheme
        // when the prefix is not a valid scheme name.
        let r = ReferenceParts::split("./a:b");
        assert_eq!(r.scheme, None);
        assert_eq!(r.path, "./a:b");

        let r = ReferenceParts::split("//h:8080");
        assert_eq!(r.authority, Some("h:8080"));
        assert_eq!(r.path, "");
    }
}
