// Copyright 2026 The weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! weburl is an implementation of the
//! [URL Standard](https://url.spec.whatwg.org/) with RFC 3986 reference
//! resolution and normalization on top.
//!
//! # URL parsing and data structures
//!
//! First, URL parsing may fail for various reasons and therefore returns a
//! `Result`.
//!
//! ```
//! use weburl::{ParseError, Url};
//! assert_eq!(Url::parse("http://[:::1]"), Err(ParseError::InvalidHost));
//! ```
//!
//! Let’s parse a valid URL and look at its components.
//!
//! ```
//! # use weburl::Url;
//! # fn run() -> Result<(), weburl::ParseError> {
//! let issue_list_url = Url::parse(
//!     "https://github.com/rust-lang/rust/issues?labels=E-easy&state=open"
//! )?;
//! assert_eq!(issue_list_url.scheme(), "https");
//! assert_eq!(issue_list_url.host_str(), Some("github.com"));
//! assert_eq!(issue_list_url.port(), None);
//! assert_eq!(issue_list_url.path(), "/rust-lang/rust/issues");
//! assert_eq!(issue_list_url.path_segments().map(|s| s.collect::<Vec<_>>()),
//!            Some(vec!["rust-lang", "rust", "issues"]));
//! assert_eq!(issue_list_url.query(), Some("labels=E-easy&state=open"));
//! assert_eq!(issue_list_url.fragment(), None);
//! assert!(!issue_list_url.cannot_be_a_base());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! Some URLs are said to be *cannot-be-a-base*:
//! they don’t have a username, password, host, or port,
//! and their "path" is an arbitrary string rather than slash-separated
//! segments:
//!
//! ```
//! # use weburl::Url;
//! # fn run() -> Result<(), weburl::ParseError> {
//! let data_url = Url::parse("data:text/plain,Hello?World#")?;
//! assert!(data_url.cannot_be_a_base());
//! assert_eq!(data_url.path(), "text/plain,Hello");
//! assert_eq!(data_url.query(), Some("World"));
//! assert_eq!(data_url.fragment(), Some(""));
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
//!
//! # Base URL
//!
//! Many contexts allow URL *references* that can be relative to a *base
//! URL*:
//!
//! ```html
//! <link rel="stylesheet" href="../main.css">
//! ```
//!
//! Since parsed URLs are absolute, giving a base is required for parsing
//! relative URLs:
//!
//! ```
//! use weburl::{ParseError, Url};
//! assert_eq!(Url::parse("../main.css"),
//!            Err(ParseError::MissingSchemeNonRelativeUrl));
//! ```
//!
//! Use the `join` method on an `Url` to use it as a base URL:
//!
//! ```
//! # use weburl::Url;
//! # fn run() -> Result<(), weburl::ParseError> {
//! let this_document = Url::parse("http://servo.github.io/rust-url/url/index.html")?;
//! let css_url = this_document.join("../main.css")?;
//! assert_eq!(css_url.as_str(), "http://servo.github.io/rust-url/main.css");
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt::{self, Write};
use std::hash::{Hash, Hasher};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::{self, FromStr};

pub use crate::builder::UrlBuilder;
pub use crate::host::Host;
pub use crate::origin::{OpaqueOrigin, Origin};
pub use crate::parser::{
    default_port, ParseError, ParseResult, SchemeType, SyntaxViolation,
};
pub use crate::resolve::ComparisonLevel;
pub use crate::slicing::Position;

use crate::parser::UrlRecord;

mod builder;
pub mod form_urlencoded;
mod host;
mod origin;
mod parser;
pub mod percent_encoding;
mod resolve;
mod slicing;

/// A parsed URL value.
///
/// The value is immutable: it owns its serialization and every accessor
/// returns a view borrowed from it. Derived URLs ([`Url::join`],
/// [`Url::resolve_reference`], [`Url::normalize`]) are fresh values.
#[derive(Clone)]
pub struct Url {
    /// Syntax in pseudo-BNF:
    ///
    ///   url = scheme ":" [ authority ] path [ "?" query ]? [ "#" fragment ]?
    ///   authority = "//" userinfo? host [ ":" port ]?
    ///   userinfo = username [ ":" password ]? "@"
    serialization: String,
    scheme_end: u32,
    username_end: u32,
    host_start: u32,
    host_end: u32,
    host: HostInternal,
    port: Option<u16>,
    path_start: u32,
    query_start: Option<u32>,
    fragment_start: Option<u32>,
    cannot_be_a_base: bool,
}

/// The kind of host stored in the serialization, with the address copied
/// out so that IPv4/IPv6 hosts can be re-serialized canonically without
/// reparsing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum HostInternal {
    None,
    Empty,
    Domain,
    Opaque,
    Ipv4(Ipv4Addr),
    Ipv6(Ipv6Addr),
}

impl From<&'_ Host<String>> for HostInternal {
    fn from(host: &Host<String>) -> HostInternal {
        match *host {
            Host::Domain(_) => HostInternal::Domain,
            Host::Ipv4(address) => HostInternal::Ipv4(address),
            Host::Ipv6(address) => HostInternal::Ipv6(address),
            Host::Opaque(_) => HostInternal::Opaque,
            Host::Empty => HostInternal::Empty,
        }
    }
}

/// Method-chaining parser options, including a base URL for relative
/// references and a callback for recoverable syntax violations.
///
/// ```
/// use weburl::{Url, UrlParser};
/// # fn run() -> Result<(), weburl::ParseError> {
/// let base = Url::parse("http://example.com/a/b")?;
/// let url = UrlParser::new().base_url(Some(&base)).parse("c")?;
/// assert_eq!(url.as_str(), "http://example.com/a/c");
/// # Ok(())
/// # }
/// # run().unwrap();
/// ```
#[derive(Copy, Clone, Default)]
pub struct UrlParser<'a> {
    base_url: Option<&'a Url>,
    violation_fn: Option<&'a dyn Fn(SyntaxViolation)>,
}

impl<'a> UrlParser<'a> {
    #[inline]
    pub fn new() -> UrlParser<'a> {
        UrlParser {
            base_url: None,
            violation_fn: None,
        }
    }

    /// Change the base URL against which relative references resolve.
    #[inline]
    pub fn base_url(mut self, new: Option<&'a Url>) -> Self {
        self.base_url = new;
        self
    }

    /// Call the provided function on non-fatal parse errors.
    #[inline]
    pub fn syntax_violation_callback(mut self, new: Option<&'a dyn Fn(SyntaxViolation)>) -> Self {
        self.violation_fn = new;
        self
    }

    /// Parse an URL string with the configuration so far.
    pub fn parse(self, input: &str) -> ParseResult<Url> {
        parser::parse_url(input, self.base_url, self.violation_fn)
    }
}

impl Url {
    /// Parse an absolute URL from a string.
    #[inline]
    pub fn parse(input: &str) -> ParseResult<Url> {
        UrlParser::new().parse(input)
    }

    /// Parse a string as an URL, with this URL as the base URL.
    #[inline]
    pub fn join(&self, input: &str) -> ParseResult<Url> {
        UrlParser::new().base_url(Some(self)).parse(input)
    }

    /// Parse an absolute URL and report whether any recoverable syntax
    /// violation was encountered on the way.
    pub fn parse_flagging_violations(input: &str) -> ParseResult<(Url, bool)> {
        let seen = Cell::new(false);
        let record = |_: SyntaxViolation| seen.set(true);
        let url = UrlParser::new()
            .syntax_violation_callback(Some(&record))
            .parse(input)?;
        Ok((url, seen.get()))
    }

    /// Commit a parsed record to its serialization.
    ///
    /// Re-parsing the serialization yields an equal record; the component
    /// index fields let every accessor hand out a slice of it.
    pub(crate) fn from_record(record: UrlRecord) -> ParseResult<Url> {
        let mut serialization = String::new();
        serialization.push_str(&record.scheme);
        let scheme_end = to_u32(serialization.len())?;
        serialization.push(':');

        let username_end;
        let host_start;
        let host_end;
        let host_internal;
        match record.host {
            Some(ref host) => {
                serialization.push_str("//");
                if !record.username.is_empty() || !record.password.is_empty() {
                    serialization.push_str(&record.username);
                    username_end = to_u32(serialization.len())?;
                    if !record.password.is_empty() {
                        serialization.push(':');
                        serialization.push_str(&record.password);
                    }
                    serialization.push('@');
                } else {
                    username_end = to_u32(serialization.len())?;
                }
                host_start = to_u32(serialization.len())?;
                write!(&mut serialization, "{}", host).unwrap();
                host_end = to_u32(serialization.len())?;
                if let Some(port) = record.port {
                    write!(&mut serialization, ":{}", port).unwrap();
                }
                host_internal = HostInternal::from(host);
            }
            None => {
                username_end = to_u32(serialization.len())?;
                host_start = username_end;
                host_end = username_end;
                host_internal = HostInternal::None;
            }
        }

        let path_start;
        if record.cannot_be_a_base {
            debug_assert!(record.path.len() == 1);
            path_start = to_u32(serialization.len())?;
            serialization.push_str(&record.path[0]);
        } else {
            // A host-less path starting with an empty segment would
            // serialize as `//` and re-parse as an authority; the `/.`
            // prefix keeps the round trip unambiguous.
            if record.host.is_none() && record.path.len() > 1 && record.path[0].is_empty() {
                serialization.push_str("/.");
            }
            path_start = to_u32(serialization.len())?;
            for segment in &record.path {
                serialization.push('/');
                serialization.push_str(segment);
            }
        }

        let mut query_start = None;
        if let Some(ref query) = record.query {
            query_start = Some(to_u32(serialization.len())?);
            serialization.push('?');
            serialization.push_str(query);
        }
        let mut fragment_start = None;
        if let Some(ref fragment) = record.fragment {
            fragment_start = Some(to_u32(serialization.len())?);
            serialization.push('#');
            serialization.push_str(fragment);
        }

        Ok(Url {
            serialization,
            scheme_end,
            username_end,
            host_start,
            host_end,
            host: host_internal,
            port: record.port,
            path_start,
            query_start,
            fragment_start,
            cannot_be_a_base: record.cannot_be_a_base,
        })
    }

    /// Return the serialization of this URL.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.serialization
    }

    /// Return the serialization of this URL, consuming it.
    #[inline]
    pub fn into_string(self) -> String {
        self.serialization
    }

    /// Return the scheme of this URL, lower-cased, as an ASCII string
    /// without the ':' delimiter.
    #[inline]
    pub fn scheme(&self) -> &str {
        self.slice(0..self.scheme_end)
    }

    /// Whether the scheme is in the special-scheme table
    /// (`ftp`, `file`, `http`, `https`, `ws`, `wss`).
    #[inline]
    pub fn is_special(&self) -> bool {
        SchemeType::from(self.scheme()).is_special()
    }

    /// A parsed URL always has a scheme, so it is always absolute.
    #[inline]
    pub fn is_absolute(&self) -> bool {
        !self.scheme().is_empty()
    }

    /// Whether the URL is opaque: no authority, and an unstructured path.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.cannot_be_a_base
    }

    /// Return whether this URL is a cannot-be-a-base URL,
    /// meaning that parsing a relative URL string with this URL as the
    /// base will return an error.
    #[inline]
    pub fn cannot_be_a_base(&self) -> bool {
        self.cannot_be_a_base
    }

    /// Whether the serialization contains an authority component
    /// (`//` after the scheme).
    #[inline]
    pub fn has_authority(&self) -> bool {
        self.host != HostInternal::None
    }

    /// The authority of this URL: user-info, host, and port, without the
    /// leading `//`.
    pub fn authority(&self) -> Option<&str> {
        if self.has_authority() {
            Some(self.slice(self.scheme_end + 3..self.path_start))
        } else {
            None
        }
    }

    /// Return the username for this URL (typically the empty string)
    /// as a percent-encoded ASCII string.
    pub fn username(&self) -> &str {
        if self.has_userinfo() {
            self.slice(self.scheme_end + 3..self.username_end)
        } else {
            ""
        }
    }

    /// Return the password for this URL, if any, as a percent-encoded
    /// ASCII string.
    pub fn password(&self) -> Option<&str> {
        if self.has_userinfo() && self.byte_at(self.username_end) == b':' {
            debug_assert!(self.byte_at(self.host_start - 1) == b'@');
            Some(self.slice(self.username_end + 1..self.host_start - 1))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn has_userinfo(&self) -> bool {
        self.has_authority() && self.host_start > self.username_end
    }

    /// Whether the URL has a host, possibly the empty one.
    #[inline]
    pub fn has_host(&self) -> bool {
        self.host != HostInternal::None
    }

    /// Return the string representation of the host for this URL, if any.
    ///
    /// IPv6 addresses are given between `[` and `]` brackets; IPv4
    /// addresses are in canonical dotted-decimal form. The empty host
    /// yields an empty string.
    pub fn host_str(&self) -> Option<&str> {
        if self.has_host() {
            Some(self.slice(self.host_start..self.host_end))
        } else {
            None
        }
    }

    /// Return the parsed representation of the host for this URL, with
    /// string data borrowed from the serialization.
    pub fn host(&self) -> Option<Host<&str>> {
        match self.host {
            HostInternal::None => None,
            HostInternal::Empty => Some(Host::Empty),
            HostInternal::Domain => {
                Some(Host::Domain(self.slice(self.host_start..self.host_end)))
            }
            HostInternal::Opaque => {
                Some(Host::Opaque(self.slice(self.host_start..self.host_end)))
            }
            HostInternal::Ipv4(address) => Some(Host::Ipv4(address)),
            HostInternal::Ipv6(address) => Some(Host::Ipv6(address)),
        }
    }

    /// If this URL has a host and it is a domain name (not an IP address),
    /// return it.
    pub fn domain(&self) -> Option<&str> {
        match self.host {
            HostInternal::Domain => Some(self.slice(self.host_start..self.host_end)),
            _ => None,
        }
    }

    /// Return the port number for this URL, if any. Ports equal to the
    /// scheme's default are elided at parse time.
    #[inline]
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Return the port number for this URL, or the default port number if
    /// it is known for this scheme.
    #[inline]
    pub fn port_or_known_default(&self) -> Option<u16> {
        self.port.or_else(|| default_port(self.scheme()))
    }

    /// Return the path for this URL, as a percent-encoded ASCII string.
    ///
    /// For cannot-be-a-base URLs this is an arbitrary string that doesn’t
    /// start with '/'. For other URLs, this starts with a '/' slash and
    /// continues with slash-separated path segments, or is the empty
    /// string.
    pub fn path(&self) -> &str {
        self.slice(self.path_start..self.path_end())
    }

    /// Unless this URL is cannot-be-a-base, return an iterator of
    /// '/'-separated path segments, each as a percent-encoded ASCII
    /// string. Returns `None` for cannot-be-a-base URLs and URLs with an
    /// empty path.
    pub fn path_segments(&self) -> Option<str::Split<'_, char>> {
        if self.cannot_be_a_base {
            return None;
        }
        self.path()
            .strip_prefix('/')
            .map(|remainder| remainder.split('/'))
    }

    /// Return this URL’s query string, if any, as a percent-encoded ASCII
    /// string.
    pub fn query(&self) -> Option<&str> {
        match (self.query_start, self.fragment_start) {
            (None, _) => None,
            (Some(query_start), None) => {
                debug_assert!(self.byte_at(query_start) == b'?');
                Some(self.slice(query_start + 1..))
            }
            (Some(query_start), Some(fragment_start)) => {
                debug_assert!(self.byte_at(query_start) == b'?');
                Some(self.slice(query_start + 1..fragment_start))
            }
        }
    }

    /// Iterate over the query’s name-value pairs, split on `&` or `;`.
    ///
    /// An element without `=` yields the element as the name and an empty
    /// value; empty elements are skipped. The views borrow from this URL’s
    /// serialization; use the [`form_urlencoded`](form_urlencoded/index.html)
    /// module to decode them.
    pub fn query_pairs(&self) -> QueryPairs<'_> {
        QueryPairs {
            remaining: self.query(),
        }
    }

    /// Return this URL’s fragment identifier, if any, as a percent-encoded
    /// ASCII string.
    pub fn fragment(&self) -> Option<&str> {
        self.fragment_start.map(|start| {
            debug_assert!(self.byte_at(start) == b'#');
            self.slice(start + 1..)
        })
    }

    fn path_end(&self) -> u32 {
        match (self.query_start, self.fragment_start) {
            (Some(i), _) | (None, Some(i)) => i,
            (None, None) => to_u32(self.serialization.len())
                .expect("a Url serialization fits in a u32"),
        }
    }

    /// Path segments as owned strings, for relative parsing against this
    /// URL as a base.
    pub(crate) fn path_segments_vec(&self) -> Vec<String> {
        debug_assert!(!self.cannot_be_a_base);
        match self.path().strip_prefix('/') {
            Some(remainder) => remainder.split('/').map(str::to_owned).collect(),
            None => Vec::new(),
        }
    }

    #[inline]
    fn slice<R: AsRange>(&self, range: R) -> &str {
        let (start, end) = range.bounds(self.serialization.len());
        &self.serialization[start..end]
    }

    #[inline]
    pub(crate) fn slice_from(&self, start: u32) -> &str {
        &self.serialization[start as usize..]
    }

    #[inline]
    pub(crate) fn byte_at(&self, i: u32) -> u8 {
        self.serialization.as_bytes()[i as usize]
    }
}

/// Iterator over the name-value pairs of a query string.
///
/// See [`Url::query_pairs`](struct.Url.html#method.query_pairs).
#[derive(Clone, Debug)]
pub struct QueryPairs<'a> {
    remaining: Option<&'a str>,
}

impl<'a> Iterator for QueryPairs<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<(&'a str, &'a str)> {
        while let Some(remaining) = self.remaining {
            let (piece, rest) = match remaining.find(|c| c == '&' || c == ';') {
                Some(i) => (&remaining[..i], Some(&remaining[i + 1..])),
                None => (remaining, None),
            };
            self.remaining = rest;
            if piece.is_empty() {
                continue;
            }
            return Some(match piece.find('=') {
                Some(i) => (&piece[..i], &piece[i + 1..]),
                None => (piece, ""),
            });
        }
        None
    }
}

trait AsRange {
    fn bounds(self, len: usize) -> (usize, usize);
}

impl AsRange for std::ops::Range<u32> {
    fn bounds(self, _: usize) -> (usize, usize) {
        (self.start as usize, self.end as usize)
    }
}

impl AsRange for std::ops::RangeFrom<u32> {
    fn bounds(self, len: usize) -> (usize, usize) {
        (self.start as usize, len)
    }
}

#[inline]
fn to_u32(i: usize) -> ParseResult<u32> {
    if i <= u32::max_value() as usize {
        Ok(i as u32)
    } else {
        Err(ParseError::InvalidSyntax)
    }
}

/// Display the serialization of this URL.
impl fmt::Display for Url {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.serialization)
    }
}

impl fmt::Debug for Url {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Url").field(&self.serialization).finish()
    }
}

/// Parse a string as an URL, without a base URL.
impl FromStr for Url {
    type Err = ParseError;

    #[inline]
    fn from_str(input: &str) -> ParseResult<Url> {
        Url::parse(input)
    }
}

impl AsRef<str> for Url {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.serialization
    }
}

impl From<Url> for String {
    fn from(url: Url) -> String {
        url.serialization
    }
}

/// URLs compare equal when their syntax-normalized serializations are
/// byte-identical.
impl PartialEq for Url {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other, ComparisonLevel::SyntaxBased) == Ordering::Equal
    }
}

impl Eq for Url {}

/// The lexicographic byte ordering of the syntax-normalized serialized
/// forms.
impl Ord for Url {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other, ComparisonLevel::SyntaxBased)
    }
}

impl PartialOrd for Url {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The hash covers the normalized serialized byte sequence, keeping it
/// consistent with `Eq`.
impl Hash for Url {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalize(ComparisonLevel::SyntaxBased)
            .serialization
            .hash(state)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Url::parse(&s).map_err(serde::de::Error::custom)
    }
}
