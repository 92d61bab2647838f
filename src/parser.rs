// Copyright 2026 The weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The basic URL parser: a byte-driven state machine over the trimmed
//! input, producing a [`UrlRecord`](struct.UrlRecord.html) that the `Url`
//! value type commits to its serialized form.

use std::error::Error;
use std::fmt::{self, Formatter};

use crate::host::Host;
use crate::percent_encoding::{
    utf8_percent_encode_to, C0_ENCODE_SET, FRAGMENT_ENCODE_SET, PATH_ENCODE_SET,
    USERINFO_ENCODE_SET,
};
use crate::Url;

pub type ParseResult<T> = Result<T, ParseError>;

macro_rules! simple_enum_error {
    ($($name: ident => $description: expr,)+) => {
        /// Errors that abort parsing or building a URL.
        ///
        /// Recoverable input defects are reported as
        /// [`SyntaxViolation`](enum.SyntaxViolation.html)s instead.
        #[derive(PartialEq, Eq, Clone, Copy, Debug)]
        pub enum ParseError {
            $(
                $name,
            )+
        }

        impl ParseError {
            fn description(&self) -> &'static str {
                match *self {
                    $(
                        ParseError::$name => $description,
                    )+
                }
            }
        }
    }
}

simple_enum_error! {
    InvalidSyntax => "invalid URL syntax",
    InvalidScheme => "invalid or missing scheme",
    InvalidHost => "invalid host",
    InvalidPort => "invalid port number",
    InvalidPath => "invalid path",
    InvalidQuery => "invalid query",
    InvalidFragment => "invalid fragment",
    MissingSchemeNonRelativeUrl => "relative URL without a base",
    BuilderMissingHost => "user-info or port given without a host",
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

macro_rules! syntax_violation_enum {
    ($($name: ident => $description: expr,)+) => {
        /// Non-fatal syntax violations that the parser recovers from.
        ///
        /// They can be observed through
        /// [`UrlParser::syntax_violation_callback`](../struct.UrlParser.html).
        #[derive(PartialEq, Eq, Clone, Copy, Debug)]
        pub enum SyntaxViolation {
            $(
                $name,
            )+
        }

        impl SyntaxViolation {
            pub fn description(&self) -> &'static str {
                match *self {
                    $(
                        SyntaxViolation::$name => $description,
                    )+
                }
            }
        }
    }
}

syntax_violation_enum! {
    Backslash => "backslash",
    C0SpaceIgnored => "leading or trailing control or space character are ignored in URLs",
    EmbeddedCredentials => "embedding authentication information (username or password) \
                            in an URL is not recommended",
    ExpectedDoubleSlash => "expected //",
    ExpectedFileDoubleSlash => "expected // after file:",
    FileWithHostAndWindowsDrive => "file: with host and Windows drive letter",
    NonUrlCodePoint => "non-URL code point",
    PercentDecode => "expected 2 hex digits after %",
    TabOrNewlineIgnored => "tabs or newlines are ignored in URLs",
    UnencodedAtSign => "unencoded @ sign in username or password",
}

impl fmt::Display for SyntaxViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

pub(crate) type ViolationFn<'a> = Option<&'a dyn Fn(SyntaxViolation)>;

#[derive(Copy, Clone, PartialEq, Eq)]
pub enum SchemeType {
    File,
    SpecialNotFile,
    NotSpecial,
}

impl SchemeType {
    pub fn is_special(&self) -> bool {
        !matches!(*self, SchemeType::NotSpecial)
    }

    pub fn is_file(&self) -> bool {
        matches!(*self, SchemeType::File)
    }

    pub fn from(s: &str) -> Self {
        match s {
            "http" | "https" | "ws" | "wss" | "ftp" => SchemeType::SpecialNotFile,
            "file" => SchemeType::File,
            _ => SchemeType::NotSpecial,
        }
    }
}

/// <https://url.spec.whatwg.org/#default-port>
pub fn default_port(scheme: &str) -> Option<u16> {
    match scheme {
        "http" | "ws" => Some(80),
        "https" | "wss" => Some(443),
        "ftp" => Some(21),
        _ => None,
    }
}

/// The parsed form of a URL, before it is committed to a serialization.
///
/// `path` holds percent-encoded segments for hierarchical URLs, or a single
/// opaque percent-encoded string when `cannot_be_a_base` is true.
#[derive(Default)]
pub(crate) struct UrlRecord {
    pub scheme: String,
    pub username: String,
    pub password: String,
    pub host: Option<Host<String>>,
    pub port: Option<u16>,
    pub path: Vec<String>,
    pub cannot_be_a_base: bool,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
enum State {
    SchemeStart,
    Scheme,
    NoScheme,
    SpecialRelativeOrAuthority,
    PathOrAuthority,
    Relative,
    RelativeSlash,
    SpecialAuthoritySlashes,
    SpecialAuthorityIgnoreSlashes,
    Authority,
    Host,
    Port,
    File,
    FileSlash,
    FileHost,
    PathStart,
    Path,
    CannotBeABaseUrlPath,
    Query,
    Fragment,
}

pub(crate) fn parse_url(
    original_input: &str,
    base: Option<&Url>,
    vfn: ViolationFn<'_>,
) -> ParseResult<Url> {
    let input = preprocess(original_input, vfn);
    let record = run(&input, base, vfn)?;
    Url::from_record(record)
}

/// Discard leading and trailing C0-control-or-space bytes and embedded
/// tabs and newlines, reporting a violation for each kind removed.
fn preprocess(input: &str, vfn: ViolationFn<'_>) -> Vec<char> {
    let trimmed = input.trim_matches(c0_control_or_space);
    if let Some(vfn) = vfn {
        if trimmed.len() < input.len() {
            vfn(SyntaxViolation::C0SpaceIgnored)
        }
        if trimmed.chars().any(|c| matches!(c, '\t' | '\n' | '\r')) {
            vfn(SyntaxViolation::TabOrNewlineIgnored)
        }
    }
    trimmed
        .chars()
        .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
        .collect()
}

/// Drive the state table over `input`.
///
/// Several states re-enter on the same code point after switching state;
/// those arms `continue` the loop without advancing the cursor, which is
/// the rewind mechanism the transitions below rely on.
fn run(input: &[char], base: Option<&Url>, vfn: ViolationFn<'_>) -> ParseResult<UrlRecord> {
    let mut record = UrlRecord::default();
    let mut scheme_type = SchemeType::NotSpecial;
    let mut state = State::SchemeStart;
    let mut buffer = String::new();
    let mut at_sign_seen = false;
    let mut inside_brackets = false;
    let mut password_token_seen = false;
    let mut pointer = 0;

    loop {
        let c = input.get(pointer).copied();
        match state {
            State::SchemeStart => match c {
                Some(ch) if ch.is_ascii_alphabetic() => {
                    buffer.push(ch.to_ascii_lowercase());
                    state = State::Scheme;
                }
                _ => {
                    state = State::NoScheme;
                    continue;
                }
            },

            State::Scheme => match c {
                Some(ch) if ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.') => {
                    buffer.push(ch.to_ascii_lowercase());
                }
                Some(':') => {
                    record.scheme = std::mem::take(&mut buffer);
                    scheme_type = SchemeType::from(&record.scheme);
                    if scheme_type.is_file() {
                        if let Some(vfn) = vfn {
                            if !slice_starts_with(input, pointer + 1, "//") {
                                vfn(SyntaxViolation::ExpectedFileDoubleSlash)
                            }
                        }
                        state = State::File;
                    } else if scheme_type.is_special() {
                        match base {
                            Some(base) if base.scheme() == record.scheme => {
                                state = State::SpecialRelativeOrAuthority;
                            }
                            _ => state = State::SpecialAuthoritySlashes,
                        }
                    } else if input.get(pointer + 1) == Some(&'/') {
                        state = State::PathOrAuthority;
                        pointer += 1;
                    } else {
                        record.cannot_be_a_base = true;
                        record.path.push(String::new());
                        state = State::CannotBeABaseUrlPath;
                    }
                }
                _ => {
                    // Not a scheme after all; start over.
                    buffer.clear();
                    state = State::NoScheme;
                    pointer = 0;
                    continue;
                }
            },

            State::NoScheme => match base {
                None => return Err(ParseError::MissingSchemeNonRelativeUrl),
                Some(base) if base.cannot_be_a_base() => {
                    if c != Some('#') {
                        return Err(ParseError::MissingSchemeNonRelativeUrl);
                    }
                    record.scheme = base.scheme().to_owned();
                    scheme_type = SchemeType::from(&record.scheme);
                    record.cannot_be_a_base = true;
                    record.path.push(base.path().to_owned());
                    record.query = base.query().map(str::to_owned);
                    record.fragment = Some(String::new());
                    state = State::Fragment;
                }
                Some(base) => {
                    if base.scheme() == "file" {
                        state = State::File;
                    } else {
                        state = State::Relative;
                    }
                    continue;
                }
            },

            State::SpecialRelativeOrAuthority => {
                if c == Some('/') && input.get(pointer + 1) == Some(&'/') {
                    state = State::SpecialAuthorityIgnoreSlashes;
                    pointer += 1;
                } else {
                    if let Some(vfn) = vfn {
                        vfn(SyntaxViolation::ExpectedDoubleSlash)
                    }
                    state = State::Relative;
                    continue;
                }
            }

            State::PathOrAuthority => {
                if c == Some('/') {
                    state = State::Authority;
                } else {
                    state = State::Path;
                    continue;
                }
            }

            State::Relative => {
                let base = match base {
                    Some(base) => base,
                    None => return Err(ParseError::MissingSchemeNonRelativeUrl),
                };
                debug_assert!(!base.cannot_be_a_base());
                record.scheme = base.scheme().to_owned();
                scheme_type = SchemeType::from(&record.scheme);
                match c {
                    None => {
                        copy_authority(&mut record, base);
                        record.path = base.path_segments_vec();
                        record.query = base.query().map(str::to_owned);
                    }
                    Some('/') => state = State::RelativeSlash,
                    Some('\\') if scheme_type.is_special() => {
                        if let Some(vfn) = vfn {
                            vfn(SyntaxViolation::Backslash)
                        }
                        state = State::RelativeSlash;
                    }
                    Some('?') => {
                        copy_authority(&mut record, base);
                        record.path = base.path_segments_vec();
                        record.query = Some(String::new());
                        state = State::Query;
                    }
                    Some('#') => {
                        copy_authority(&mut record, base);
                        record.path = base.path_segments_vec();
                        record.query = base.query().map(str::to_owned);
                        record.fragment = Some(String::new());
                        state = State::Fragment;
                    }
                    Some(_) => {
                        copy_authority(&mut record, base);
                        record.path = base.path_segments_vec();
                        shorten_path(scheme_type, &mut record.path);
                        state = State::Path;
                        continue;
                    }
                }
            }

            State::RelativeSlash => {
                let base = match base {
                    Some(base) => base,
                    None => return Err(ParseError::MissingSchemeNonRelativeUrl),
                };
                if scheme_type.is_special() && matches!(c, Some('/') | Some('\\')) {
                    if c == Some('\\') {
                        if let Some(vfn) = vfn {
                            vfn(SyntaxViolation::Backslash)
                        }
                    }
                    state = State::SpecialAuthorityIgnoreSlashes;
                } else if c == Some('/') {
                    state = State::Authority;
                } else {
                    copy_authority(&mut record, base);
                    state = State::Path;
                    continue;
                }
            }

            State::SpecialAuthoritySlashes => {
                if c == Some('/') && input.get(pointer + 1) == Some(&'/') {
                    state = State::SpecialAuthorityIgnoreSlashes;
                    pointer += 1;
                } else {
                    if let Some(vfn) = vfn {
                        vfn(SyntaxViolation::ExpectedDoubleSlash)
                    }
                    state = State::SpecialAuthorityIgnoreSlashes;
                    continue;
                }
            }

            State::SpecialAuthorityIgnoreSlashes => {
                if matches!(c, Some('/') | Some('\\')) {
                    if let Some(vfn) = vfn {
                        vfn(SyntaxViolation::ExpectedDoubleSlash)
                    }
                } else {
                    state = State::Authority;
                    continue;
                }
            }

            State::Authority => match c {
                Some('@') => {
                    if let Some(vfn) = vfn {
                        if at_sign_seen {
                            vfn(SyntaxViolation::UnencodedAtSign)
                        } else {
                            vfn(SyntaxViolation::EmbeddedCredentials)
                        }
                    }
                    if at_sign_seen {
                        buffer.insert_str(0, "%40");
                    }
                    at_sign_seen = true;
                    for ch in buffer.chars() {
                        if ch == ':' && !password_token_seen {
                            password_token_seen = true;
                            continue;
                        }
                        let target = if password_token_seen {
                            &mut record.password
                        } else {
                            &mut record.username
                        };
                        utf8_percent_encode_to(
                            ch.encode_utf8(&mut [0; 4]),
                            USERINFO_ENCODE_SET,
                            target,
                        );
                    }
                    buffer.clear();
                }
                None | Some('/') | Some('?') | Some('#') => {
                    if at_sign_seen && buffer.is_empty() {
                        return Err(ParseError::InvalidSyntax);
                    }
                    pointer -= buffer.chars().count();
                    buffer.clear();
                    state = State::Host;
                    continue;
                }
                Some('\\') if scheme_type.is_special() => {
                    if at_sign_seen && buffer.is_empty() {
                        return Err(ParseError::InvalidSyntax);
                    }
                    pointer -= buffer.chars().count();
                    buffer.clear();
                    state = State::Host;
                    continue;
                }
                Some(ch) => buffer.push(ch),
            },

            State::Host => {
                let terminator = matches!(c, None | Some('/') | Some('?') | Some('#'))
                    || (c == Some('\\') && scheme_type.is_special());
                if c == Some(':') && !inside_brackets {
                    if buffer.is_empty() {
                        return Err(ParseError::InvalidHost);
                    }
                    record.host = Some(Host::parse(&buffer, scheme_type.is_special())?);
                    buffer.clear();
                    state = State::Port;
                } else if terminator {
                    if scheme_type.is_special() && buffer.is_empty() {
                        return Err(ParseError::InvalidHost);
                    }
                    record.host = Some(Host::parse(&buffer, scheme_type.is_special())?);
                    buffer.clear();
                    state = State::PathStart;
                    continue;
                } else if let Some(ch) = c {
                    match ch {
                        '[' => inside_brackets = true,
                        ']' => inside_brackets = false,
                        _ => {}
                    }
                    buffer.push(ch);
                }
            }

            State::Port => {
                let terminator = matches!(c, None | Some('/') | Some('?') | Some('#'))
                    || (c == Some('\\') && scheme_type.is_special());
                match c {
                    Some(ch) if ch.is_ascii_digit() => buffer.push(ch),
                    _ if terminator => {
                        if !buffer.is_empty() {
                            let port = buffer
                                .parse::<u32>()
                                .map_err(|_| ParseError::InvalidPort)?;
                            if port > u32::from(u16::max_value()) {
                                return Err(ParseError::InvalidPort);
                            }
                            let port = port as u16;
                            record.port = if default_port(&record.scheme) == Some(port) {
                                None
                            } else {
                                Some(port)
                            };
                            buffer.clear();
                        }
                        state = State::PathStart;
                        continue;
                    }
                    _ => return Err(ParseError::InvalidPort),
                }
            }

            State::File => {
                record.scheme = "file".to_owned();
                scheme_type = SchemeType::File;
                record.host = Some(Host::Empty);
                let base_file = base.filter(|b| b.scheme() == "file");
                match c {
                    Some('/') | Some('\\') => {
                        if c == Some('\\') {
                            if let Some(vfn) = vfn {
                                vfn(SyntaxViolation::Backslash)
                            }
                        }
                        state = State::FileSlash;
                    }
                    _ => match base_file {
                        Some(base) => match c {
                            None => {
                                record.host = base.host().map(|h| h.to_owned());
                                record.path = base.path_segments_vec();
                                record.query = base.query().map(str::to_owned);
                            }
                            Some('?') => {
                                record.host = base.host().map(|h| h.to_owned());
                                record.path = base.path_segments_vec();
                                record.query = Some(String::new());
                                state = State::Query;
                            }
                            Some('#') => {
                                record.host = base.host().map(|h| h.to_owned());
                                record.path = base.path_segments_vec();
                                record.query = base.query().map(str::to_owned);
                                record.fragment = Some(String::new());
                                state = State::Fragment;
                            }
                            Some(_) => {
                                if !starts_with_windows_drive_letter(&input[pointer..]) {
                                    record.host = base.host().map(|h| h.to_owned());
                                    record.path = base.path_segments_vec();
                                    shorten_path(scheme_type, &mut record.path);
                                }
                                state = State::Path;
                                continue;
                            }
                        },
                        None => {
                            state = State::Path;
                            continue;
                        }
                    },
                }
            }

            State::FileSlash => match c {
                Some('/') | Some('\\') => {
                    if c == Some('\\') {
                        if let Some(vfn) = vfn {
                            vfn(SyntaxViolation::Backslash)
                        }
                    }
                    state = State::FileHost;
                }
                _ => {
                    if let Some(base) = base.filter(|b| b.scheme() == "file") {
                        record.host = base.host().map(|h| h.to_owned());
                        let base_path = base.path_segments_vec();
                        if !starts_with_windows_drive_letter(&input[pointer..]) {
                            if let Some(first) = base_path.first() {
                                if is_normalized_windows_drive_letter(first) {
                                    record.path.push(first.clone());
                                }
                            }
                        }
                    }
                    state = State::Path;
                    continue;
                }
            },

            State::FileHost => match c {
                None | Some('/') | Some('\\') | Some('?') | Some('#') => {
                    if is_windows_drive_letter(&buffer) {
                        if let Some(vfn) = vfn {
                            vfn(SyntaxViolation::FileWithHostAndWindowsDrive)
                        }
                        // Windows drive letter quirk: the buffer is kept
                        // and re-used as the first path segment.
                        state = State::Path;
                        continue;
                    }
                    if buffer.is_empty() {
                        record.host = Some(Host::Empty);
                    } else {
                        let host = Host::parse(&buffer, true)?;
                        record.host = Some(match host {
                            Host::Domain(ref d) if d == "localhost" => Host::Empty,
                            host => host,
                        });
                        buffer.clear();
                    }
                    state = State::PathStart;
                    continue;
                }
                Some(ch) => buffer.push(ch),
            },

            State::PathStart => {
                if scheme_type.is_special() {
                    if c == Some('\\') {
                        if let Some(vfn) = vfn {
                            vfn(SyntaxViolation::Backslash)
                        }
                    }
                    state = State::Path;
                    if !matches!(c, Some('/') | Some('\\')) {
                        continue;
                    }
                } else {
                    match c {
                        Some('?') => {
                            record.query = Some(String::new());
                            state = State::Query;
                        }
                        Some('#') => {
                            record.fragment = Some(String::new());
                            state = State::Fragment;
                        }
                        Some(ch) => {
                            state = State::Path;
                            if ch != '/' {
                                continue;
                            }
                        }
                        None => {}
                    }
                }
            }

            State::Path => {
                let segment_end = matches!(c, None | Some('/') | Some('?') | Some('#'))
                    || (c == Some('\\') && scheme_type.is_special());
                if segment_end {
                    if c == Some('\\') {
                        if let Some(vfn) = vfn {
                            vfn(SyntaxViolation::Backslash)
                        }
                    }
                    let ends_with_slash =
                        c == Some('/') || (c == Some('\\') && scheme_type.is_special());
                    if is_double_dot_segment(&buffer) {
                        shorten_path(scheme_type, &mut record.path);
                        if !ends_with_slash {
                            record.path.push(String::new());
                        }
                    } else if is_single_dot_segment(&buffer) {
                        if !ends_with_slash {
                            record.path.push(String::new());
                        }
                    } else {
                        if scheme_type.is_file()
                            && record.path.is_empty()
                            && is_windows_drive_letter(&buffer)
                        {
                            if !matches!(record.host, None | Some(Host::Empty)) {
                                if let Some(vfn) = vfn {
                                    vfn(SyntaxViolation::FileWithHostAndWindowsDrive)
                                }
                                record.host = Some(Host::Empty);
                            }
                            buffer.replace_range(1..2, ":");
                        }
                        record.path.push(std::mem::take(&mut buffer));
                    }
                    buffer.clear();
                    match c {
                        Some('?') => {
                            record.query = Some(String::new());
                            state = State::Query;
                        }
                        Some('#') => {
                            record.fragment = Some(String::new());
                            state = State::Fragment;
                        }
                        _ => {}
                    }
                } else if let Some(ch) = c {
                    check_url_code_point(input, pointer, ch, vfn);
                    utf8_percent_encode_to(
                        ch.encode_utf8(&mut [0; 4]),
                        PATH_ENCODE_SET,
                        &mut buffer,
                    );
                }
            }

            State::CannotBeABaseUrlPath => match c {
                Some('?') => {
                    record.query = Some(String::new());
                    state = State::Query;
                }
                Some('#') => {
                    record.fragment = Some(String::new());
                    state = State::Fragment;
                }
                Some(ch) => {
                    check_url_code_point(input, pointer, ch, vfn);
                    utf8_percent_encode_to(
                        ch.encode_utf8(&mut [0; 4]),
                        C0_ENCODE_SET,
                        &mut record.path[0],
                    );
                }
                None => {}
            },

            State::Query => match c {
                Some('#') => {
                    record.fragment = Some(String::new());
                    state = State::Fragment;
                }
                Some(ch) => {
                    check_url_code_point(input, pointer, ch, vfn);
                    let query = record.query.get_or_insert_with(String::new);
                    if scheme_type.is_special() {
                        utf8_percent_encode_to(
                            ch.encode_utf8(&mut [0; 4]),
                            PATH_ENCODE_SET,
                            query,
                        );
                    } else {
                        utf8_percent_encode_to(
                            ch.encode_utf8(&mut [0; 4]),
                            FRAGMENT_ENCODE_SET,
                            query,
                        );
                    }
                }
                None => {}
            },

            State::Fragment => {
                if let Some(ch) = c {
                    check_url_code_point(input, pointer, ch, vfn);
                    let fragment = record.fragment.get_or_insert_with(String::new);
                    utf8_percent_encode_to(
                        ch.encode_utf8(&mut [0; 4]),
                        FRAGMENT_ENCODE_SET,
                        fragment,
                    );
                }
            }
        }

        match c {
            None => break,
            Some(_) => pointer += 1,
        }
    }

    debug_assert!(!record.cannot_be_a_base || record.host.is_none());
    debug_assert!(!record.cannot_be_a_base || record.port.is_none());
    Ok(record)
}

fn copy_authority(record: &mut UrlRecord, base: &Url) {
    record.username = base.username().to_owned();
    record.password = base.password().unwrap_or("").to_owned();
    record.host = base.host().map(|h| h.to_owned());
    record.port = base.port();
}

/// Remove the last path segment, unless it is a `file:` drive letter that
/// must be preserved.
fn shorten_path(scheme_type: SchemeType, path: &mut Vec<String>) {
    if scheme_type.is_file()
        && path.len() == 1
        && is_normalized_windows_drive_letter(&path[0])
    {
        return;
    }
    path.pop();
}

fn is_single_dot_segment(segment: &str) -> bool {
    matches!(segment.to_ascii_lowercase().as_str(), "." | "%2e")
}

fn is_double_dot_segment(segment: &str) -> bool {
    matches!(
        segment.to_ascii_lowercase().as_str(),
        ".." | ".%2e" | "%2e." | "%2e%2e"
    )
}

/// A segment that is exactly an ASCII letter followed by `:` or `|`.
pub(crate) fn is_windows_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && matches!(bytes[1], b':' | b'|')
}

fn is_normalized_windows_drive_letter(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Whether the remaining input begins with a Windows drive letter that is
/// either at the end of the input or followed by a path/query/fragment
/// delimiter.
fn starts_with_windows_drive_letter(input: &[char]) -> bool {
    if input.len() < 2 {
        return false;
    }
    if !(input[0].is_ascii_alphabetic() && matches!(input[1], ':' | '|')) {
        return false;
    }
    match input.get(2) {
        None => true,
        Some(&c) => matches!(c, '/' | '\\' | '?' | '#'),
    }
}

fn slice_starts_with(input: &[char], at: usize, prefix: &str) -> bool {
    let mut i = at;
    for ch in prefix.chars() {
        if input.get(i) != Some(&ch) {
            return false;
        }
        i += 1;
    }
    true
}

fn check_url_code_point(input: &[char], pointer: usize, c: char, vfn: ViolationFn<'_>) {
    if let Some(vfn) = vfn {
        if c == '%' {
            let hex_follows = matches!(
                (input.get(pointer + 1), input.get(pointer + 2)),
                (Some(&a), Some(&b)) if a.is_ascii_hexdigit() && b.is_ascii_hexdigit()
            );
            if !hex_follows {
                vfn(SyntaxViolation::PercentDecode)
            }
        } else if !is_url_code_point(c) {
            vfn(SyntaxViolation::NonUrlCodePoint)
        }
    }
}

/// <https://url.spec.whatwg.org/#c0-controls-and-space>
#[inline]
fn c0_control_or_space(ch: char) -> bool {
    ch <= ' ' // U+0000 to U+0020
}

// Non URL code points:
// U+0000 to U+0020 (space)
// " # % < > [ \ ] ^ ` { | }
// U+007F to U+009F
// surrogates
// U+FDD0 to U+FDEF
// Last two of each plane: U+__FFFE to U+__FFFF for __ in 00 to 10 hex
#[inline]
fn is_url_code_point(c: char) -> bool {
    matches!(c,
        'a'..='z' |
        'A'..='Z' |
        '0'..='9' |
        '!' | '$' | '&' | '\'' | '(' | ')' | '*' | '+' | ',' | '-' |
        '.' | '/' | ':' | ';' | '=' | '?' | '@' | '_' | '~' |
        '\u{A0}'..='\u{D7FF}' | '\u{E000}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' |
        '\u{10000}'..='\u{1FFFD}' | '\u{20000}'..='\u{2FFFD}' |
        '\u{30000}'..='\u{3FFFD}' | '\u{40000}'..='\u{4FFFD}' |
        '\u{50000}'..='\u{5FFFD}' | '\u{60000}'..='\u{6FFFD}' |
        '\u{70000}'..='\u{7FFFD}' | '\u{80000}'..='\u{8FFFD}' |
        '\u{90000}'..='\u{9FFFD}' | '\u{A0000}'..='\u{AFFFD}' |
        '\u{B0000}'..='\u{BFFFD}' | '\u{C0000}'..='\u{CFFFD}' |
        '\u{D0000}'..='\u{DFFFD}' | '\u{E1000}'..='\u{EFFFD}' |
        '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_segment_permutations() {
        assert!(is_single_dot_segment("."));
        assert!(is_single_dot_segment("%2e"));
        assert!(is_single_dot_segment("%2E"));
        assert!(!is_single_dot_segment("a."));
        assert!(is_double_dot_segment(".."));
        assert!(is_double_dot_segment(".%2e"));
        assert!(is_double_dot_segment("%2E."));
        assert!(is_double_dot_segment("%2e%2E"));
        assert!(!is_double_dot_segment("..."));
    }

    #[test]
    fn drive_letters() {
        assert!(is_windows_drive_letter("c:"));
        assert!(is_windows_drive_letter("C|"));
        assert!(!is_windows_drive_letter("c"));
        assert!(!is_windows_drive_letter("cc:"));
        assert!(is_normalized_windows_drive_letter("c:"));
        assert!(!is_normalized_windows_drive_letter("c|"));
        let chars: Vec<char> = "c:/x".chars().collect();
        assert!(starts_with_windows_drive_letter(&chars));
        let chars: Vec<char> = "c:x".chars().collect();
        assert!(!starts_with_windows_drive_letter(&chars));
    }

    #[test]
    fn scheme_table() {
        assert_eq!(default_port("http"), Some(80));
        assert_eq!(default_port("https"), Some(443));
        assert_eq!(default_port("ws"), Some(80));
        assert_eq!(default_port("wss"), Some(443));
        assert_eq!(default_port("ftp"), Some(21));
        assert_eq!(default_port("file"), None);
        assert_eq!(default_port("foo"), None);
        assert!(SchemeType::from("file").is_file());
        assert!(SchemeType::from("http").is_special());
        assert!(!SchemeType::from("mailto").is_special());
    }
}
