// Copyright 2026 The weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::ops::{Index, Range, RangeFrom, RangeFull, RangeTo};

use crate::Url;

impl Index<RangeFull> for Url {
    type Output = str;
    fn index(&self, _: RangeFull) -> &str {
        self.as_str()
    }
}

impl Index<RangeFrom<Position>> for Url {
    type Output = str;
    fn index(&self, range: RangeFrom<Position>) -> &str {
        &self.as_str()[self.index(range.start)..]
    }
}

impl Index<RangeTo<Position>> for Url {
    type Output = str;
    fn index(&self, range: RangeTo<Position>) -> &str {
        &self.as_str()[..self.index(range.end)]
    }
}

impl Index<Range<Position>> for Url {
    type Output = str;
    fn index(&self, range: Range<Position>) -> &str {
        &self.as_str()[self.index(range.start)..self.index(range.end)]
    }
}

/// Indicates a position within a URL based on its components.
///
/// A range of positions can be used for slicing `Url`:
///
/// ```rust
/// # use weburl::{Url, Position};
/// # fn something(some_url: Url) {
/// let serialization: &str = &some_url[..];
/// let serialization_without_fragment: &str = &some_url[..Position::QueryEnd];
/// let authority: &str = &some_url[Position::UsernameStart..Position::PortEnd];
/// let scheme_relative: &str = &some_url[Position::UsernameStart..];
/// # }
/// ```
///
/// In a pseudo-grammar (where `[`…`]?` makes a sub-sequence optional),
/// URL components and delimiters that separate them are:
///
/// ```notrust
/// url =
///     scheme ":"
///     [ "//" [ username [ ":" password ]? "@" ]? host [ ":" port ]? ]?
///     path [ "?" query ]? [ "#" fragment ]?
/// ```
///
/// When a given component is not present,
/// its "start" and "end" position are the same
/// (so that `&some_url[FooStart..FooEnd]` is the empty string)
/// and component ordering is preserved
/// (so that a missing query "is between" a path and a fragment).
///
/// The end of a component and the start of the next are either the same or
/// separated by a delimiter.
/// (Note that the initial `/` of a path is considered part of the path
/// here, not a delimiter.)
/// For example, `&url[..FragmentStart]` would include a `#` delimiter
/// (if present in `url`), so `&url[..QueryEnd]` might be desired instead.
///
/// `SchemeStart` and `FragmentEnd` are always the start and end of the
/// entire URL, so `&url[SchemeStart..X]` is the same as `&url[..X]`
/// and `&url[X..FragmentEnd]` is the same as `&url[X..]`.
#[derive(Copy, Clone, Debug)]
pub enum Position {
    SchemeStart,
    SchemeEnd,
    UsernameStart,
    UsernameEnd,
    PasswordStart,
    PasswordEnd,
    HostStart,
    HostEnd,
    PortStart,
    PortEnd,
    PathStart,
    PathEnd,
    QueryStart,
    QueryEnd,
    FragmentStart,
    FragmentEnd,
}

impl Url {
    #[inline]
    fn index(&self, position: Position) -> usize {
        match position {
            Position::SchemeStart => 0,

            Position::SchemeEnd => self.scheme_end as usize,

            Position::UsernameStart => {
                if self.has_authority() {
                    debug_assert!(self.slice_from(self.scheme_end).starts_with("://"));
                    self.scheme_end as usize + "://".len()
                } else {
                    debug_assert!(self.byte_at(self.scheme_end) == b':');
                    self.scheme_end as usize + ":".len()
                }
            }

            Position::UsernameEnd => self.username_end as usize,

            Position::PasswordStart => {
                if self.has_userinfo() && self.byte_at(self.username_end) == b':' {
                    self.username_end as usize + ":".len()
                } else {
                    self.username_end as usize
                }
            }

            Position::PasswordEnd => {
                if self.has_userinfo() {
                    debug_assert!(self.byte_at(self.host_start - "@".len() as u32) == b'@');
                    self.host_start as usize - "@".len()
                } else {
                    self.host_start as usize
                }
            }

            Position::HostStart => self.host_start as usize,

            Position::HostEnd => self.host_end as usize,

            Position::PortStart => {
                if self.port.is_some() {
                    debug_assert!(self.byte_at(self.host_end) == b':');
                    self.host_end as usize + ":".len()
                } else {
                    self.host_end as usize
                }
            }

            Position::PortEnd => self.path_start as usize,

            Position::PathStart => self.path_start as usize,

            Position::PathEnd => match (self.query_start, self.fragment_start) {
                (Some(q), _) => q as usize,
                (None, Some(f)) => f as usize,
                (None, None) => self.as_str().len(),
            },

            Position::QueryStart => match (self.query_start, self.fragment_start) {
                (Some(q), _) => {
                    debug_assert!(self.byte_at(q) == b'?');
                    q as usize + "?".len()
                }
                (None, Some(f)) => f as usize,
                (None, None) => self.as_str().len(),
            },

            Position::QueryEnd => match self.fragment_start {
                None => self.as_str().len(),
                Some(f) => f as usize,
            },

            Position::FragmentStart => match self.fragment_start {
                Some(f) => {
                    debug_assert!(self.byte_at(f) == b'#');
                    f as usize + "#".len()
                }
                None => self.as_str().len(),
            },

            Position::FragmentEnd => self.as_str().len(),
        }
    }
}
