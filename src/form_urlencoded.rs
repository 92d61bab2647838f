// Copyright 2026 The weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Parser and serializer for the
//! [`application/x-www-form-urlencoded` format](
//! https://url.spec.whatwg.org/#application/x-www-form-urlencoded),
//! as used by HTML forms.
//!
//! Converts between a string (such as an URL’s query string)
//! and a sequence of (name, value) pairs. Names and values are UTF-8;
//! legacy character-encoding negotiation is not supported.

use std::borrow::Borrow;

use crate::percent_encoding::{
    lossy_utf8_percent_decode, percent_encode_to, FORM_URLENCODED_ENCODE_SET,
};

/// Convert a byte string in the `application/x-www-form-urlencoded` format
/// into a vector of (name, value) pairs.
///
/// Use `parse(input.as_bytes())` to parse a `&str` string.
pub fn parse(input: &[u8]) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for piece in input.split(|&b| b == b'&') {
        if piece.is_empty() {
            continue;
        }
        let (name, value) = match piece.iter().position(|b| *b == b'=') {
            Some(position) => (&piece[..position], &piece[position + 1..]),
            None => (piece, &[][..]),
        };
        pairs.push((decode_component(name), decode_component(value)));
    }
    pairs
}

fn decode_component(input: &[u8]) -> String {
    let replaced: Vec<u8> = input
        .iter()
        .map(|&b| if b == b'+' { b' ' } else { b })
        .collect();
    lossy_utf8_percent_decode(&replaced)
}

/// Convert an iterator of (name, value) pairs
/// into a string in the `application/x-www-form-urlencoded` format.
pub fn serialize<I, K, V>(pairs: I) -> String
where
    I: IntoIterator,
    I::Item: Borrow<(K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut output = String::new();
    for pair in pairs {
        let (name, value) = pair.borrow();
        if !output.is_empty() {
            output.push('&');
        }
        byte_serialize(name.as_ref().as_bytes(), &mut output);
        output.push('=');
        byte_serialize(value.as_ref().as_bytes(), &mut output);
    }
    output
}

fn byte_serialize(input: &[u8], output: &mut String) {
    for &byte in input {
        if byte == b' ' {
            output.push('+')
        } else {
            percent_encode_to(&[byte], FORM_URLENCODED_ENCODE_SET, output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_urlencoded() {
        let pairs = &[
            ("foo".to_string(), "é&".to_string()),
            ("bar".to_string(), "".to_string()),
            ("foo".to_string(), "#".to_string()),
        ];
        let encoded = serialize(pairs);
        assert_eq!(encoded, "foo=%C3%A9%26&bar=&foo=%23");
        assert_eq!(parse(encoded.as_bytes()), pairs.to_vec());
    }

    #[test]
    fn test_form_serialize() {
        let pairs = [("foo", "é&"), ("bar", ""), ("foo", "#")];

        let want = "foo=%C3%A9%26&bar=&foo=%23";
        // Works with referenced tuples
        assert_eq!(serialize(pairs.iter()), want);
        // Works with owned tuples
        assert_eq!(serialize(pairs.iter().map(|p| (p.0, p.1))), want);
    }

    #[test]
    fn test_plus_and_missing_value() {
        assert_eq!(
            parse(b"a=b+c&d"),
            vec![
                ("a".to_string(), "b c".to_string()),
                ("d".to_string(), "".to_string()),
            ]
        );
        assert_eq!(parse(b""), vec![]);
        assert_eq!(parse(b"&&"), vec![]);
    }
}
