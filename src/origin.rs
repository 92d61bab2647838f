// Copyright 2026 The weburl developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::host::Host;
use crate::parser::default_port;
use crate::Url;

impl Url {
    /// Return the origin of this URL
    /// (<https://url.spec.whatwg.org/#origin>).
    ///
    /// Special non-file URLs have a tuple origin of scheme, host, and
    /// port; everything else gets a unique opaque origin.
    pub fn origin(&self) -> Origin {
        match self.scheme() {
            "blob" => {
                let result = Url::parse(self.path());
                match result {
                    Ok(ref url) => url.origin(),
                    Err(_) => Origin::new_opaque(),
                }
            }
            "ftp" | "http" | "https" | "ws" | "wss" => {
                match (self.host(), self.port_or_known_default()) {
                    (Some(host), Some(port)) => {
                        Origin::Tuple(self.scheme().to_owned(), host.to_owned(), port)
                    }
                    _ => Origin::new_opaque(),
                }
            }
            _ => Origin::new_opaque(),
        }
    }
}

/// The origin of an URL.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Origin {
    /// A globally unique identifier.
    Opaque(OpaqueOrigin),

    /// Consists of the URL's scheme, host and port.
    Tuple(String, Host<String>, u16),
}

static OPAQUE_ORIGIN_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Origin {
    /// Creates a new opaque origin that is only equal to itself.
    pub fn new_opaque() -> Origin {
        Origin::Opaque(OpaqueOrigin(
            OPAQUE_ORIGIN_COUNTER.fetch_add(1, Ordering::SeqCst),
        ))
    }

    /// Whether this origin is a (scheme, host, port) tuple as opposed to
    /// an opaque token.
    pub fn is_tuple(&self) -> bool {
        matches!(*self, Origin::Tuple(..))
    }

    /// <https://html.spec.whatwg.org/multipage/#ascii-serialisation-of-an-origin>
    pub fn ascii_serialization(&self) -> String {
        match *self {
            Origin::Opaque(_) => "null".to_owned(),
            Origin::Tuple(ref scheme, ref host, port) => {
                if default_port(scheme) == Some(port) {
                    format!("{}://{}", scheme, host)
                } else {
                    format!("{}://{}:{}", scheme, host, port)
                }
            }
        }
    }
}

/// Opaque identifier for URLs that have file or other schemes.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct OpaqueOrigin(usize);
