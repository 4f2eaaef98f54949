//! Zero-copy URL parsing into offset spans, plus relative reference
//! combination.
//!
//! [`parse_url`] scans a string into a [`UrlParts`] record of
//! [`Span`]s. [`Url`] owns its string and exposes the components as
//! `&str`; [`UrlRef`] does the same over a borrowed string.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod codecs;
mod combiner;
mod cursor;
mod error;
mod log;
mod parser;
mod scheme;
mod span;
mod types;
mod url;
mod url_base;
mod url_parts;

// Public API
pub use codecs::{decode_uri_component, encode_uri_component};
pub use error::{ParseError, Result};
pub use parser::{can_parse, parse_url, parse_url_bytes};
pub use span::Span;
pub use types::SchemeType;
pub use url::{Url, UrlRef};
pub use url_base::UrlBase;
pub use url_parts::UrlParts;
