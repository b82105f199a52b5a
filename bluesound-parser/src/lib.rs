//! # bluesound-parser
//!
//! Typed schemas for the XML documents returned by the BluOS HTTP API, and
//! the decode contract shared by the controller and its poller.
//!
//! ## Usage
//!
//! ```rust
//! use bluesound_parser::{decode, Volume};
//!
//! let volume: Volume = decode(b"<volume>42</volume>").unwrap();
//! assert_eq!(volume.level, 42);
//! ```
//!
//! Decoding is forgiving about content (unknown fields are ignored, missing
//! fields keep their zero value) but strict about shape: a body whose root
//! element does not match the schema is rejected with
//! [`DecodeError::UnexpectedRoot`].

pub mod error;
pub mod schemas;
pub mod xml_decode;

pub use error::{DecodeError, DecodeResult};
pub use schemas::*;
pub use xml_decode::{decode, XmlResponse};
