//! XML decoding utilities for BluOS responses.
//!
//! Every endpoint answers with a small XML document whose root element
//! identifies the schema (`<status>`, `<SyncStatus>`, `<volume>`, ...). Decoding
//! happens in two steps: the root element is checked against the schema's
//! expected root, then the whole document is handed to `quick_xml::de`.

use crate::error::{DecodeError, DecodeResult};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::{DeserializeOwned, Deserializer};
use serde::Deserialize;
use std::fmt::Display;
use std::str::FromStr;

/// A response schema bound to the root element its endpoint returns.
///
/// Implementors must be `Default` so callers can fall back to a zero-valued
/// record when a request or decode fails.
pub trait XmlResponse: DeserializeOwned + Default {
    /// Name of the document root element, matched case-sensitively
    const ROOT: &'static str;
}

/// Decode a raw response body into `T`.
///
/// Unknown elements and attributes are ignored; fields missing from the
/// document keep their zero value.
///
/// # Errors
///
/// Fails when the body is not UTF-8, is empty, is not well-formed, has a root
/// other than [`XmlResponse::ROOT`], or cannot be mapped onto `T`.
pub fn decode<T: XmlResponse>(body: &[u8]) -> DecodeResult<T> {
    let xml = std::str::from_utf8(body).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))?;

    let found = root_element(xml)?;
    if found != T::ROOT {
        return Err(DecodeError::UnexpectedRoot {
            expected: T::ROOT.to_string(),
            found,
        });
    }

    parse(xml)
}

/// Parse an XML string into a deserializable type without checking the root.
pub fn parse<T: DeserializeOwned>(xml: &str) -> DecodeResult<T> {
    quick_xml::de::from_str(xml).map_err(|e| DecodeError::XmlDeserializationFailed(e.to_string()))
}

/// Return the local name of the first element in the document.
pub fn root_element(xml: &str) -> DecodeResult<String> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(element)) | Ok(Event::Empty(element)) => {
                return Ok(String::from_utf8_lossy(element.local_name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => return Err(DecodeError::EmptyDocument),
            Ok(_) => continue,
            Err(e) => return Err(DecodeError::InvalidXmlStructure(e.to_string())),
        }
    }
}

/// Custom deserializer for numeric fields.
///
/// BluOS emits empty elements (`<secs></secs>`) and padded values for numbers
/// it has no value for. Those decode as the type's zero value instead of
/// failing the whole document; anything else non-numeric is still an error.
/// Used with serde's `deserialize_with` attribute.
pub fn lenient_number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: Display,
{
    let raw = String::deserialize(deserializer)?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse::<T>().map_err(serde::de::Error::custom)
}
