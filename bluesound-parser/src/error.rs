//! Error types for decoding device responses

use thiserror::Error;

/// Errors that can occur while decoding an XML response body
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The body was empty or contained no element at all
    #[error("Empty XML document")]
    EmptyDocument,

    /// The body was not valid UTF-8
    #[error("Response body is not valid UTF-8: {0}")]
    InvalidUtf8(String),

    /// The body is not well-formed XML
    #[error("Invalid XML structure: {0}")]
    InvalidXmlStructure(String),

    /// The document root does not belong to the endpoint that was queried
    #[error("Unexpected root element: expected <{expected}>, found <{found}>")]
    UnexpectedRoot { expected: String, found: String },

    /// serde could not map the document onto the schema
    #[error("XML deserialization failed: {0}")]
    XmlDeserializationFailed(String),
}

/// Result type alias for decoding operations
pub type DecodeResult<T> = Result<T, DecodeError>;
