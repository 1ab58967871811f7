// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Core error types for efiscodec.
//!
//! Every codec fails with a [`CodecError`] that carries enough context
//! (byte offset, line number and content, expected/actual values) to locate
//! the problem in the source file. Nothing is recovered internally.

use thiserror::Error;

/// Errors that can occur while parsing or serializing checklist files.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Unknown format or an operation the format does not support
    #[error("Unsupported format: {feature}")]
    UnsupportedFormat {
        /// What is not supported
        feature: String,
    },

    /// Magic bytes or container type/version mismatch
    #[error("Malformed header in {context}: {message}")]
    MalformedHeader {
        /// Format or container being read
        context: String,
        /// Error message
        message: String,
    },

    /// Stored checksum does not match the computed one
    #[error("Checksum mismatch: expected {expected:#010x}, computed {actual:#010x}")]
    ChecksumMismatch {
        /// Checksum stored in the file (already inverted back)
        expected: u32,
        /// Checksum computed over the file contents
        actual: u32,
    },

    /// Embedded checklist/item number disagrees with its position
    #[error("Positional mismatch at line {line}: expected {expected}, found '{content}'")]
    PositionalValidationFailure {
        /// 1-based line number
        line: usize,
        /// What the parser expected at this position
        expected: String,
        /// The offending line
        content: String,
    },

    /// Input does not have the required shape
    #[error("Schema violation in {context}: {message}")]
    SchemaViolation {
        /// Where the violation was found (format, line or offset)
        context: String,
        /// Error message
        message: String,
    },

    /// Cipher or padding failure
    #[error("Decryption failed: {message}")]
    DecryptionFailure {
        /// Error message
        message: String,
    },

    /// Buffer shorter than a structural read requires
    #[error("Truncated input: requested {requested} bytes at offset {offset}, but only {available} bytes available")]
    TruncatedInput {
        /// Requested bytes
        requested: usize,
        /// Available bytes
        available: usize,
        /// Offset of the read
        offset: usize,
    },

    /// Invalid codec configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Validation error message
        reason: String,
    },

    /// Other error
    #[error("Other error: {0}")]
    Other(String),
}

impl CodecError {
    /// Create an unsupported format error.
    pub fn unsupported(feature: impl Into<String>) -> Self {
        CodecError::UnsupportedFormat {
            feature: feature.into(),
        }
    }

    /// Create a malformed header error.
    pub fn malformed_header(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::MalformedHeader {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a checksum mismatch error.
    pub fn checksum_mismatch(expected: u32, actual: u32) -> Self {
        CodecError::ChecksumMismatch { expected, actual }
    }

    /// Create a positional validation error.
    pub fn positional(line: usize, expected: impl Into<String>, content: impl Into<String>) -> Self {
        CodecError::PositionalValidationFailure {
            line,
            expected: expected.into(),
            content: content.into(),
        }
    }

    /// Create a schema violation error.
    pub fn schema(context: impl Into<String>, message: impl Into<String>) -> Self {
        CodecError::SchemaViolation {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a decryption error.
    pub fn decryption(message: impl Into<String>) -> Self {
        CodecError::DecryptionFailure {
            message: message.into(),
        }
    }

    /// Create a truncated input error.
    pub fn truncated(requested: usize, available: usize, offset: usize) -> Self {
        CodecError::TruncatedInput {
            requested,
            available,
            offset,
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        CodecError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Get structured fields for logging.
    pub fn log_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            CodecError::UnsupportedFormat { feature } => vec![("feature", feature.clone())],
            CodecError::MalformedHeader { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::ChecksumMismatch { expected, actual } => vec![
                ("expected", format!("{expected:#010x}")),
                ("actual", format!("{actual:#010x}")),
            ],
            CodecError::PositionalValidationFailure {
                line,
                expected,
                content,
            } => vec![
                ("line", line.to_string()),
                ("expected", expected.clone()),
                ("content", content.clone()),
            ],
            CodecError::SchemaViolation { context, message } => {
                vec![("context", context.clone()), ("message", message.clone())]
            }
            CodecError::DecryptionFailure { message } => vec![("message", message.clone())],
            CodecError::TruncatedInput {
                requested,
                available,
                offset,
            } => vec![
                ("requested", requested.to_string()),
                ("available", available.to_string()),
                ("offset", offset.to_string()),
            ],
            CodecError::InvalidConfig { reason } => vec![("reason", reason.clone())],
            CodecError::Other(msg) => vec![("message", msg.clone())],
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        CodecError::schema("json", err.to_string())
    }
}

/// Result type for efiscodec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
