// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the converter crate.
//!
//! Every parse or resolution failure is reported through [`ConvertError`]. The
//! message of each variant names the offending input and, where there is one,
//! the format the converter expected.

use thiserror::Error;

/// The main error type for conversion operations.
///
/// This enum represents all possible errors that can occur when converting text
/// into a typed value or when resolving the converter for a slot. It is marked
/// as `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// # Examples
///
/// ```
/// use hexconv::domain::errors::{ConvertError, ErrorKind};
///
/// let error = ConvertError::MissingPort {
///     input: "10.0.0.1".to_string(),
///     expected: "ipaddr:port",
/// };
/// assert_eq!(error.kind(), ErrorKind::MissingPort);
/// assert!(error.to_string().contains("10.0.0.1"));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The input was empty or blank where a value was required.
    #[error("Unable to convert '{input}' to {target}: value is empty. Must be in format '{expected}'")]
    Empty {
        /// The full input text, which is empty or whitespace only
        input: String,
        /// The name of the type that was being produced
        target: &'static str,
        /// The expected input format
        expected: &'static str,
    },

    /// An opening `[` had no matching `]`.
    #[error("Unable to convert '{input}' to an endpoint: unterminated '['. Must be in format '{expected}'")]
    UnterminatedBracket {
        /// The full input text
        input: String,
        /// The expected input format
        expected: &'static str,
    },

    /// No port separator was found and no default port is configured.
    #[error("Unable to convert '{input}' to an endpoint: missing port. Must be in format '{expected}'")]
    MissingPort {
        /// The full input text
        input: String,
        /// The expected input format
        expected: &'static str,
    },

    /// The address segment is not a valid address literal.
    #[error("Unable to convert '{input}' to {target}: invalid address '{address}'. Must be in format '{expected}'")]
    InvalidAddress {
        /// The full input text
        input: String,
        /// The address segment that failed to parse
        address: String,
        /// The name of the type that was being produced
        target: &'static str,
        /// The expected input format
        expected: &'static str,
    },

    /// The port segment is present but is not an integer in `0..=65535`.
    #[error("Unable to convert '{input}' to an endpoint: invalid port '{port}'. Must be in format '{expected}'")]
    InvalidPort {
        /// The full input text
        input: String,
        /// The port segment that failed to parse
        port: String,
        /// The expected input format
        expected: &'static str,
    },

    /// A domain name resolved to no addresses, or the lookup itself failed.
    #[error("Unable to convert '{input}' to an endpoint: host '{host}' did not resolve to any address")]
    UnresolvedHost {
        /// The full input text
        input: String,
        /// The host name that was looked up
        host: String,
        /// The resolver failure, if the lookup errored rather than came back empty
        #[source]
        source: Option<std::io::Error>,
    },

    /// The text matches none of the duration grammars.
    #[error("Unable to convert '{input}' to a duration. Must be in format hh:mm:ss, \\d+(ms|s|m|h|d), or some variation")]
    InvalidDuration {
        /// The full input text
        input: String,
    },

    /// The text is not a usable filesystem path.
    #[error("Unable to convert '{input}' to a {target}: {reason}")]
    InvalidPath {
        /// The full input text
        input: String,
        /// The name of the path type that was being produced
        target: &'static str,
        /// Why the path was rejected
        reason: String,
    },

    /// The text is not a valid regular expression.
    #[cfg(feature = "regex")]
    #[error("Unable to convert '{input}' to a regex: {source}")]
    InvalidRegex {
        /// The full input text
        input: String,
        /// The underlying regex compilation error
        #[source]
        source: regex::Error,
    },

    /// A primitive `FromStr` conversion failed.
    #[error("Unable to convert '{input}' to type {target_type}: {source}")]
    InvalidValue {
        /// The full input text
        input: String,
        /// The target type name
        target_type: &'static str,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A slot override names a converter type that cannot be instantiated.
    #[error("Unknown converter type '{name}'")]
    UnknownConverterType {
        /// The converter type identifier from the slot override
        name: String,
    },

    /// No converter is registered for the slot's declared value type.
    #[error("No converter registered for type {value_type}")]
    NoConverter {
        /// The declared value type name
        value_type: &'static str,
    },

    /// `convert_to_string` was handed a value the converter does not produce.
    #[error("Unable to use {converter} to convert any type other than {expected}")]
    UnsupportedValue {
        /// The converter's name
        converter: &'static str,
        /// The converter's declared target type
        expected: &'static str,
    },

    /// A converted value was downcast to the wrong type.
    #[error("Converted value has type {actual}, not {expected}")]
    ValueTypeMismatch {
        /// The type that was requested
        expected: &'static str,
        /// The type the value actually holds
        actual: &'static str,
    },
}

/// Fieldless classification of a [`ConvertError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`ConvertError::Empty`]
    Empty,
    /// See [`ConvertError::UnterminatedBracket`]
    UnterminatedBracket,
    /// See [`ConvertError::MissingPort`]
    MissingPort,
    /// See [`ConvertError::InvalidAddress`]
    InvalidAddress,
    /// See [`ConvertError::InvalidPort`]
    InvalidPort,
    /// See [`ConvertError::UnresolvedHost`]
    UnresolvedHost,
    /// See [`ConvertError::InvalidDuration`]
    InvalidDuration,
    /// See [`ConvertError::InvalidPath`]
    InvalidPath,
    /// Regex compilation failed
    InvalidRegex,
    /// See [`ConvertError::InvalidValue`]
    InvalidValue,
    /// See [`ConvertError::UnknownConverterType`]
    UnknownConverterType,
    /// See [`ConvertError::NoConverter`]
    NoConverter,
    /// See [`ConvertError::UnsupportedValue`]
    UnsupportedValue,
    /// See [`ConvertError::ValueTypeMismatch`]
    ValueTypeMismatch,
}

impl ConvertError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::Empty { .. } => ErrorKind::Empty,
            ConvertError::UnterminatedBracket { .. } => ErrorKind::UnterminatedBracket,
            ConvertError::MissingPort { .. } => ErrorKind::MissingPort,
            ConvertError::InvalidAddress { .. } => ErrorKind::InvalidAddress,
            ConvertError::InvalidPort { .. } => ErrorKind::InvalidPort,
            ConvertError::UnresolvedHost { .. } => ErrorKind::UnresolvedHost,
            ConvertError::InvalidDuration { .. } => ErrorKind::InvalidDuration,
            ConvertError::InvalidPath { .. } => ErrorKind::InvalidPath,
            #[cfg(feature = "regex")]
            ConvertError::InvalidRegex { .. } => ErrorKind::InvalidRegex,
            ConvertError::InvalidValue { .. } => ErrorKind::InvalidValue,
            ConvertError::UnknownConverterType { .. } => ErrorKind::UnknownConverterType,
            ConvertError::NoConverter { .. } => ErrorKind::NoConverter,
            ConvertError::UnsupportedValue { .. } => ErrorKind::UnsupportedValue,
            ConvertError::ValueTypeMismatch { .. } => ErrorKind::ValueTypeMismatch,
        }
    }

    /// Creates an `InvalidValue` error from any `FromStr` failure.
    pub fn invalid_value<E>(input: &str, target_type: &'static str, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConvertError::InvalidValue {
            input: input.to_string(),
            target_type,
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_error() {
        let error = ConvertError::Empty {
            input: "  ".to_string(),
            target: "an endpoint",
            expected: "ipaddr:port",
        };
        assert_eq!(
            error.to_string(),
            "Unable to convert '  ' to an endpoint: value is empty. Must be in format 'ipaddr:port'"
        );
        assert_eq!(error.kind(), ErrorKind::Empty);
    }

    #[test]
    fn test_missing_port_names_input_and_format() {
        let error = ConvertError::MissingPort {
            input: "[::1]".to_string(),
            expected: "ipaddr:port",
        };
        assert_eq!(
            error.to_string(),
            "Unable to convert '[::1]' to an endpoint: missing port. Must be in format 'ipaddr:port'"
        );
    }

    #[test]
    fn test_invalid_port_error() {
        let error = ConvertError::InvalidPort {
            input: "10.0.0.1:http".to_string(),
            port: "http".to_string(),
            expected: "ipaddr:port",
        };
        assert!(error.to_string().contains("'http'"));
        assert_eq!(error.kind(), ErrorKind::InvalidPort);
    }

    #[test]
    fn test_unresolved_host_keeps_source() {
        use std::error::Error as _;

        let io_error = std::io::Error::new(std::io::ErrorKind::TimedOut, "lookup timed out");
        let error = ConvertError::UnresolvedHost {
            input: "example.invalid:80".to_string(),
            host: "example.invalid".to_string(),
            source: Some(io_error),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("example.invalid"));
    }

    #[test]
    fn test_invalid_duration_error() {
        let error = ConvertError::InvalidDuration {
            input: "12xyz".to_string(),
        };
        assert!(error.to_string().starts_with("Unable to convert '12xyz' to a duration"));
        assert_eq!(error.kind(), ErrorKind::InvalidDuration);
    }

    #[test]
    fn test_invalid_value_from_parse_int_error() {
        let parse_err = "not_a_number".parse::<i32>().unwrap_err();
        let error = ConvertError::invalid_value("not_a_number", "i32", parse_err);
        assert!(matches!(error, ConvertError::InvalidValue { .. }));
        assert!(error.to_string().contains("i32"));
    }

    #[test]
    fn test_unknown_converter_type_error() {
        let error = ConvertError::UnknownConverterType {
            name: "NoSuchConverter".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown converter type 'NoSuchConverter'");
        assert_eq!(error.kind(), ErrorKind::UnknownConverterType);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConvertError>();
    }
}
