// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converters for primitive and standard library types.
//!
//! [`FromStrConverter`] covers any type with matching `FromStr` and `Display`
//! implementations. Booleans get their own converter because configuration
//! text commonly spells them as `yes`/`no` or `on`/`off`.

use crate::adapters::format_as;
use crate::domain::{ConvertError, ConvertedValue, Result, ValueType};
use crate::ports::Converter;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// Converts text with `T::from_str` and back with `T::to_string`.
///
/// # Examples
///
/// ```
/// use hexconv::adapters::FromStrConverter;
/// use hexconv::ports::Converter;
///
/// let converter = FromStrConverter::<u16>::new();
/// assert_eq!(converter.convert_from_str("8080").unwrap().downcast::<u16>().unwrap(), 8080);
/// assert!(!converter.is_valid("70000"));
/// ```
pub struct FromStrConverter<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> FromStrConverter<T> {
    /// Creates a converter for `T`.
    pub fn new() -> Self {
        FromStrConverter {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for FromStrConverter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for FromStrConverter<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FromStrConverter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromStrConverter")
            .field("target", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> Converter for FromStrConverter<T>
where
    T: FromStr + fmt::Display + Any + Send + Sync,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<T>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        text.parse::<T>()
            .map(ConvertedValue::new)
            .map_err(|e| ConvertError::invalid_value(text, std::any::type_name::<T>(), e))
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<T>(self.name(), value, |v| v.to_string())
    }
}

/// Converts `true`/`yes`/`1`/`on` and `false`/`no`/`0`/`off` into a `bool`.
///
/// Matching is case-insensitive. Output is always `true` or `false`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoolConverter;

impl BoolConverter {
    /// Parses boolean text.
    pub fn parse(&self, text: &str) -> Result<bool> {
        match text.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => text
                .parse::<bool>()
                .map_err(|e| ConvertError::invalid_value(text, "bool", e)),
        }
    }
}

impl Converter for BoolConverter {
    fn name(&self) -> &'static str {
        "BoolConverter"
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<bool>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        self.parse(text).map(ConvertedValue::new)
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<bool>(self.name(), value, bool::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use std::net::SocketAddr;

    #[test]
    fn test_bool_true_variants() {
        for text in ["true", "TRUE", "Yes", "1", "on", "ON"] {
            assert!(BoolConverter.parse(text).unwrap(), "text: {}", text);
        }
    }

    #[test]
    fn test_bool_false_variants() {
        for text in ["false", "False", "no", "0", "off", "OFF"] {
            assert!(!BoolConverter.parse(text).unwrap(), "text: {}", text);
        }
    }

    #[test]
    fn test_bool_invalid() {
        let err = BoolConverter.convert_from_str("maybe").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
        assert!(err.to_string().contains("'maybe'"));
    }

    #[test]
    fn test_bool_convert_to_string() {
        assert_eq!(BoolConverter.convert_to_string(&true).unwrap(), "true");
        assert!(BoolConverter.convert_to_string(&1u8).is_err());
    }

    #[test]
    fn test_from_str_integers() {
        let converter = FromStrConverter::<i64>::new();
        assert_eq!(
            converter.convert_from_str("-42").unwrap().downcast::<i64>().unwrap(),
            -42
        );
        assert_eq!(
            converter.convert_from_str("4.2").unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn test_from_str_target_type_and_name() {
        let converter = FromStrConverter::<SocketAddr>::new();
        assert!(converter.target_type().is::<SocketAddr>());
        assert!(converter.name().contains("FromStrConverter"));
        assert!(converter.name().contains("SocketAddr"));
    }

    #[test]
    fn test_from_str_string_round_trip() {
        let converter = FromStrConverter::<f64>::new();
        let value = converter.convert_from_str("2.5").unwrap();
        assert_eq!(converter.convert_to_string(value.as_any()).unwrap(), "2.5");
        assert_eq!(
            converter.convert_to_string(&2.5f32).unwrap_err().kind(),
            ErrorKind::UnsupportedValue
        );
    }

    #[test]
    fn test_from_str_error_names_type() {
        let err = FromStrConverter::<u8>::new().convert_from_str("300").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Unable to convert '300' to type u8: number too large to fit in target type"
        );
    }
}
