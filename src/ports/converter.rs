// SPDX-License-Identifier: MIT OR Apache-2.0

//! Converter trait definitions.
//!
//! This module defines the `Converter` trait, the primary port for turning text
//! into typed values, and the `SelfDescribing` capability a value type can
//! implement to report which converter governs it.

use crate::domain::{ConvertedValue, Result, ValueType};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A bidirectional text to value conversion strategy bound to one target type.
///
/// Converters are immutable after construction, so a single instance can be
/// shared across threads and reused for any number of conversions.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the registry hands them out as
/// `Arc<dyn Converter>`.
///
/// # Examples
///
/// ```rust
/// use hexconv::domain::{ConvertError, ConvertedValue, Result, ValueType};
/// use hexconv::ports::Converter;
/// use std::any::Any;
///
/// struct PlusTen;
///
/// impl Converter for PlusTen {
///     fn name(&self) -> &'static str {
///         "PlusTen"
///     }
///
///     fn target_type(&self) -> ValueType {
///         ValueType::of::<i32>()
///     }
///
///     fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
///         let n: i32 = text
///             .parse()
///             .map_err(|e| ConvertError::invalid_value(text, "i32", e))?;
///         Ok(ConvertedValue::new(n + 10))
///     }
///
///     fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
///         value
///             .downcast_ref::<i32>()
///             .map(|n| (n - 10).to_string())
///             .ok_or(ConvertError::UnsupportedValue {
///                 converter: "PlusTen",
///                 expected: "i32",
///             })
///     }
/// }
///
/// let converter = PlusTen;
/// assert!(converter.is_valid("5"));
/// assert_eq!(converter.convert_from_str("5").unwrap().downcast::<i32>().unwrap(), 15);
/// ```
pub trait Converter: Send + Sync {
    /// Returns the name of this converter.
    ///
    /// Converters registered as named factories report the factory name, so
    /// the name can be used as a slot override identifier. Generic converters
    /// such as `FromStrConverter<T>` have no factory and report their type name.
    fn name(&self) -> &'static str;

    /// Returns the type this converter produces.
    fn target_type(&self) -> ValueType;

    /// Returns true if this converter accepts input of the `source` type.
    ///
    /// Converters read text, so by default only `String` and `&str` qualify.
    fn can_convert_from(&self, source: ValueType) -> bool {
        source.is::<String>() || source.is::<&'static str>()
    }

    /// Returns true if this converter produces values of the `destination` type.
    fn can_convert_to(&self, destination: ValueType) -> bool {
        destination == self.target_type()
    }

    /// Converts text into a value of the target type.
    ///
    /// # Errors
    ///
    /// Returns the converter-specific `ConvertError` describing why the text
    /// was rejected. No partial value is ever returned.
    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue>;

    /// Converts a value of the target type back into text.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedValue` if `value` is not of the target type.
    fn convert_to_string(&self, value: &dyn Any) -> Result<String>;

    /// Returns true if `text` would convert successfully.
    ///
    /// This never fails; any conversion error is reported as `false`.
    fn is_valid(&self, text: &str) -> bool {
        self.convert_from_str(text).is_ok()
    }
}

impl dyn Converter + '_ {
    /// Converts text and downcasts the result to `T` in one step.
    ///
    /// # Errors
    ///
    /// Returns the conversion error, or `ValueTypeMismatch` if the converter
    /// does not produce a `T`.
    pub fn convert<T: Any>(&self, text: &str) -> Result<T> {
        self.convert_from_str(text)?.downcast::<T>()
    }
}

impl fmt::Debug for dyn Converter + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("name", &self.name())
            .field("target", &self.target_type())
            .finish()
    }
}

/// A value that can report which converter governs it.
///
/// This is the optional capability checked in the second step of converter
/// resolution: when a slot is occupied by a live value that implements this
/// trait, the converter it reports wins over the declared type's default.
pub trait SelfDescribing {
    /// Returns the converter responsible for values like this one.
    fn converter(&self) -> Arc<dyn Converter>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConvertError;

    struct UpperConverter;

    impl Converter for UpperConverter {
        fn name(&self) -> &'static str {
            "UpperConverter"
        }

        fn target_type(&self) -> ValueType {
            ValueType::of::<String>()
        }

        fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
            if text.is_empty() {
                return Err(ConvertError::Empty {
                    input: text.to_string(),
                    target: "a string",
                    expected: "any text",
                });
            }
            Ok(ConvertedValue::new(text.to_uppercase()))
        }

        fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
            value
                .downcast_ref::<String>()
                .cloned()
                .ok_or(ConvertError::UnsupportedValue {
                    converter: "UpperConverter",
                    expected: "String",
                })
        }
    }

    #[test]
    fn test_default_can_convert_from_text() {
        let converter = UpperConverter;
        assert!(converter.can_convert_from(ValueType::of::<String>()));
        assert!(converter.can_convert_from(ValueType::of::<&'static str>()));
        assert!(!converter.can_convert_from(ValueType::of::<u32>()));
    }

    #[test]
    fn test_default_can_convert_to_target_only() {
        let converter = UpperConverter;
        assert!(converter.can_convert_to(ValueType::of::<String>()));
        assert!(!converter.can_convert_to(ValueType::of::<i32>()));
    }

    #[test]
    fn test_default_is_valid_follows_conversion() {
        let converter = UpperConverter;
        assert!(converter.is_valid("abc"));
        assert!(!converter.is_valid(""));
    }

    #[test]
    fn test_convert_on_trait_object() {
        let converter: Arc<dyn Converter> = Arc::new(UpperConverter);
        assert_eq!(converter.convert::<String>("abc").unwrap(), "ABC");
        assert!(converter.convert::<u8>("abc").is_err());
    }

    #[test]
    fn test_convert_to_string_rejects_other_types() {
        let converter = UpperConverter;
        assert_eq!(converter.convert_to_string(&"x".to_string()).unwrap(), "x");
        assert!(converter.convert_to_string(&5u8).is_err());
    }

    #[test]
    fn test_converter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn Converter>();
    }

    #[test]
    fn test_convert_through_borrowed_trait_object() {
        fn upper(converter: &dyn Converter, text: &str) -> Result<String> {
            converter.convert(text)
        }
        assert_eq!(upper(&UpperConverter, "abc").unwrap(), "ABC");
        assert!(upper(&UpperConverter, "").is_err());
    }

    #[test]
    fn test_trait_object_debug_shows_name() {
        let converter: Arc<dyn Converter> = Arc::new(UpperConverter);
        let debug = format!("{:?}", converter);
        assert!(debug.contains("UpperConverter"), "{}", debug);

        let result: Result<Arc<dyn Converter>> = Err(ConvertError::NoConverter {
            value_type: "String",
        });
        assert_eq!(result.unwrap_err().kind(), crate::domain::ErrorKind::NoConverter);
    }
}
