// SPDX-License-Identifier: MIT OR Apache-2.0

//! Type-erased converter output.
//!
//! Converters chosen at runtime by the registry cannot name their output type
//! statically, so they hand back a `ConvertedValue`. Callers that know the slot's
//! declared type recover the typed value with [`ConvertedValue::downcast`].

use crate::domain::errors::{ConvertError, Result};
use std::any::Any;
use std::fmt;

/// A value produced by a converter, with its concrete type erased.
///
/// # Examples
///
/// ```
/// use hexconv::domain::ConvertedValue;
///
/// let value = ConvertedValue::new(42u16);
/// assert!(value.is::<u16>());
/// assert_eq!(value.downcast_ref::<u16>(), Some(&42));
/// assert_eq!(value.downcast::<u16>().unwrap(), 42);
/// ```
pub struct ConvertedValue {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ConvertedValue {
    /// Wraps a typed value.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        ConvertedValue {
            value: Box::new(value),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Returns the name of the wrapped value's type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns true if the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns a reference to the wrapped value if it is a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns the wrapped value as `&dyn Any`.
    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }

    /// Unwraps the value as a `T`.
    ///
    /// # Errors
    ///
    /// Returns `ValueTypeMismatch` if the wrapped value is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T> {
        let actual = self.type_name;
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|_| ConvertError::ValueTypeMismatch {
                expected: std::any::type_name::<T>(),
                actual,
            })
    }
}

impl fmt::Debug for ConvertedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertedValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
