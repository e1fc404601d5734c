// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value type identity for converter lookup.
//!
//! This module provides the `ValueType` type, a `TypeId` paired with a readable
//! type name, used as the key of the registry's default converter table.

use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// The declared type of a slot or the target type of a converter.
///
/// Two `ValueType`s are equal when they describe the same Rust type; the name
/// is only carried for logging and error messages.
///
/// # Examples
///
/// ```
/// use hexconv::domain::ValueType;
/// use std::net::IpAddr;
///
/// let ty = ValueType::of::<IpAddr>();
/// assert!(ty.is::<IpAddr>());
/// assert!(ty.name().ends_with("IpAddr"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ValueType {
    id: TypeId,
    name: &'static str,
}

impl ValueType {
    /// Returns the `ValueType` describing `T`.
    pub fn of<T: Any>() -> Self {
        ValueType {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Returns the underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the full type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this describes `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValueType {}

impl Hash for ValueType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
