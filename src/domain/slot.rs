// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slot descriptors.
//!
//! A slot is any named, typed place a converted value ends up in: a struct
//! field, a property, an option. Fields and properties are described the same
//! way, so the registry resolves both with a single algorithm.

use crate::domain::ValueType;
use crate::ports::SelfDescribing;
use std::any::Any;
use std::fmt;

/// A live value currently occupying a slot.
///
/// Only self-describing values influence converter resolution; a plain value
/// is carried for diagnostics and otherwise ignored.
#[derive(Clone, Copy)]
pub enum LiveValue<'a> {
    /// A value with no converter capability.
    Plain(&'a dyn Any),
    /// A value that reports its own converter.
    SelfDescribing(&'a dyn SelfDescribing),
}

impl<'a> LiveValue<'a> {
    /// Returns the self-describing capability, if the value has one.
    pub fn as_self_describing(&self) -> Option<&'a dyn SelfDescribing> {
        match self {
            LiveValue::Plain(_) => None,
            LiveValue::SelfDescribing(value) => Some(*value),
        }
    }
}

impl fmt::Debug for LiveValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiveValue::Plain(_) => f.write_str("Plain(..)"),
            LiveValue::SelfDescribing(_) => f.write_str("SelfDescribing(..)"),
        }
    }
}

/// Everything the registry needs to know about a slot.
///
/// # Examples
///
/// ```
/// use hexconv::domain::SlotDescriptor;
/// use std::net::IpAddr;
///
/// let slot = SlotDescriptor::new::<IpAddr>("destination")
///     .with_override("IpAddressConverter");
/// assert_eq!(slot.name(), "destination");
/// assert_eq!(slot.converter_override(), Some("IpAddressConverter"));
/// assert!(slot.live_value().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SlotDescriptor<'a> {
    name: String,
    value_type: ValueType,
    converter_override: Option<String>,
    live_value: Option<LiveValue<'a>>,
}

impl<'a> SlotDescriptor<'a> {
    /// Describes a slot named `name` declared as `T`.
    pub fn new<T: Any>(name: impl Into<String>) -> Self {
        Self::with_type(name, ValueType::of::<T>())
    }

    /// Describes a slot from an already-known value type.
    pub fn with_type(name: impl Into<String>, value_type: ValueType) -> Self {
        SlotDescriptor {
            name: name.into(),
            value_type,
            converter_override: None,
            live_value: None,
        }
    }

    /// Attaches an explicit converter type identifier to the slot.
    pub fn with_override(mut self, converter: impl Into<String>) -> Self {
        self.converter_override = Some(converter.into());
        self
    }

    /// Attaches the live value currently in the slot.
    pub fn with_live_value(mut self, value: LiveValue<'a>) -> Self {
        self.live_value = Some(value);
        self
    }

    /// Attaches a self-describing live value.
    pub fn with_self_describing(self, value: &'a dyn SelfDescribing) -> Self {
        self.with_live_value(LiveValue::SelfDescribing(value))
    }

    /// Returns the slot name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the slot's declared value type.
    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Returns the explicit converter override, if any.
    pub fn converter_override(&self) -> Option<&str> {
        self.converter_override.as_deref()
    }

    /// Returns the live value, if any.
    pub fn live_value(&self) -> Option<LiveValue<'a>> {
        self.live_value
    }
}
