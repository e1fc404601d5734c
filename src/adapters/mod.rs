// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing converter and resolver implementations.
//!
//! This module contains the concrete implementations of the port traits:
//!
//! - Converters for IP addresses, endpoints, hosts, durations, paths, regular
//!   expressions and `FromStr` primitives
//! - Host resolvers backed by the operating system or by a fixed table

pub mod duration;
pub mod endpoint;
pub mod host;
pub mod ip_address;
pub mod path;
pub mod primitive;
#[cfg(feature = "regex")]
pub mod regex;
pub mod resolver;

// Re-export adapters
pub use duration::DurationConverter;
pub use endpoint::EndpointConverter;
pub use host::HostConverter;
pub use ip_address::IpAddressConverter;
pub use path::{DirectoryPathConverter, FilePathConverter};
pub use primitive::{BoolConverter, FromStrConverter};
#[cfg(feature = "regex")]
pub use self::regex::{RegexConverter, RegexOptions};
pub use resolver::{StaticResolver, SystemResolver};

use crate::domain::{ConvertError, Result};
use std::any::Any;

/// Formats `value` with `format` if it is a `T`, for `convert_to_string`.
pub(crate) fn format_as<T: Any>(
    converter: &'static str,
    value: &dyn Any,
    format: impl FnOnce(&T) -> String,
) -> Result<String> {
    value
        .downcast_ref::<T>()
        .map(format)
        .ok_or(ConvertError::UnsupportedValue {
            converter,
            expected: std::any::type_name::<T>(),
        })
}
