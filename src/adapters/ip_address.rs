// SPDX-License-Identifier: MIT OR Apache-2.0

//! IP address converter.

use crate::adapters::format_as;
use crate::domain::endpoint::strip_brackets;
use crate::domain::{ConvertError, ConvertedValue, Result, ValueType};
use crate::ports::Converter;
use std::any::Any;
use std::net::IpAddr;

const IP_ADDRESS_FORMAT: &str = "ipaddr";

/// Converts an IPv4 or IPv6 literal into an `IpAddr`.
///
/// A bracketed IPv6 literal such as `[::1]` is accepted too. Host names are
/// not resolved; use [`HostConverter`](crate::adapters::HostConverter) for
/// that.
///
/// # Examples
///
/// ```
/// use hexconv::adapters::IpAddressConverter;
///
/// let addr = IpAddressConverter.parse("[1fbf:0:a88:85a3::ac1f]").unwrap();
/// assert!(addr.is_ipv6());
/// assert!(IpAddressConverter.parse("localhost").is_err());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct IpAddressConverter;

impl IpAddressConverter {
    /// Parses an address literal.
    pub fn parse(&self, text: &str) -> Result<IpAddr> {
        if text.trim().is_empty() {
            return Err(ConvertError::Empty {
                input: text.to_string(),
                target: "an IP address",
                expected: IP_ADDRESS_FORMAT,
            });
        }

        strip_brackets(text).parse().map_err(|_| ConvertError::InvalidAddress {
            input: text.to_string(),
            address: text.to_string(),
            target: "an IP address",
            expected: IP_ADDRESS_FORMAT,
        })
    }
}

impl Converter for IpAddressConverter {
    fn name(&self) -> &'static str {
        "IpAddressConverter"
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<IpAddr>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        self.parse(text).map(ConvertedValue::new)
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<IpAddr>(self.name(), value, |addr| addr.to_string())
    }
}
