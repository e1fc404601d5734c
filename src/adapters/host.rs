// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host converter.
//!
//! Accepts everything [`EndpointConverter`](crate::adapters::EndpointConverter)
//! accepts and, in addition, domain names that are resolved once at conversion
//! time.

use crate::adapters::format_as;
use crate::domain::{AddressFamilyPreference, ConvertedValue, Endpoint, Result, ValueType};
use crate::ports::{Converter, HostResolver};
use crate::service::HostParser;
use std::any::Any;
use std::sync::Arc;

/// Converts `ipaddr:port` or `domain:port` text into an [`Endpoint`].
///
/// The three presets differ only in how addresses from the resolver are
/// ordered before the first one is picked.
///
/// # Examples
///
/// ```
/// use hexconv::adapters::{HostConverter, StaticResolver};
/// use hexconv::domain::Endpoint;
/// use hexconv::ports::Converter;
/// use hexconv::service::HostParser;
/// use std::sync::Arc;
///
/// let resolver = StaticResolver::new().with_host("cache", vec!["10.1.2.3".parse().unwrap()]);
/// let converter = HostConverter::with_parser(HostParser::with_resolver(Arc::new(resolver)));
///
/// let endpoint: Endpoint = converter.convert_from_str("cache:6379").unwrap().downcast().unwrap();
/// assert_eq!(endpoint.to_string(), "10.1.2.3:6379");
/// ```
#[derive(Clone, Debug, Default)]
pub struct HostConverter {
    parser: HostParser,
}

impl HostConverter {
    /// Creates a converter using the system resolver in resolver order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter that picks an IPv4 address when one is available.
    pub fn prefer_ipv4() -> Self {
        Self::with_parser(HostParser::new().with_preference(AddressFamilyPreference::PreferIpv4))
    }

    /// Creates a converter that picks an IPv6 address when one is available.
    pub fn prefer_ipv6() -> Self {
        Self::with_parser(HostParser::new().with_preference(AddressFamilyPreference::PreferIpv6))
    }

    /// Creates a converter around an existing parser.
    pub fn with_parser(parser: HostParser) -> Self {
        HostConverter { parser }
    }

    /// Replaces the resolver, keeping the current parser configuration.
    pub fn with_resolver(self, resolver: Arc<dyn HostResolver>) -> Self {
        Self::with_parser(HostParser::from_config(self.parser.config(), resolver))
    }

    /// Returns the underlying parser.
    pub fn parser(&self) -> &HostParser {
        &self.parser
    }
}

impl Converter for HostConverter {
    fn name(&self) -> &'static str {
        match self.parser.config().preference {
            AddressFamilyPreference::None => "HostConverter",
            AddressFamilyPreference::PreferIpv4 => "HostConverterPreferIpv4",
            AddressFamilyPreference::PreferIpv6 => "HostConverterPreferIpv6",
        }
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<Endpoint>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        self.parser.parse(text).map(ConvertedValue::new)
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<Endpoint>(self.name(), value, Endpoint::to_string)
    }
}
