// SPDX-License-Identifier: MIT OR Apache-2.0

//! Endpoint converter.
//!
//! Wraps an [`EndpointParser`] so literal `ipaddr:port` text can be converted
//! through the [`Converter`] port. IPv6 addresses must be enclosed in brackets
//! when followed by a port.

use crate::adapters::format_as;
use crate::domain::{ConvertedValue, Endpoint, Result, ValueType};
use crate::ports::Converter;
use crate::service::EndpointParser;
use std::any::Any;

/// Converts `ipaddr:port` text into an [`Endpoint`].
///
/// # Examples
///
/// ```
/// use hexconv::adapters::EndpointConverter;
/// use hexconv::domain::Endpoint;
/// use hexconv::ports::Converter;
///
/// let converter = EndpointConverter::with_default_port(80);
/// let endpoint = converter.convert_from_str("192.168.1.1").unwrap();
/// assert_eq!(endpoint.downcast::<Endpoint>().unwrap().port(), 80);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EndpointConverter {
    parser: EndpointParser,
}

impl EndpointConverter {
    /// Creates a converter that requires an explicit port.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter that falls back to `port` when the input has none.
    pub fn with_default_port(port: u16) -> Self {
        Self::from_parser(EndpointParser::with_default_port(port))
    }

    /// Creates a converter around an existing parser.
    pub fn from_parser(parser: EndpointParser) -> Self {
        EndpointConverter { parser }
    }

    /// Returns the underlying parser.
    pub fn parser(&self) -> &EndpointParser {
        &self.parser
    }
}

impl Converter for EndpointConverter {
    fn name(&self) -> &'static str {
        "EndpointConverter"
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
