// SPDX-License-Identifier: MIT OR Apache-2.0

//! A hexagonal architecture text to value conversion crate.
//!
//! This crate turns configuration text into typed values: network endpoints,
//! resolved host names, signed durations, filesystem paths, regular
//! expressions and primitives. A registry picks the converter for each value
//! slot, honoring explicit overrides and self-describing values before falling
//! back to per-type defaults.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core value types and grammars (`Endpoint`, durations, paths, errors)
//! - **Ports**: Trait definitions that define interfaces (`Converter`, `HostResolver`)
//! - **Adapters**: Concrete converters and resolvers
//! - **Service**: The endpoint and host parsers and the converter registry
//!
//! # Features
//!
//! - **Endpoints**: `ipaddr:port` with bracketed IPv6 and optional default ports
//! - **Hosts**: `domain:port` resolved once, with IPv4 or IPv6 preference
//! - **Durations**: `12`, `12:15:10`, `1.02:00:00.5`, `250ms`, `-12s`
//! - **Registry**: Override > live value > type default resolution
//! - **Extensible**: Add converters by implementing the `Converter` trait
//!
//! # Feature Flags
//!
//! - `regex`: Enable the regular expression converter (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use hexconv::prelude::*;
//! use std::net::IpAddr;
//!
//! # fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//! let endpoint = EndpointParser::with_default_port(8080).parse("[::1]")?;
//! assert_eq!(endpoint.to_string(), "[::1]:8080");
//!
//! let converter = ConverterRegistry::global().converter_for::<IpAddr>()?;
//! let addr: IpAddr = converter.convert("10.0.0.1")?;
//! assert!(addr.is_ipv4());
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        AddressFamilyPreference, ConvertError, ConvertedValue, Endpoint, ErrorKind, ParserConfig,
        Result, SlotDescriptor, ValueType,
    };
    pub use crate::ports::{Converter, HostResolver, SelfDescribing};
    pub use crate::service::{ConverterRegistry, EndpointParser, HostParser, OverridePolicy};

    // Re-export adapters based on feature flags
    pub use crate::adapters::{DurationConverter, EndpointConverter, HostConverter};
    #[cfg(feature = "regex")]
    pub use crate::adapters::RegexConverter;
}
