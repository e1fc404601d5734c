// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the parsers and the converter registry.
//!
//! The parsers turn endpoint text into [`Endpoint`](crate::domain::Endpoint)
//! values. The registry decides which converter applies to a given slot.

pub mod parser;
pub mod registry;

// Re-export commonly used types
pub use parser::{EndpointParser, HostParser};
pub use registry::{ConverterFactory, ConverterRegistry, ConverterRegistryBuilder, OverridePolicy};
