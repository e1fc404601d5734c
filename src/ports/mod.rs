// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the conversion core and its collaborators. Converters and resolvers
//! are implemented by adapters in the adapters layer.

pub mod converter;
pub mod resolver;

// Re-export commonly used types
pub use converter::{Converter, SelfDescribing};
pub use resolver::HostResolver;
