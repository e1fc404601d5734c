// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and grammars.
//!
//! This module contains the value types produced by converters, the endpoint
//! and duration grammars, slot descriptors and the error type. It has no
//! knowledge of DNS or of how converters are chosen.

pub mod converted_value;
pub mod duration;
pub mod endpoint;
pub mod errors;
pub mod path;
pub mod slot;
pub mod value_type;

// Re-export commonly used types
pub use converted_value::ConvertedValue;
pub use endpoint::{AddressFamilyPreference, Endpoint, ParserConfig};
pub use errors::{ConvertError, ErrorKind, Result};
pub use path::{DirectoryPath, FilePath};
pub use slot::{LiveValue, SlotDescriptor};
pub use value_type::ValueType;
