// SPDX-License-Identifier: MIT OR Apache-2.0

//! File and directory path converters.
//!
//! Both converters only check that the text is a usable path; whether anything
//! exists there is left to the caller.

use crate::adapters::format_as;
use crate::domain::{ConvertedValue, DirectoryPath, FilePath, Result, ValueType};
use crate::ports::Converter;
use std::any::Any;

/// Converts text into a [`FilePath`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FilePathConverter;

impl Converter for FilePathConverter {
    fn name(&self) -> &'static str {
        "FilePathConverter"
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<FilePath>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        FilePath::parse(text).map(ConvertedValue::new)
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<FilePath>(self.name(), value, |path| path.to_string())
    }
}

/// Converts text into a [`DirectoryPath`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectoryPathConverter;

impl Converter for DirectoryPathConverter {
    fn name(&self) -> &'static str {
        "DirectoryPathConverter"
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<DirectoryPath>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        DirectoryPath::parse(text).map(ConvertedValue::new)
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<DirectoryPath>(self.name(), value, |path| path.to_string())
    }
}
