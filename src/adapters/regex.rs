// SPDX-License-Identifier: MIT OR Apache-2.0

//! Regular expression converter.
//!
//! This module is only available with the `regex` feature enabled.

use crate::adapters::format_as;
use crate::domain::{ConvertError, ConvertedValue, Result, ValueType};
use crate::ports::Converter;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Flags applied when compiling a pattern.
///
/// All flags default to off, which matches `Regex::new`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegexOptions {
    /// Match letters regardless of case.
    pub case_insensitive: bool,
    /// `^` and `$` match at line boundaries.
    pub multi_line: bool,
    /// `.` also matches `\n`.
    pub dot_matches_new_line: bool,
    /// Ignore whitespace and allow `#` comments in the pattern.
    pub ignore_whitespace: bool,
}

/// Compiles text into a [`Regex`].
///
/// # Examples
///
/// ```
/// use hexconv::adapters::{RegexConverter, RegexOptions};
/// use hexconv::ports::Converter;
/// use regex::Regex;
///
/// let converter = RegexConverter::with_options(RegexOptions {
///     case_insensitive: true,
///     ..RegexOptions::default()
/// });
/// let re: Regex = converter.convert_from_str("^abc$").unwrap().downcast().unwrap();
/// assert!(re.is_match("ABC"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct RegexConverter {
    options: Option<RegexOptions>,
}

impl RegexConverter {
    /// Creates a converter that compiles patterns with default flags.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a converter that compiles patterns with `options`.
    pub fn with_options(options: RegexOptions) -> Self {
        RegexConverter {
            options: Some(options),
        }
    }

    /// Returns the compile options, if any were set.
    pub fn options(&self) -> Option<RegexOptions> {
        self.options
    }

    fn compile(&self, text: &str) -> std::result::Result<Regex, regex::Error> {
        match self.options {
            None => Regex::new(text),
            Some(options) => RegexBuilder::new(text)
                .case_insensitive(options.case_insensitive)
                .multi_line(options.multi_line)
                .dot_matches_new_line(options.dot_matches_new_line)
                .ignore_whitespace(options.ignore_whitespace)
                .build(),
        }
    }
}

impl Converter for RegexConverter {
    fn name(&self) -> &'static str {
        "RegexConverter"
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<Regex>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        self.compile(text)
            .map(ConvertedValue::new)
            .map_err(|source| ConvertError::InvalidRegex {
                input: text.to_string(),
                source,
            })
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<Regex>(self.name(), value, |re| re.as_str().to_string())
    }
}
