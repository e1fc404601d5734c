// SPDX-License-Identifier: MIT OR Apache-2.0

//! Duration converter.

use crate::adapters::format_as;
use crate::domain::duration::{format_duration, parse_duration};
use crate::domain::{ConvertedValue, Result, ValueType};
use crate::ports::Converter;
use chrono::TimeDelta;
use std::any::Any;

/// Converts duration text into a signed [`TimeDelta`].
///
/// Output text always uses the clock form, so `"90s"` converts back as
/// `"00:01:30"`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use hexconv::adapters::DurationConverter;
/// use hexconv::ports::Converter;
///
/// let converter: &dyn Converter = &DurationConverter;
/// let delta: TimeDelta = converter.convert("250ms").unwrap();
/// assert_eq!(delta, TimeDelta::milliseconds(250));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationConverter;

impl Converter for DurationConverter {
    fn name(&self) -> &'static str {
        "DurationConverter"
    }

    fn target_type(&self) -> ValueType {
        ValueType::of::<TimeDelta>()
    }

    fn convert_from_str(&self, text: &str) -> Result<ConvertedValue> {
        parse_duration(text).map(ConvertedValue::new)
    }

    fn convert_to_string(&self, value: &dyn Any) -> Result<String> {
        format_as::<TimeDelta>(self.name(), value, |delta| format_duration(*delta))
    }
}
