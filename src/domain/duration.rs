// SPDX-License-Identifier: MIT OR Apache-2.0

//! Duration grammar.
//!
//! Durations are signed, so they are represented with [`chrono::TimeDelta`]
//! rather than `std::time::Duration`. Parsing tries three grammars in order
//! and the first one that accepts the text wins:
//!
//! 1. a bare integer, read as whole seconds (`"12"`, `"-5"`)
//! 2. the clock form `[-][d.]hh:mm[:ss[.fffffff]]` or `[-]d:hh:mm:ss[.fffffff]`
//!    (`"12:15:10"`, `"1.02:00:00"`, `"1:02:00:00"`)
//! 3. an integer with a unit suffix: `ms`, `s`, `m`, `h` or `d` (`"250ms"`, `"-12s"`)

use crate::domain::errors::{ConvertError, Result};
use chrono::TimeDelta;

/// The accepted duration formats, as shown in error messages.
pub const DURATION_FORMAT: &str = "[d.]hh:mm[:ss]' or 'N(ms|s|m|h|d)";

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Unit suffixes, longest first so `ms` is never read as `m` + garbage.
const SUFFIXES: [(&str, fn(i64) -> Option<TimeDelta>); 5] = [
    ("ms", TimeDelta::try_milliseconds),
    ("s", TimeDelta::try_seconds),
    ("m", TimeDelta::try_minutes),
    ("h", TimeDelta::try_hours),
    ("d", TimeDelta::try_days),
];

/// Parses a duration from text.
///
/// # Errors
///
/// Returns `Empty` for blank input and `InvalidDuration` when none of the
/// grammars accept the text (including values that overflow).
///
/// # Examples
///
/// ```
/// use hexconv::domain::duration::parse_duration;
/// use chrono::TimeDelta;
///
/// assert_eq!(parse_duration("12").unwrap(), TimeDelta::seconds(12));
/// assert_eq!(parse_duration("12ms").unwrap(), TimeDelta::milliseconds(12));
/// assert_eq!(parse_duration("-12s").unwrap(), TimeDelta::seconds(-12));
/// assert!(parse_duration("12xyz").is_err());
/// ```
pub fn parse_duration(text: &str) -> Result<TimeDelta> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ConvertError::Empty {
            input: text.to_string(),
            target: "a duration",
            expected: DURATION_FORMAT,
        });
    }

    parse_seconds(trimmed)
        .or_else(|| parse_clock(trimmed))
        .or_else(|| parse_suffixed(trimmed))
        .ok_or_else(|| ConvertError::InvalidDuration {
            input: text.to_string(),
        })
}

/// Formats a duration in the clock form accepted by [`parse_duration`].
///
/// The day component is only printed when non-zero and the fraction is only
/// printed when there are sub-second nanoseconds.
///
/// # Examples
///
/// ```
/// use hexconv::domain::duration::format_duration;
/// use chrono::TimeDelta;
///
/// assert_eq!(format_duration(TimeDelta::seconds(44_110)), "12:15:10");
/// assert_eq!(format_duration(TimeDelta::seconds(-90_061)), "-1.01:01:01");
/// assert_eq!(format_duration(TimeDelta::milliseconds(1_500)), "00:00:01.5");
/// ```
pub fn format_duration(duration: TimeDelta) -> String {
    let negative = duration < TimeDelta::zero();
    let magnitude = if negative { -duration } else { duration };

    let total = magnitude.num_seconds();
    let days = total / SECONDS_PER_DAY;
    let hours = (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total % SECONDS_PER_MINUTE;
    let nanos = magnitude.subsec_nanos();

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    if days > 0 {
        out.push_str(&format!("{}.", days));
    }
    out.push_str(&format!("{:02}:{:02}:{:02}", hours, minutes, seconds));
    if nanos > 0 {
        let fraction = format!("{:09}", nanos);
        out.push('.');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

fn parse_seconds(text: &str) -> Option<TimeDelta> {
    text.parse::<i64>().ok().and_then(TimeDelta::try_seconds)
}

fn parse_suffixed(text: &str) -> Option<TimeDelta> {
    let (suffix, unit) = SUFFIXES
        .iter()
        .find(|(suffix, _)| text.ends_with(suffix))?;
    let count = text[..text.len() - suffix.len()].parse::<i64>().ok()?;
    unit(count)
}

fn parse_clock(text: &str) -> Option<TimeDelta> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let parts: Vec<&str> = body.split(':').collect();
    let (days, hours, clock) = match parts.as_slice() {
        // d:hh:mm:ss, where the day count has its own field
        [days, hours, clock @ ..] if parts.len() == 4 => (digits(days)?, digits(hours)?, clock),
        [head, clock @ ..] if matches!(parts.len(), 2 | 3) => match head.split_once('.') {
            Some((days, hours)) => (digits(days)?, digits(hours)?, clock),
            None => (0, digits(head)?, clock),
        },
        _ => return None,
    };

    let (minutes, seconds, nanos) = match clock {
        [minutes] => (digits(minutes)?, 0, 0),
        [minutes, secs] => match secs.split_once('.') {
            Some((secs, fraction)) => (digits(minutes)?, digits(secs)?, fraction_nanos(fraction)?),
            None => (digits(minutes)?, digits(secs)?, 0),
        },
        _ => return None,
    };

    if hours > 23 || minutes > 59 || seconds > 59 {
        return None;
    }

    let total = days
        .checked_mul(SECONDS_PER_DAY)?
        .checked_add(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds)?;
    let delta = TimeDelta::new(total, nanos)?;
    Some(if negative { -delta } else { delta })
}

/// Parses an unsigned run of ASCII digits.
fn digits(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Reads up to nine fractional digits as nanoseconds.
fn fraction_nanos(text: &str) -> Option<u32> {
    if text.is_empty() || text.len() > 9 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let padded = format!("{:0<9}", text);
    padded.parse().ok()
}
