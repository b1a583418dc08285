// ABOUTME: Display timezone used when rendering activity start times
// ABOUTME: Parses IANA zone names such as Europe/Paris, UTC, and fixed offsets such as +02:00
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use chrono_tz::Tz;

use crate::constants::formats;
use crate::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zone {
    /// IANA zone, daylight saving time applies
    Named(Tz),
    /// Same offset all year round
    Fixed(FixedOffset),
}

/// Timezone that dates are shifted into before they are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTimezone {
    zone: Zone,
}

impl DisplayTimezone {
    /// Coordinated universal time
    #[must_use]
    pub fn utc() -> Self {
        Self::from_offset(Utc.fix())
    }

    /// Timezone with a fixed offset
    #[must_use]
    pub const fn from_offset(offset: FixedOffset) -> Self {
        Self {
            zone: Zone::Fixed(offset),
        }
    }

    /// Timezone following the rules of an IANA zone
    #[must_use]
    pub const fn from_tz(tz: Tz) -> Self {
        Self {
            zone: Zone::Named(tz),
        }
    }

    /// Parse an IANA zone name (`America/Toronto`), `UTC`, `GMT`, `Z`, or a
    /// signed offset (`+02:00`, `-0530`, `+01`) optionally prefixed by
    /// `UTC`/`GMT`
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not one of the accepted forms or the
    /// offset is out of range
    pub fn parse(name: &str) -> AppResult<Self> {
        let trimmed = name.trim();
        let upper = trimmed.to_ascii_uppercase();

        if matches!(upper.as_str(), "UTC" | "GMT" | "Z") {
            return Ok(Self::utc());
        }

        if let Ok(tz) = trimmed.parse::<Tz>() {
            return Ok(Self::from_tz(tz));
        }

        let offset_text = upper
            .strip_prefix("UTC")
            .or_else(|| upper.strip_prefix("GMT"))
            .unwrap_or(&upper);

        parse_offset_seconds(offset_text)
            .and_then(FixedOffset::east_opt)
            .map(Self::from_offset)
            .ok_or_else(|| AppError::unknown_timezone(trimmed))
    }

    /// Offset from UTC in effect at `instant`
    #[must_use]
    pub fn offset_at(&self, instant: &DateTime<Utc>) -> FixedOffset {
        match self.zone {
            Zone::Named(tz) => instant.with_timezone(&tz).offset().fix(),
            Zone::Fixed(offset) => offset,
        }
    }

    /// Shift `instant` into this timezone and render it with minute precision
    #[must_use]
    pub fn format_instant(&self, instant: &DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.offset_at(instant))
            .format(formats::DATE_FORMAT)
            .to_string()
    }
}

impl Default for DisplayTimezone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for DisplayTimezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.zone {
            Zone::Named(tz) => f.write_str(tz.name()),
            Zone::Fixed(offset) if offset.local_minus_utc() == 0 => f.write_str("UTC"),
            Zone::Fixed(offset) => write!(f, "{offset}"),
        }
    }
}

impl FromStr for DisplayTimezone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Seconds east of UTC for `+HH`, `+HHMM` or `+HH:MM`
fn parse_offset_seconds(text: &str) -> Option<i32> {
    let (sign, digits) = match text.as_bytes().first()? {
        b'+' => (1, &text[1..]),
        b'-' => (-1, &text[1..]),
        _ => return None,
    };

    let (hours, minutes) = match digits.split_once(':') {
        Some((hours, minutes)) => (hours, minutes),
        None if digits.len() == 4 && digits.is_ascii() => digits.split_at(2),
        None => (digits, "0"),
    };

    if hours.is_empty()
        || hours.len() > 2
        || minutes.len() > 2
        || !hours.bytes().chain(minutes.bytes()).all(|b| b.is_ascii_digit())
    {
        return None;
    }

    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    Some(sign * (hours * 3600 + minutes * 60))
}
