//! Day/night resolution for [`ThemeMode::Auto`](crate::model::ThemeMode::Auto).

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// A wall-clock time of day with minute precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeEndpoint {
    pub hour: u32,
    pub minute: u32,
}

impl TimeEndpoint {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 || minute > 59 {
            return Err(TimeError::OutOfRange(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub fn as_time(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}

impl fmt::Display for TimeEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeEndpoint {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour, minute) = trimmed
            .split_once(':')
            .ok_or_else(|| TimeError::Malformed(trimmed.to_string()))?;
        let hour: u32 = hour
            .parse()
            .map_err(|_| TimeError::Malformed(trimmed.to_string()))?;
        let minute: u32 = minute
            .parse()
            .map_err(|_| TimeError::Malformed(trimmed.to_string()))?;
        if hour > 23 || minute > 59 {
            return Err(TimeError::OutOfRange(trimmed.to_string()));
        }
        Ok(Self { hour, minute })
    }
}

/// Daytime window. Light templates apply inside it, dark ones outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayInterval {
    pub start: TimeEndpoint,
    pub end: TimeEndpoint,
}

impl Default for DayInterval {
    fn default() -> Self {
        Self {
            start: TimeEndpoint { hour: 10, minute: 0 },
            end: TimeEndpoint { hour: 19, minute: 0 },
        }
    }
}

impl DayInterval {
    pub fn new(start: TimeEndpoint, end: TimeEndpoint) -> Self {
        Self { start, end }
    }

    /// `start <= now < end`. A window whose start is later than its end wraps
    /// past midnight; equal endpoints never count as day.
    pub fn is_day(&self, now: NaiveTime) -> bool {
        let now = NaiveTime::from_hms_opt(now.hour(), now.minute(), now.second())
            .unwrap_or(now);
        let start = self.start.as_time();
        let end = self.end.as_time();
        if start <= end {
            now >= start && now < end
        } else {
            now >= start || now < end
        }
    }

    /// The next instant after `now` at which [`DayInterval::is_day`] flips.
    pub fn next_transition(&self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        if self.start == self.end {
            return None;
        }
        let boundary = if self.is_day(now.time()) {
            self.end
        } else {
            self.start
        };
        let today = now.date().and_time(boundary.as_time());
        if today > now {
            Some(today)
        } else {
            Some(today + Duration::days(1))
        }
    }
}

/// Free-standing form of [`DayInterval::is_day`].
pub fn is_day_time(now: NaiveTime, start: TimeEndpoint, end: TimeEndpoint) -> bool {
    DayInterval::new(start, end).is_day(now)
}

/// Free-standing form of [`DayInterval::next_transition`].
pub fn next_transition(
    now: NaiveDateTime,
    start: TimeEndpoint,
    end: TimeEndpoint,
) -> Option<NaiveDateTime> {
    DayInterval::new(start, end).next_transition(now)
}
