//! Time unit of measure for consent reminders

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const NANOS_PER_SECOND: i128 = 1_000_000_000;
const SECONDS_PER_DAY: i128 = 86_400;
/// Estimated length of a year: 365.2425 days
const SECONDS_PER_YEAR: i128 = 31_556_952;

/// Unit used to measure the reminder interval
///
/// Mirrors the calendar units of an ISO-8601 calendar system. Units larger
/// than a day are estimated durations (a month is one twelfth of a year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeUnit {
    Nanos,
    Micros,
    Millis,
    Seconds,
    Minutes,
    Hours,
    HalfDays,
    #[default]
    Days,
    Weeks,
    Months,
    Years,
    Decades,
    Centuries,
    Millennia,
    Eras,
    /// Unbounded; a reminder measured in this unit never comes due
    Forever,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 16] = [
        TimeUnit::Nanos,
        TimeUnit::Micros,
        TimeUnit::Millis,
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::HalfDays,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
        TimeUnit::Decades,
        TimeUnit::Centuries,
        TimeUnit::Millennia,
        TimeUnit::Eras,
        TimeUnit::Forever,
    ];

    /// Configuration name of the unit (e.g. `HALF_DAYS`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nanos => "NANOS",
            Self::Micros => "MICROS",
            Self::Millis => "MILLIS",
            Self::Seconds => "SECONDS",
            Self::Minutes => "MINUTES",
            Self::Hours => "HOURS",
            Self::HalfDays => "HALF_DAYS",
            Self::Days => "DAYS",
            Self::Weeks => "WEEKS",
            Self::Months => "MONTHS",
            Self::Years => "YEARS",
            Self::Decades => "DECADES",
            Self::Centuries => "CENTURIES",
            Self::Millennia => "MILLENNIA",
            Self::Eras => "ERAS",
            Self::Forever => "FOREVER",
        }
    }

    /// Length of one unit in nanoseconds, `None` for [`TimeUnit::Forever`]
    pub fn nanos(&self) -> Option<i128> {
        let nanos = match self {
            Self::Nanos => 1,
            Self::Micros => 1_000,
            Self::Millis => 1_000_000,
            Self::Seconds => NANOS_PER_SECOND,
            Self::Minutes => 60 * NANOS_PER_SECOND,
            Self::Hours => 3_600 * NANOS_PER_SECOND,
            Self::HalfDays => 43_200 * NANOS_PER_SECOND,
            Self::Days => SECONDS_PER_DAY * NANOS_PER_SECOND,
            Self::Weeks => 7 * SECONDS_PER_DAY * NANOS_PER_SECOND,
            Self::Months => SECONDS_PER_YEAR / 12 * NANOS_PER_SECOND,
            Self::Years => SECONDS_PER_YEAR * NANOS_PER_SECOND,
            Self::Decades => 10 * SECONDS_PER_YEAR * NANOS_PER_SECOND,
            Self::Centuries => 100 * SECONDS_PER_YEAR * NANOS_PER_SECOND,
            Self::Millennia => 1_000 * SECONDS_PER_YEAR * NANOS_PER_SECOND,
            Self::Eras => 1_000_000_000 * SECONDS_PER_YEAR * NANOS_PER_SECOND,
            Self::Forever => return None,
        };
        Some(nanos)
    }

    /// Duration of `amount` units
    ///
    /// Returns `None` when the unit is unbounded or the result does not fit
    /// into a [`chrono::Duration`].
    pub fn duration_of(&self, amount: i64) -> Option<chrono::Duration> {
        let total = self.nanos()?.checked_mul(i128::from(amount))?;
        let secs = i64::try_from(total / NANOS_PER_SECOND).ok()?;
        let nanos = i64::try_from(total % NANOS_PER_SECOND).ok()?;
        chrono::Duration::try_seconds(secs)?.checked_add(&chrono::Duration::nanoseconds(nanos))
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a time unit name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time unit '{0}'")]
pub struct UnknownTimeUnit(pub String);

impl FromStr for TimeUnit {
    type Err = UnknownTimeUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|unit| unit.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| UnknownTimeUnit(s.to_string()))
    }
}

impl Serialize for TimeUnit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TimeUnit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("days".parse::<TimeUnit>().unwrap(), TimeUnit::Days);
        assert_eq!("HALF_DAYS".parse::<TimeUnit>().unwrap(), TimeUnit::HalfDays);
        assert_eq!("half-days".parse::<TimeUnit>().unwrap(), TimeUnit::HalfDays);
        assert_eq!(" Forever ".parse::<TimeUnit>().unwrap(), TimeUnit::Forever);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "fortnights".parse::<TimeUnit>().unwrap_err();
        assert_eq!(err, UnknownTimeUnit("fortnights".to_string()));
    }

    #[test]
    fn test_display_matches_parse() {
        for unit in TimeUnit::ALL {
            assert_eq!(unit.to_string().parse::<TimeUnit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_duration_of_calendar_units() {
        assert_eq!(TimeUnit::Days.duration_of(30), Some(chrono::Duration::days(30)));
        assert_eq!(TimeUnit::HalfDays.duration_of(2), Some(chrono::Duration::days(1)));
        assert_eq!(TimeUnit::Weeks.duration_of(1), Some(chrono::Duration::days(7)));
        assert_eq!(
            TimeUnit::Months.duration_of(12),
            TimeUnit::Years.duration_of(1)
        );
        assert_eq!(
            TimeUnit::Millis.duration_of(1500),
            Some(chrono::Duration::milliseconds(1500))
        );
    }

    #[test]
    fn test_duration_of_unbounded_or_overflowing() {
        assert_eq!(TimeUnit::Forever.duration_of(1), None);
        assert_eq!(TimeUnit::Eras.duration_of(1), None);
        assert_eq!(TimeUnit::Days.duration_of(i64::MAX), None);
    }

    #[test]
    fn test_serde_uses_configuration_names() {
        let json = serde_json::to_string(&TimeUnit::HalfDays).unwrap();
        assert_eq!(json, "\"HALF_DAYS\"");
        let unit: TimeUnit = serde_json::from_str("\"hours\"").unwrap();
        assert_eq!(unit, TimeUnit::Hours);
    }
}
