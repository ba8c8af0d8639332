//! When a recorded consent decision has to be reconfirmed

use crate::model::{ConsentProperties, TimeUnit};
use chrono::{DateTime, Duration, Utc};

/// Reminder interval applied to consent decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReminderPolicy {
    pub reminder: i64,
    pub time_unit: TimeUnit,
}

impl ReminderPolicy {
    pub fn new(reminder: i64, time_unit: TimeUnit) -> Self {
        Self {
            reminder,
            time_unit,
        }
    }

    pub fn from_properties(props: &ConsentProperties) -> Self {
        Self::new(props.reminder, props.reminder_time_unit)
    }

    /// Length of the interval; `None` when it is unbounded.
    ///
    /// Negative reminders are treated as zero.
    pub fn interval(&self) -> Option<Duration> {
        self.time_unit.duration_of(self.reminder.max(0))
    }

    /// Instant at which a decision taken at `decided_at` has to be reconfirmed
    pub fn expires_at(&self, decided_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        decided_at.checked_add_signed(self.interval()?)
    }

    pub fn is_reminder_due(&self, decided_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.expires_at(decided_at) {
            Some(expires_at) => expires_at <= now,
            None => false,
        }
    }
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self::from_properties(&ConsentProperties::default())
    }
}
