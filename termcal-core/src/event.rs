//! The event data model.

use std::fmt;

use crate::date::CalDate;

/// Opaque, stable event identifier assigned by the store at insertion.
/// Removal and reschedule address events by id, never by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A wall-clock time. Construction clamps the fields into range; that is
/// the only validation events carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    pub hour: i32,
    pub minute: i32,
}

impl ClockTime {
    /// Clamps `hour` to `0..=23` and `minute` to `0..=59`.
    pub fn new(hour: i32, minute: i32) -> Self {
        ClockTime {
            hour: hour.clamp(0, 23),
            minute: minute.clamp(0, 59),
        }
    }

    pub fn total_minutes(&self) -> i32 {
        self.hour * 60 + self.minute
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// When an event takes place on its day: either all day, or at a start
/// time with an optional end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTime {
    AllDay,
    Timed {
        start: ClockTime,
        end: Option<ClockTime>,
    },
}

impl EventTime {
    pub fn is_all_day(&self) -> bool {
        matches!(self, EventTime::AllDay)
    }

    pub fn start(&self) -> Option<ClockTime> {
        match self {
            EventTime::AllDay => None,
            EventTime::Timed { start, .. } => Some(*start),
        }
    }
}

/// A calendar event. The date is not validated against the month length;
/// callers pass dates they obtained from the calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub text: String,
    pub date: CalDate,
    pub time: EventTime,
}

impl Event {
    pub fn new(text: impl Into<String>, date: CalDate, time: EventTime) -> Self {
        Event {
            text: text.into(),
            date,
            time,
        }
    }

    /// Display form of the event's time: empty for all-day events,
    /// `"HH:MM"` when only a start time is set, `"HH:MM - HH:MM"` when an
    /// end time is present.
    pub fn format_time(&self) -> String {
        match self.time {
            EventTime::AllDay => String::new(),
            EventTime::Timed { start, end: None } => start.to_string(),
            EventTime::Timed {
                start,
                end: Some(end),
            } => format!("{} - {}", start, end),
        }
    }
}
