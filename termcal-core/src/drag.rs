//! Drag-to-reschedule state machine.
//!
//! The time grid shows hours 7:00..24:00. A drag starts with a press on a
//! timed event block (recording how far into the block the grab happened)
//! and ends with a release, which either carries a drop target inside the
//! grid or cancels. The store mutation happens only at the drop instant.

use crate::date::CalDate;
use crate::event::{ClockTime, Event, EventId, EventTime};

/// First hour shown on the time grid.
pub const GRID_START_HOUR: i32 = 7;
/// One past the last hour shown on the time grid.
pub const GRID_END_HOUR: i32 = 24;

/// Fallback duration for events without an end time, in minutes.
const DEFAULT_DURATION_MINUTES: i32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        event: EventId,
        /// Minutes between the event's start and where the block was grabbed.
        grab_offset_minutes: i32,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    /// Begins a drag. Ignored while another drag is in flight.
    pub fn press(&mut self, event: EventId, grab_offset_minutes: i32) {
        if let DragState::Idle = self {
            *self = DragState::Dragging {
                event,
                grab_offset_minutes,
            };
        }
    }

    /// Ends the drag, returning its payload if one was in flight.
    pub fn release(&mut self) -> Option<(EventId, i32)> {
        match std::mem::take(self) {
            DragState::Idle => None,
            DragState::Dragging {
                event,
                grab_offset_minutes,
            } => Some((event, grab_offset_minutes)),
        }
    }
}

/// Where a drag was dropped: a grid day column and the vertical position
/// within it, expressed as minutes below the top of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropTarget {
    pub date: CalDate,
    pub minutes_from_top: i32,
}

/// Rewrites an event's date and time for a drop. Returns whether the
/// event changed: all-day events are not draggable, and a drop below the
/// last grid hour is rejected.
///
/// The event keeps its duration (one hour if it had no end time); the end
/// is clamped to 23:59 when it would spill past midnight.
pub fn apply_drop(event: &mut Event, target: DropTarget, grab_offset_minutes: i32) -> bool {
    let EventTime::Timed { start, end } = event.time else {
        return false;
    };

    let mut minutes = target.minutes_from_top - grab_offset_minutes;
    if minutes < 0 {
        minutes = 0;
    }

    let new_start = ClockTime {
        hour: GRID_START_HOUR + minutes / 60,
        minute: minutes % 60,
    };
    if new_start.hour >= GRID_END_HOUR {
        return false;
    }

    let duration = match end {
        Some(end) => end.total_minutes() - start.total_minutes(),
        None => DEFAULT_DURATION_MINUTES,
    };

    let end_minutes = new_start.total_minutes() + duration;
    let new_end = if end_minutes >= 24 * 60 {
        ClockTime {
            hour: 23,
            minute: 59,
        }
    } else {
        ClockTime {
            hour: end_minutes / 60,
            minute: end_minutes % 60,
        }
    };

    event.date = target.date;
    event.time = EventTime::Timed {
        start: new_start,
        end: Some(new_end),
    };
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timed_event(hour: i32, minute: i32, end: Option<(i32, i32)>) -> Event {
        Event::new(
            "gym",
            CalDate::new(10, 3, 2025),
            EventTime::Timed {
                start: ClockTime::new(hour, minute),
                end: end.map(|(h, m)| ClockTime::new(h, m)),
            },
        )
    }

    #[test]
    fn press_then_release_returns_payload_and_resets() {
        let mut drag = DragState::default();
        assert!(!drag.is_dragging());

        drag.press(EventId(7), 15);
        assert!(drag.is_dragging());

        // A second press mid-drag does not steal the drag.
        drag.press(EventId(9), 0);
        assert_eq!(drag.release(), Some((EventId(7), 15)));
        assert_eq!(drag, DragState::Idle);
        assert_eq!(drag.release(), None);
    }

    #[test]
    fn drop_moves_event_and_preserves_duration() {
        let mut event = timed_event(9, 0, Some((10, 30)));
        let target = DropTarget {
            date: CalDate::new(12, 3, 2025),
            minutes_from_top: 4 * 60, // 11:00 on the grid
        };
        assert!(apply_drop(&mut event, target, 0));
        assert_eq!(event.date, CalDate::new(12, 3, 2025));
        assert_eq!(
            event.time,
            EventTime::Timed {
                start: ClockTime::new(11, 0),
                end: Some(ClockTime::new(12, 30)),
            }
        );
    }

    #[test]
    fn drop_subtracts_grab_offset() {
        let mut event = timed_event(9, 0, Some((10, 0)));
        let target = DropTarget {
            date: event.date,
            minutes_from_top: 4 * 60 + 20,
        };
        // Grabbed 20 minutes into the block, so the start lands at 11:00.
        assert!(apply_drop(&mut event, target, 20));
        assert_eq!(
            event.time.start(),
            Some(ClockTime::new(11, 0))
        );
    }

    #[test]
    fn drop_without_end_time_gets_default_hour() {
        let mut event = timed_event(9, 0, None);
        let target = DropTarget {
            date: event.date,
            minutes_from_top: 90, // 8:30
        };
        assert!(apply_drop(&mut event, target, 0));
        assert_eq!(
            event.time,
            EventTime::Timed {
                start: ClockTime::new(8, 30),
                end: Some(ClockTime::new(9, 30)),
            }
        );
    }

    #[test]
    fn drop_clamps_above_grid_top_and_below_midnight() {
        let mut event = timed_event(9, 0, Some((11, 0)));
        let above = DropTarget {
            date: event.date,
            minutes_from_top: 10,
        };
        // Offset pulls the start above the grid; it clamps to 7:00.
        assert!(apply_drop(&mut event, above, 45));
        assert_eq!(event.time.start(), Some(ClockTime::new(7, 0)));

        let late = DropTarget {
            date: event.date,
            minutes_from_top: (23 - GRID_START_HOUR) * 60,
        };
        assert!(apply_drop(&mut event, late, 0));
        assert_eq!(
            event.time,
            EventTime::Timed {
                start: ClockTime::new(23, 0),
                end: Some(ClockTime::new(23, 59)),
            }
        );
    }

    #[test]
    fn drop_past_last_grid_hour_is_rejected() {
        let mut event = timed_event(9, 0, None);
        let original = event.clone();
        let target = DropTarget {
            date: CalDate::new(1, 0, 2026),
            minutes_from_top: (GRID_END_HOUR - GRID_START_HOUR) * 60,
        };
        assert!(!apply_drop(&mut event, target, 0));
        assert_eq!(event, original);
    }

    #[test]
    fn all_day_events_are_not_draggable() {
        let mut event = Event::new("offsite", CalDate::new(10, 3, 2025), EventTime::AllDay);
        let original = event.clone();
        let target = DropTarget {
            date: CalDate::new(11, 3, 2025),
            minutes_from_top: 60,
        };
        assert!(!apply_drop(&mut event, target, 0));
        assert_eq!(event, original);
    }
}
