//! Persisted event format.
//!
//! Events are stored as a JSON array of records carrying every field
//! explicitly. The decoder also reads the legacy schema, which had a
//! single `hour`/`minute` pair (with `-1` meaning "no time") and no
//! all-day flag. Detection is per record: a `hourStart` field marks the
//! current schema, its absence the legacy one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::date::CalDate;
use crate::error::CalResult;
use crate::event::{ClockTime, Event, EventTime};

/// Sentinel for an absent hour field in the persisted form.
const NO_TIME: i32 = -1;

fn no_time() -> i32 {
    NO_TIME
}

#[derive(Serialize, Deserialize)]
struct EventRecord {
    day: i32,
    month: i32,
    year: i32,
    #[serde(rename = "hourStart")]
    hour_start: i32,
    #[serde(rename = "minuteStart", default)]
    minute_start: i32,
    #[serde(rename = "hourEnd", default = "no_time")]
    hour_end: i32,
    #[serde(rename = "minuteEnd", default)]
    minute_end: i32,
    #[serde(rename = "isAllDay", default)]
    is_all_day: bool,
    #[serde(default)]
    text: String,
}

impl EventRecord {
    fn from_event(event: &Event) -> Self {
        let (hour_start, minute_start, hour_end, minute_end, is_all_day) = match event.time {
            EventTime::AllDay => (NO_TIME, 0, NO_TIME, 0, true),
            EventTime::Timed { start, end } => {
                let (hour_end, minute_end) = match end {
                    Some(end) => (end.hour, end.minute),
                    None => (NO_TIME, 0),
                };
                (start.hour, start.minute, hour_end, minute_end, false)
            }
        };

        EventRecord {
            day: event.date.day,
            month: event.date.month,
            year: event.date.year,
            hour_start,
            minute_start,
            hour_end,
            minute_end,
            is_all_day,
            text: event.text.clone(),
        }
    }

    fn into_event(self) -> Event {
        let time = if self.is_all_day || self.hour_start == NO_TIME {
            EventTime::AllDay
        } else {
            let end = (self.hour_end != NO_TIME)
                .then(|| ClockTime::new(self.hour_end, self.minute_end));
            EventTime::Timed {
                start: ClockTime::new(self.hour_start, self.minute_start),
                end,
            }
        };

        Event {
            text: self.text,
            date: CalDate::new(self.day, self.month, self.year),
            time,
        }
    }
}

/// The pre-all-day schema: one time pair, `-1` hour meaning no time set.
#[derive(Deserialize)]
struct LegacyRecord {
    day: i32,
    month: i32,
    year: i32,
    #[serde(default = "no_time")]
    hour: i32,
    #[serde(default)]
    minute: i32,
    #[serde(default)]
    text: String,
}

impl LegacyRecord {
    fn into_event(self) -> Event {
        let time = if self.hour == NO_TIME {
            EventTime::AllDay
        } else {
            EventTime::Timed {
                start: ClockTime::new(self.hour, self.minute),
                end: None,
            }
        };

        Event {
            text: self.text,
            date: CalDate::new(self.day, self.month, self.year),
            time,
        }
    }
}

/// Serializes events to the current schema, in the given order.
pub fn encode<'a>(events: impl IntoIterator<Item = &'a Event>) -> CalResult<String> {
    let records: Vec<EventRecord> = events.into_iter().map(EventRecord::from_event).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parses a persisted document back into events, preserving order.
///
/// Records that fail to parse under their detected schema are skipped; an
/// unparseable document yields the empty list. Decoding never fails.
pub fn decode(text: &str) -> Vec<Event> {
    let Ok(values) = serde_json::from_str::<Vec<Value>>(text) else {
        return Vec::new();
    };

    values.into_iter().filter_map(decode_record).collect()
}

fn decode_record(value: Value) -> Option<Event> {
    if value.get("hourStart").is_some() {
        let record: EventRecord = serde_json::from_value(value).ok()?;
        Some(record.into_event())
    } else {
        let record: LegacyRecord = serde_json::from_value(value).ok()?;
        Some(record.into_event())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new("offsite", CalDate::new(3, 5, 2025), EventTime::AllDay),
            Event::new(
                "standup",
                CalDate::new(3, 5, 2025),
                EventTime::Timed {
                    start: ClockTime::new(9, 30),
                    end: None,
                },
            ),
            Event::new(
                "review",
                CalDate::new(14, 11, 2025),
                EventTime::Timed {
                    start: ClockTime::new(13, 0),
                    end: Some(ClockTime::new(14, 15)),
                },
            ),
        ]
    }

    #[test]
    fn round_trip_preserves_fields_and_order() {
        let events = sample_events();
        let encoded = encode(&events).unwrap();
        assert_eq!(decode(&encoded), events);
    }

    #[test]
    fn round_trip_with_quotes_and_backslashes_in_text() {
        let events = vec![Event::new(
            r#"say "hi" to C:\work\notes"#,
            CalDate::new(7, 0, 2026),
            EventTime::AllDay,
        )];
        let encoded = encode(&events).unwrap();
        assert_eq!(decode(&encoded), events);
    }

    #[test]
    fn encode_uses_literal_field_names() {
        let encoded = encode(&sample_events()).unwrap();
        for field in [
            "\"day\"",
            "\"month\"",
            "\"year\"",
            "\"hourStart\"",
            "\"minuteStart\"",
            "\"hourEnd\"",
            "\"minuteEnd\"",
            "\"isAllDay\"",
            "\"text\"",
        ] {
            assert!(encoded.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn decodes_legacy_record_with_time() {
        let events =
            decode(r#"[{"day":5,"month":2,"year":2024,"hour":14,"minute":30,"text":"x"}]"#);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].date, CalDate::new(5, 2, 2024));
        assert_eq!(
            events[0].time,
            EventTime::Timed {
                start: ClockTime::new(14, 30),
                end: None,
            }
        );
        assert_eq!(events[0].text, "x");
    }

    #[test]
    fn decodes_legacy_record_without_time_as_all_day() {
        let events =
            decode(r#"[{"day":5,"month":2,"year":2024,"hour":-1,"minute":0,"text":"x"}]"#);
        assert_eq!(events[0].time, EventTime::AllDay);
    }

    #[test]
    fn missing_optional_fields_default() {
        // No hourEnd/minuteEnd/isAllDay: end defaults to none.
        let events = decode(r#"[{"day":1,"month":0,"year":2025,"hourStart":8,"text":"a"}]"#);
        assert_eq!(
            events[0].time,
            EventTime::Timed {
                start: ClockTime::new(8, 0),
                end: None,
            }
        );
    }

    #[test]
    fn malformed_records_are_skipped() {
        let events = decode(
            r#"[
                {"day":1,"month":0,"year":2025,"hourStart":8,"text":"good"},
                {"day":"not a number","month":0,"year":2025,"hourStart":8,"text":"bad"},
                {"month":3,"year":2025,"hour":9,"text":"no day"},
                {"day":2,"month":0,"year":2025,"hour":9,"text":"also good"}
            ]"#,
        );
        let texts: Vec<&str> = events.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["good", "also good"]);
    }

    #[test]
    fn unparseable_document_decodes_to_empty() {
        assert!(decode("").is_empty());
        assert!(decode("not json").is_empty());
        assert!(decode("{\"day\":1}").is_empty());
    }
}
