use std::fmt::Write;

use owo_colors::OwoColorize;
use termcal_core::date::{day_name, month_name};
use termcal_core::storage::Storage;
use termcal_core::view::ViewState;
use termcal_core::{CalDate, CalendarApp, Event, EventId};

/// `"March 14, 2025"`
pub fn date_heading(date: CalDate) -> String {
    format!("{} {}, {}", month_name(date.month), date.day, date.year)
}

/// One listing line: time (when the event has one), text, id.
pub fn event_line(id: EventId, event: &Event) -> String {
    let id_tag = format!("#{}", id);
    match event.format_time() {
        time if time.is_empty() => format!("{} {}", event.text, id_tag.dimmed()),
        time => format!("[{}] {} {}", time, event.text, id_tag.dimmed()),
    }
}

/// The month as a text grid, Monday first. Days with events are marked
/// with `*`, the selected day is highlighted.
pub fn month_grid<S: Storage>(view: &ViewState, app: &CalendarApp<S>) -> String {
    let mut out = String::new();

    for dow in 0..7 {
        let _ = write!(out, " {} ", day_name(dow));
    }
    out.push('\n');

    for row in view.month_grid() {
        for slot in row {
            match slot {
                None => out.push_str("     "),
                Some(day) => {
                    let date = CalDate::new(day, view.month, view.year);
                    let marker = if app.events_for_date(date).is_empty() {
                        ' '
                    } else {
                        '*'
                    };
                    let cell = format!("{:>3}{} ", day, marker);
                    if day == view.selected_day {
                        let _ = write!(out, "{}", cell.reversed());
                    } else {
                        out.push_str(&cell);
                    }
                }
            }
        }
        out.push('\n');
    }
    out
}
