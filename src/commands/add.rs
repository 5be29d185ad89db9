use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::date::month_name;
use termcal_core::{Event, EventTime};

use crate::util::{open_app, parse_clock, parse_date};

pub fn run(text: &str, date: Option<&str>, start: Option<&str>, end: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;

    let time = match start {
        None => EventTime::AllDay,
        Some(start) => EventTime::Timed {
            start: parse_clock(start)?,
            end: end.map(parse_clock).transpose()?,
        },
    };

    let mut app = open_app()?;
    let event = Event::new(text, date, time);
    let label = match event.format_time() {
        time if time.is_empty() => "all day".to_string(),
        time => time,
    };

    match app.add_event(event)? {
        Some(id) => {
            println!(
                "Added event {} on {} {}, {} ({})",
                id.to_string().bold(),
                month_name(date.month),
                date.day,
                date.year,
                label.dimmed()
            );
        }
        None => println!("{}", "Nothing added: event text is empty".dimmed()),
    }
    Ok(())
}
