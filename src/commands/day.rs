use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render;
use crate::util::{open_app, parse_date};

pub fn run(date: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let app = open_app()?;

    println!("{}", render::date_heading(date).bold());
    let events = app.events_for_date(date);
    if events.is_empty() {
        println!("  {}", "No events".dimmed());
        return Ok(());
    }
    for (id, event) in events {
        println!("  {}", render::event_line(id, event));
    }
    Ok(())
}
