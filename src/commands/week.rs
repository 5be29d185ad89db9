use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::date::day_name;
use termcal_core::view::{ViewMode, ViewState};

use crate::render;
use crate::util::{open_app, parse_date};

pub fn run(date: Option<&str>) -> Result<()> {
    let date = parse_date(date)?;
    let app = open_app()?;

    let mut view = ViewState {
        mode: ViewMode::Week,
        month: date.month,
        year: date.year,
        selected_day: date.day,
        week_start_day: date.day,
    };
    view.align_week_to_monday();

    println!("{}", view.title().bold());
    for day in view.week_days() {
        println!();
        println!(
            "{} {}",
            day_name(day.weekday()).bold(),
            render::date_heading(day)
        );
        let events = app.events_for_date(day);
        if events.is_empty() {
            println!("  {}", "No events".dimmed());
        } else {
            for (id, event) in events {
                println!("  {}", render::event_line(id, event));
            }
        }
    }
    Ok(())
}
