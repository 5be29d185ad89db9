use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::CalDate;
use termcal_core::view::{ViewMode, ViewState};

use crate::render;
use crate::util::{open_app, parse_month};

pub fn run(date: Option<&str>) -> Result<()> {
    let (month, year) = parse_month(date)?;
    let app = open_app()?;

    let today = CalDate::today();
    let view = ViewState {
        mode: ViewMode::Month,
        month,
        year,
        selected_day: if (today.month, today.year) == (month, year) {
            today.day
        } else {
            0
        },
        week_start_day: 1,
    };

    println!("{}", view.title().bold());
    print!("{}", render::month_grid(&view, &app));

    // Below the grid, the selected day's events (today, when in view).
    if let Some(selected) = view.selected_date() {
        let events = app.events_for_date(selected);
        if !events.is_empty() {
            println!();
            println!("{}", render::date_heading(selected).bold());
            for (id, event) in events {
                println!("  {}", render::event_line(id, event));
            }
        }
    }
    Ok(())
}
