use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::CalDate;

use crate::render;
use crate::util::open_app;

pub fn run() -> Result<()> {
    let app = open_app()?;

    if app.store().is_empty() {
        println!("{}", "No events".dimmed());
        return Ok(());
    }

    // Distinct dates in chronological order, then the per-day display order.
    let mut dates: Vec<CalDate> = app.store().iter().map(|(_, e)| e.date).collect();
    dates.sort_by_key(|d| (d.year, d.month, d.day));
    dates.dedup();

    for (i, date) in dates.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", render::date_heading(*date).bold());
        for (id, event) in app.events_for_date(*date) {
            println!("  {}", render::event_line(id, event));
        }
    }
    Ok(())
}
