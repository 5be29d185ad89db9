use anyhow::Result;
use owo_colors::OwoColorize;
use termcal_core::EventId;

use crate::util::open_app;

pub fn run(id: u64) -> Result<()> {
    let mut app = open_app()?;
    let id = EventId(id);

    match app.store().get(id).map(|event| event.text.clone()) {
        Some(text) => {
            app.remove_event(id)?;
            println!("Removed '{}'", text.bold());
        }
        None => println!("{}", format!("No event with id {}", id).dimmed()),
    }
    Ok(())
}
