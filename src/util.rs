use anyhow::{Context, Result, anyhow};
use chrono::Datelike;
use termcal_core::storage::FileStorage;
use termcal_core::{CalDate, CalendarApp, ClockTime};

/// Opens the calendar session backed by the user's data directory.
pub fn open_app() -> Result<CalendarApp<FileStorage>> {
    let base = dirs::data_dir().context("could not resolve a data directory")?;
    Ok(CalendarApp::new(FileStorage::new(base.join("termcal"))))
}

/// Parse `YYYY-MM-DD` into a calendar date; `None` means today.
pub fn parse_date(s: Option<&str>) -> Result<CalDate> {
    let Some(s) = s else {
        return Ok(CalDate::today());
    };
    let date = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s))?;
    Ok(CalDate::new(
        date.day() as i32,
        date.month0() as i32,
        date.year(),
    ))
}

/// Parse `YYYY-MM` into a (month, year) cursor; `None` means the current month.
pub fn parse_month(s: Option<&str>) -> Result<(i32, i32)> {
    let Some(s) = s else {
        let today = CalDate::today();
        return Ok((today.month, today.year));
    };
    let date = chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| anyhow!("Invalid month '{}'. Expected YYYY-MM", s))?;
    Ok((date.month0() as i32, date.year()))
}

/// Parse `HH:MM` into a clock time.
pub fn parse_clock(s: &str) -> Result<ClockTime> {
    let (hour, minute) = s
        .split_once(':')
        .ok_or_else(|| anyhow!("Invalid time '{}'. Expected HH:MM", s))?;
    let hour: i32 = hour
        .parse()
        .map_err(|_| anyhow!("Invalid hour in '{}'", s))?;
    let minute: i32 = minute
        .parse()
        .map_err(|_| anyhow!("Invalid minute in '{}'", s))?;
    Ok(ClockTime::new(hour, minute))
}
