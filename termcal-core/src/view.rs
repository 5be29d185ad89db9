//! View cursor and navigation state.
//!
//! Everything here is plain data recomputed on demand; the UI layer holds
//! one `ViewState` and re-derives the grid from it every frame.

use crate::date::{
    self, CalDate, advance_days, advance_week, days_in_month, first_day_of_month, monday_of_week,
    resolve_day, week_dates,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}

/// The calendar cursor: current month/year, selected day and week anchor.
///
/// `selected_day == 0` means "no selection" and short-circuits every
/// date-dependent action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub month: i32,
    pub year: i32,
    pub selected_day: i32,
    pub week_start_day: i32,
}

impl ViewState {
    /// A view positioned on today's date.
    pub fn new() -> Self {
        let today = CalDate::today();
        ViewState {
            mode: ViewMode::Month,
            month: today.month,
            year: today.year,
            selected_day: today.day,
            week_start_day: today.day,
        }
    }

    pub fn go_today(&mut self) {
        let today = CalDate::today();
        self.month = today.month;
        self.year = today.year;
        self.selected_day = today.day;
        if self.mode == ViewMode::Week {
            self.week_start_day = self.selected_day;
        }
    }

    pub fn select_day(&mut self, day: i32) {
        self.selected_day = day;
    }

    /// The selected date, or `None` when nothing is selected.
    pub fn selected_date(&self) -> Option<CalDate> {
        (self.selected_day > 0)
            .then(|| CalDate::new(self.selected_day, self.month, self.year))
    }

    /// Switches views. Entering week view anchors the week on the
    /// selection, falling back to today.
    pub fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
        if mode == ViewMode::Week {
            self.week_start_day = if self.selected_day > 0 {
                self.selected_day
            } else {
                CalDate::today().day
            };
        }
    }

    /// Moves the cursor forward (`1`) or backward (`-1`) by one month,
    /// week or day depending on the view mode.
    pub fn advance(&mut self, direction: i32) {
        match self.mode {
            ViewMode::Month => {
                self.month += direction;
                if self.month > 11 {
                    self.month = 0;
                    self.year += 1;
                } else if self.month < 0 {
                    self.month = 11;
                    self.year -= 1;
                }
            }
            ViewMode::Week => {
                let anchor = CalDate::new(self.week_start_day, self.month, self.year);
                let moved = advance_week(anchor, direction);
                self.week_start_day = moved.day;
                self.month = moved.month;
                self.year = moved.year;
            }
            ViewMode::Day => {
                let Some(selected) = self.selected_date() else {
                    return;
                };
                let moved = advance_days(selected, direction);
                self.selected_day = moved.day;
                self.month = moved.month;
                self.year = moved.year;
            }
        }
    }

    /// Snaps the week anchor back to the Monday of its week, moving the
    /// month/year cursor along with it. Week view does this every frame.
    pub fn align_week_to_monday(&mut self) {
        let monday = monday_of_week(CalDate::new(self.week_start_day, self.month, self.year));
        self.week_start_day = monday.day;
        self.month = monday.month;
        self.year = monday.year;
    }

    /// The seven dates of the week containing the anchor, Monday first,
    /// with true day continuity across month boundaries.
    pub fn week_days(&self) -> [CalDate; 7] {
        let monday = monday_of_week(CalDate::new(self.week_start_day, self.month, self.year));
        std::array::from_fn(|i| resolve_day(monday.day, monday.month, monday.year, i as i32))
    }

    /// The month laid out as rows of seven slots, Monday first. Leading
    /// and trailing slots outside the month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<i32>; 7]> {
        let first_day = first_day_of_month(self.month, self.year);
        let days = days_in_month(self.month, self.year);

        let mut grid = Vec::new();
        let mut day = 1;
        while day <= days {
            let mut row = [None; 7];
            for (dow, slot) in row.iter_mut().enumerate() {
                if grid.is_empty() && (dow as i32) < first_day {
                    continue;
                }
                if day <= days {
                    *slot = Some(day);
                    day += 1;
                }
            }
            grid.push(row);
        }
        grid
    }

    /// Header text for the current view: `"March 2025"` in month view,
    /// `"Week: March 3-9, 2025"` in week view (the day range stops at the
    /// month end, matching the week-list layout).
    pub fn title(&self) -> String {
        match self.mode {
            ViewMode::Week => {
                let dates = week_dates(self.week_start_day, self.month, self.year);
                let last_valid = dates
                    .iter()
                    .rev()
                    .find_map(|d| *d)
                    .unwrap_or(self.week_start_day);
                format!(
                    "Week: {} {}-{}, {}",
                    date::month_name(self.month),
                    self.week_start_day,
                    last_valid,
                    self.year
                )
            }
            _ => format!("{} {}", date::month_name(self.month), self.year),
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new()
    }
}
