pub mod add;
pub mod day;
pub mod list;
pub mod month;
pub mod remove;
pub mod week;
