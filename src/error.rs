//! Error type for the calendar arithmetic.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// The month falls outside the range chrono's `NaiveDate` can represent.
    #[error("month {month} of year {year} is outside the supported date range")]
    OutOfRange { year: i64, month: i64 },

    /// The day does not exist in the given month.
    #[error("{year}-{month:02} has no day {day}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, CalendarError>;
