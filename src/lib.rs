//! Month-grid calendar arithmetic.
//!
//! [`month_calendar`] lays a month out the way a printed calendar page does,
//! seven columns per row starting from a chosen weekday, with [`PADDING`]
//! (`-1`) in the cells that belong to the neighbouring months.
//! [`days_in_month`] counts the days of a month under the proleptic Gregorian
//! calendar. Passing `0` as the year or month means "the current one".
//!
//! ```
//! use chrono::Weekday;
//!
//! let grid = monthgrid::month_calendar(2019, 1, Weekday::Sun).unwrap();
//! assert_eq!(grid.weeks()[0], [-1, -1, 1, 2, 3, 4, 5]);
//! assert_eq!(monthgrid::days_in_month(2016, 2).unwrap(), 29);
//! ```

pub mod calendar;
pub mod clock;
pub mod config;
pub mod error;

pub use calendar::{
    days_in_month, month_calendar, week_offset, weekday_of, Calendar, MonthGrid, Week, YearMonth,
    PADDING,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::CalendarError;
