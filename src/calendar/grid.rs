use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use super::YearMonth;

/// Cell value for days that belong to the previous or next month.
pub const PADDING: i32 = -1;

/// One calendar row: a day number or [`PADDING`] per column.
pub type Week = [i32; 7];

/// A month laid out as calendar rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    year:       i32,
    month:      u32,
    week_start: Weekday,
    days:       u32,
    weeks:      Vec<Week>,
}

impl MonthGrid {
    pub(crate) fn new(ym: YearMonth, week_start: Weekday, days: u32, weeks: Vec<Week>) -> Self {
        Self { year: ym.year(), month: ym.month(), week_start, days, weeks }
    }

    pub fn year(&self)            -> i32      { self.year }
    pub fn month(&self)           -> u32      { self.month }
    pub fn week_start(&self)      -> Weekday  { self.week_start }
    /// Number of days in the month.
    pub fn days(&self)            -> u32      { self.days }
    pub fn weeks(&self)           -> &[Week]  { &self.weeks }
    pub fn into_weeks(self)       -> Vec<Week> { self.weeks }
    /// Number of rows, 4 to 6.
    pub fn len(&self)             -> usize    { self.weeks.len() }
    pub fn is_empty(&self)        -> bool     { self.weeks.is_empty() }

    /// Weekdays in column order.
    pub fn header(&self) -> [Weekday; 7] {
        std::array::from_fn(|col| (0..col).fold(self.week_start, |wd, _| wd.succ()))
    }

    /// `(row, column)` of `day`, or `None` if the month has no such day.
    pub fn position_of(&self, day: u32) -> Option<(usize, usize)> {
        let day = i32::try_from(day).ok().filter(|&d| d > 0)?;
        self.weeks.iter().enumerate().find_map(|(row, week)| {
            week.iter().position(|&cell| cell == day).map(|col| (row, col))
        })
    }

    /// The grid with each day as a date, `None` for padding.
    pub fn dates(&self) -> Vec<[Option<NaiveDate>; 7]> {
        self.weeks
            .iter()
            .map(|&week| {
                week.map(|cell| {
                    u32::try_from(cell)
                        .ok()
                        .and_then(|day| NaiveDate::from_ymd_opt(self.year, self.month, day))
                })
            })
            .collect()
    }
}
