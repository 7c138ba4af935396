use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::clock::{Clock, SystemClock};
use crate::error::{CalendarError, Result};

mod grid;

pub use grid::{MonthGrid, Week, PADDING};

// ─── Year/month normalization ─────────────────────────────────────────────────

/// A `(year, month)` pair with the month always in `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearMonth")]
pub struct YearMonth {
    year:  i32,
    month: u32,
}

/// Unnormalized wire form; deserialization goes through [`YearMonth::new`].
#[derive(Deserialize)]
struct RawYearMonth {
    year:  i32,
    month: i32,
}

impl TryFrom<RawYearMonth> for YearMonth {
    type Error = CalendarError;

    fn try_from(raw: RawYearMonth) -> Result<Self> { Self::new(raw.year, raw.month) }
}

impl YearMonth {
    /// Carries an out-of-range month into the year: month 13 is January of
    /// `year + 1`, month 0 is December of `year - 1`. Zero is not a sentinel
    /// here; see [`Calendar::resolve`] for that.
    pub fn new(year: i32, month: i32) -> Result<Self> {
        let month0 = i64::from(year) * 12 + i64::from(month) - 1;
        let y = month0.div_euclid(12);
        let m = month0.rem_euclid(12) as u32 + 1;
        let year = i32::try_from(y)
            .map_err(|_| CalendarError::OutOfRange { year: y, month: i64::from(m) })?;
        Ok(Self { year, month: m })
    }

    pub fn year(self)  -> i32 { self.year }
    pub fn month(self) -> u32 { self.month }

    pub fn succ(self) -> Result<Self> { Self::new(self.year, self.month as i32 + 1) }
    pub fn pred(self) -> Result<Self> { Self::new(self.year, self.month as i32 - 1) }

    pub fn first_day(self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| self.out_of_range())
    }

    /// Day 0 of the following month, i.e. the last day of this one.
    pub fn last_day(self) -> Result<NaiveDate> {
        self.succ()?
            .first_day()
            .ok()
            .and_then(|next| next.pred_opt())
            .ok_or_else(|| self.out_of_range())
    }

    fn out_of_range(self) -> CalendarError {
        CalendarError::OutOfRange { year: i64::from(self.year), month: i64::from(self.month) }
    }
}

// ─── Weekday arithmetic ───────────────────────────────────────────────────────

/// Column of `weekday` in a week whose first column is `week_start`.
pub fn week_offset(weekday: Weekday, week_start: Weekday) -> u32 {
    let day   = weekday.num_days_from_sunday();
    let start = week_start.num_days_from_sunday();
    match start.cmp(&day) {
        Ordering::Equal   => 0,
        Ordering::Greater => 7 - start + day,
        Ordering::Less    => day - start,
    }
}

pub fn weekday_of(year: i32, month: u32, day: u32) -> Result<Weekday> {
    NaiveDate::from_ymd_opt(year, month, day)
        .map(|d| d.weekday())
        .ok_or(CalendarError::InvalidDate { year, month, day })
}

// ─── Calendar ─────────────────────────────────────────────────────────────────

/// Month arithmetic with `0` year/month sentinels resolved against a clock.
#[derive(Debug, Clone, Default)]
pub struct Calendar<C = SystemClock> {
    clock: C,
}

impl Calendar {
    pub fn new() -> Self { Self { clock: SystemClock } }
}

impl<C: Clock> Calendar<C> {
    pub fn with_clock(clock: C) -> Self { Self { clock } }

    /// Substitutes the current year for `year == 0` and the current month for
    /// `month == 0`, then normalizes. Both come from a single clock reading.
    pub fn resolve(&self, year: i32, month: i32) -> Result<YearMonth> {
        if year != 0 && month != 0 {
            return YearMonth::new(year, month);
        }
        let today = self.clock.today();
        let year  = if year == 0 { today.year() } else { year };
        let month = if month == 0 { today.month() as i32 } else { month };
        tracing::debug!(year, month, "resolved zero sentinel against {today}");
        YearMonth::new(year, month)
    }

    /// Number of days in the month, 28 to 31.
    pub fn days_in_month(&self, year: i32, month: i32) -> Result<u32> {
        Ok(self.resolve(year, month)?.last_day()?.day())
    }

    /// Lays the month out in rows of seven starting at `week_start`. Cells
    /// belonging to the neighbouring months hold [`PADDING`].
    pub fn month_calendar(&self, year: i32, month: i32, week_start: Weekday) -> Result<MonthGrid> {
        layout(self.resolve(year, month)?, week_start)
    }
}

/// [`Calendar::days_in_month`] against the system clock.
pub fn days_in_month(year: i32, month: i32) -> Result<u32> {
    Calendar::new().days_in_month(year, month)
}

/// [`Calendar::month_calendar`] against the system clock.
pub fn month_calendar(year: i32, month: i32, week_start: Weekday) -> Result<MonthGrid> {
    Calendar::new().month_calendar(year, month, week_start)
}

fn layout(ym: YearMonth, week_start: Weekday) -> Result<MonthGrid> {
    let first        = ym.first_day()?;
    let last         = ym.last_day()?;
    let days         = last.day();
    let first_offset = week_offset(first.weekday(), week_start);
    let last_offset  = week_offset(last.weekday(), week_start);
    tracing::trace!(
        year = ym.year(), month = ym.month(), days, first_offset, last_offset,
        "laying out month starting {week_start}"
    );

    let mut weeks: Vec<Week> = Vec::with_capacity(6);
    // Leading cells before `first_offset` stay as padding.
    let mut week: Week = [PADDING; 7];
    let mut col = first_offset as usize;

    for day in 1..=days {
        week[col] = day as i32;
        col += 1;
        if (day + first_offset) % 7 == 0 {
            weeks.push(week);
            week = [PADDING; 7];
            col  = 0;
        }
    }
    // Cells after `last_offset` are padding. A last day in the final column
    // already closed its row above.
    if last_offset < 6 {
        weeks.push(week);
    }

    Ok(MonthGrid::new(ym, week_start, days, weeks))
}
