//! Month grid layout.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use monthgrid::{days_in_month, month_calendar, week_offset, Calendar, FixedClock, MonthGrid, PADDING};

const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun, Weekday::Mon, Weekday::Tue, Weekday::Wed,
    Weekday::Thu, Weekday::Fri, Weekday::Sat,
];

fn assert_well_formed(grid: &MonthGrid, days: u32) {
    let ctx = format!("{}-{:02} from {}", grid.year(), grid.month(), grid.week_start());
    assert!((4..=6).contains(&grid.len()), "{ctx}: {} rows", grid.len());
    let cells: Vec<i32> = grid.weeks().iter().flatten().copied().collect();
    let numbered: Vec<i32> = cells.iter().copied().filter(|&c| c != PADDING).collect();
    let expected: Vec<i32> = (1..=days as i32).collect();
    assert_eq!(numbered, expected, "{ctx}: days out of order or missing");
    // Padding only at the edges.
    let first = cells.iter().position(|&c| c == 1).unwrap();
    assert!(cells[..first].iter().all(|&c| c == PADDING), "{ctx}");
    assert!(cells[first + days as usize..].iter().all(|&c| c == PADDING), "{ctx}");
    assert!(first < 7, "{ctx}: a whole row of leading padding");
    assert!(cells.len() - (first + days as usize) < 7, "{ctx}: a whole row of trailing padding");
}

#[test]
fn january_2019_sunday_first() {
    let grid = month_calendar(2019, 1, Weekday::Sun).unwrap();
    assert_eq!(
        grid.weeks(),
        [
            [-1, -1, 1, 2, 3, 4, 5],
            [6, 7, 8, 9, 10, 11, 12],
            [13, 14, 15, 16, 17, 18, 19],
            [20, 21, 22, 23, 24, 25, 26],
            [27, 28, 29, 30, 31, -1, -1],
        ]
    );
}

#[test]
fn november_2019_monday_first() {
    let grid = month_calendar(2019, 11, Weekday::Mon).unwrap();
    assert_eq!(
        grid.into_weeks(),
        vec![
            [-1, -1, -1, -1, 1, 2, 3],
            [4, 5, 6, 7, 8, 9, 10],
            [11, 12, 13, 14, 15, 16, 17],
            [18, 19, 20, 21, 22, 23, 24],
            [25, 26, 27, 28, 29, 30, -1],
        ]
    );
}

#[test]
fn four_row_february() {
    // 2015-02-01 is a Sunday, 2021-02-01 a Monday.
    let grid = month_calendar(2015, 2, Weekday::Sun).unwrap();
    assert_eq!(grid.len(), 4);
    assert_eq!(grid.weeks()[0], [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(grid.weeks()[3], [22, 23, 24, 25, 26, 27, 28]);

    let grid = month_calendar(2021, 2, Weekday::Mon).unwrap();
    assert_eq!(grid.len(), 4);
}

#[test]
fn six_row_month() {
    // 2020-08-01 is a Saturday.
    let grid = month_calendar(2020, 8, Weekday::Sun).unwrap();
    assert_eq!(grid.len(), 6);
    assert_eq!(grid.weeks()[0], [-1, -1, -1, -1, -1, -1, 1]);
    assert_eq!(grid.weeks()[5], [30, 31, -1, -1, -1, -1, -1]);
}

#[test]
fn last_day_in_final_column_adds_no_padding_row() {
    // 2019-08-31 is a Saturday.
    let grid = month_calendar(2019, 8, Weekday::Sun).unwrap();
    assert_eq!(grid.weeks().last().unwrap(), &[25, 26, 27, 28, 29, 30, 31]);
}

#[test]
fn december_grid_uses_its_own_year() {
    // 2019-12-01 is a Sunday; 2018-12-01 was a Saturday.
    let grid = month_calendar(2019, 12, Weekday::Sun).unwrap();
    assert_eq!(grid.days(), 31);
    assert_eq!(grid.weeks()[0], [1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(grid.weeks()[4], [29, 30, 31, -1, -1, -1, -1]);
}

#[test]
fn rolled_over_month_is_reported_normalized() {
    let grid = month_calendar(2019, 13, Weekday::Sun).unwrap();
    assert_eq!((grid.year(), grid.month()), (2020, 1));
    assert_eq!(grid, month_calendar(2020, 1, Weekday::Sun).unwrap());
}

#[test]
fn first_day_sits_in_its_weekday_column() {
    for start in ALL_WEEKDAYS {
        let grid = month_calendar(2024, 3, start).unwrap();
        let first = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().weekday();
        let (row, col) = grid.position_of(1).unwrap();
        assert_eq!(row, 0);
        assert_eq!(col as u32, week_offset(first, start));
        assert_eq!(grid.header()[col], first);
    }
}

#[test]
fn dates_agree_with_chrono_weekdays() {
    let grid = month_calendar(2023, 10, Weekday::Wed).unwrap();
    let header = grid.header();
    for week in grid.dates() {
        for (col, cell) in week.iter().enumerate() {
            if let Some(date) = cell {
                assert_eq!(date.weekday(), header[col]);
            }
        }
    }
}

#[test]
fn every_grid_is_complete_and_aligned() {
    for year in 1899..=2101 {
        for month in 1..=12 {
            let days = days_in_month(year, month).unwrap();
            for start in ALL_WEEKDAYS {
                let grid = month_calendar(year, month, start).unwrap();
                assert_eq!(grid.days(), days);
                assert_eq!(grid.week_start(), start);
                assert_well_formed(&grid, days);
            }
        }
    }
}

#[test]
fn zero_sentinels_use_the_injected_clock() {
    let clock = FixedClock(NaiveDate::from_ymd_opt(2019, 11, 20).unwrap());
    let cal   = Calendar::with_clock(clock);
    let grid  = cal.month_calendar(0, 0, Weekday::Mon).unwrap();
    assert_eq!(grid, month_calendar(2019, 11, Weekday::Mon).unwrap());

    let grid = cal.month_calendar(0, 1, Weekday::Sun).unwrap();
    assert_eq!((grid.year(), grid.month()), (2019, 1));

    let grid = cal.month_calendar(2020, 0, Weekday::Sun).unwrap();
    assert_eq!((grid.year(), grid.month()), (2020, 11));
}

#[test]
fn zero_sentinels_match_the_system_date() {
    let before = Local::now().date_naive();
    let defaulted = month_calendar(0, 0, Weekday::Sun).unwrap();
    let explicit  = month_calendar(before.year(), before.month() as i32, Weekday::Sun).unwrap();
    let after = Local::now().date_naive();
    if (before.year(), before.month()) != (after.year(), after.month()) {
        // Month rolled over between the calls.
        return;
    }
    assert_eq!(defaulted, explicit);
    assert_eq!(days_in_month(0, 0).unwrap(), explicit.days());
}
