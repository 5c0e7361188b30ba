use chrono::{Datelike, Duration, NaiveDate};

pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
}

// Fixed 6x7 month matrix. The week starts on Sunday; leading cells come
// from the previous month and trailing cells from the next one, so the
// result is always exactly 42 cells no matter how the month falls.
pub fn month_grid(anchor: NaiveDate) -> Vec<DayCell> {
    let first = anchor.with_day(1).unwrap();
    let lead = first.weekday().num_days_from_sunday() as i64;

    let mut cells = Vec::with_capacity(GRID_CELLS);
    let mut day = first - Duration::days(lead);
    while cells.len() < GRID_CELLS {
        cells.push(DayCell {
            date: day,
            in_current_month: day.year() == first.year() && day.month() == first.month(),
        });
        day = day + Duration::days(1);
    }
    cells
}

pub fn days_in_month(anchor: NaiveDate) -> u32 {
    let first = anchor.with_day(1).unwrap();
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1).unwrap()
    };
    (next_first - first).num_days() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn grid_is_always_42_cells() {
        for anchor in [
            d(2025, 8, 15),
            d(2025, 2, 1),
            d(2024, 2, 29),
            d(2025, 6, 30),
            d(2025, 11, 3),
            d(2025, 12, 25),
        ] {
            assert_eq!(month_grid(anchor).len(), GRID_CELLS, "anchor {anchor}");
        }
    }

    #[test]
    fn in_month_cell_count_equals_month_length() {
        let grid = month_grid(d(2025, 8, 20));
        let in_month = grid.iter().filter(|c| c.in_current_month).count();
        assert_eq!(in_month, 31);

        let grid = month_grid(d(2025, 2, 10));
        assert_eq!(grid.iter().filter(|c| c.in_current_month).count(), 28);

        let grid = month_grid(d(2024, 2, 10));
        assert_eq!(grid.iter().filter(|c| c.in_current_month).count(), 29);
    }

    #[test]
    fn grid_starts_on_the_sunday_at_or_before_the_first() {
        // August 2025 starts on a Friday; five leading July cells expected.
        let grid = month_grid(d(2025, 8, 1));
        assert_eq!(grid[0].date, d(2025, 7, 27));
        assert_eq!(grid[0].date.weekday(), Weekday::Sun);
        assert!(!grid[0].in_current_month);
        assert_eq!(grid[5].date, d(2025, 8, 1));
        assert!(grid[5].in_current_month);

        // June 2025 starts on a Sunday; no leading padding at all.
        let grid = month_grid(d(2025, 6, 12));
        assert_eq!(grid[0].date, d(2025, 6, 1));
        assert!(grid[0].in_current_month);
    }

    #[test]
    fn cells_are_consecutive_dates() {
        let grid = month_grid(d(2025, 11, 1));
        for pair in grid.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn trailing_cells_belong_to_the_next_month() {
        let grid = month_grid(d(2025, 8, 1));
        let last = grid.last().unwrap();
        assert_eq!(last.date.month(), 9);
        assert!(!last.in_current_month);
    }

    #[test]
    fn days_in_month_handles_december_and_february() {
        assert_eq!(days_in_month(d(2025, 12, 31)), 31);
        assert_eq!(days_in_month(d(2025, 2, 14)), 28);
        assert_eq!(days_in_month(d(2024, 2, 14)), 29);
        assert_eq!(days_in_month(d(2025, 4, 1)), 30);
    }
}
