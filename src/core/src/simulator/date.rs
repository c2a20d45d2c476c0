use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Calendar position of the career, always on the first day of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SimulationDate(NaiveDate);

impl SimulationDate {
    pub fn from_year_month(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(SimulationDate)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn add_months(&self, months: u32) -> Option<Self> {
        self.0.checked_add_months(Months::new(months)).map(SimulationDate)
    }

    pub fn next_month(&self) -> Option<Self> {
        self.add_months(1)
    }

    /// `true` when this date opens a new calendar year.
    pub fn is_season_start(&self) -> bool {
        self.month() == 1
    }
}

impl Display for SimulationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:02}/{}", self.month(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn december_rolls_into_january() {
        let date = SimulationDate::from_year_month(2025, 12).unwrap();
        let next = date.next_month().unwrap();

        assert_eq!((next.year(), next.month()), (2026, 1));
        assert!(next.is_season_start());
        assert!(date < next);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(SimulationDate::from_year_month(2025, 13).is_none());
    }
}
