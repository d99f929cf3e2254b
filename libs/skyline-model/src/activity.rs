//! # Activity Grid
//!
//! Per-day activity counts as delivered by the data-retrieval side, plus the
//! validation applied before any geometry is attempted.
//!
//! The serialized shape follows the contribution calendar JSON:
//!
//! ```json
//! {"weeks": [{"contributionDays": [{"date": "2024-01-07", "contributionCount": 3}]}]}
//! ```

use chrono::NaiveDate;
use config::constants::{DAYS_PER_WEEK, GRID_WEEKS};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// One calendar day and its activity count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDay {
    /// Calendar date; malformed dates are rejected when parsing.
    pub date: NaiveDate,
    /// Number of activities recorded on `date`.
    #[serde(rename = "contributionCount")]
    pub count: u32,
}

impl ActivityDay {
    pub fn new(date: NaiveDate, count: u32) -> Self {
        Self { date, count }
    }
}

/// Up to seven consecutive days; the first and last week of a calendar year
/// may be partial.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityWeek {
    #[serde(rename = "contributionDays")]
    pub days: Vec<ActivityDay>,
}

impl ActivityWeek {
    pub fn new(days: Vec<ActivityDay>) -> Self {
        Self { days }
    }
}

/// One year of activity, ordered by week.
///
/// # Examples
/// ```
/// use skyline_model::YearGrid;
/// let grid = YearGrid::from_json(
///     r#"{"weeks":[{"contributionDays":[{"date":"2024-01-07","contributionCount":4}]}]}"#,
/// ).unwrap();
/// assert_eq!(grid.max_count(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearGrid {
    pub weeks: Vec<ActivityWeek>,
}

impl YearGrid {
    pub fn new(weeks: Vec<ActivityWeek>) -> Self {
        Self { weeks }
    }

    /// Builds a grid from consecutive daily counts starting at `first_day`,
    /// seven days per week.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use skyline_model::YearGrid;
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    /// let grid = YearGrid::from_daily_counts(start, &[0; 10]);
    /// assert_eq!(grid.weeks.len(), 2);
    /// assert_eq!(grid.weeks[1].days.len(), 3);
    /// ```
    pub fn from_daily_counts(first_day: NaiveDate, counts: &[u32]) -> Self {
        let days: Vec<ActivityDay> = first_day
            .iter_days()
            .zip(counts)
            .map(|(date, &count)| ActivityDay::new(date, count))
            .collect();
        let weeks = days
            .chunks(DAYS_PER_WEEK)
            .map(|chunk| ActivityWeek::new(chunk.to_vec()))
            .collect();
        Self { weeks }
    }

    /// Parses the calendar JSON shape.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInput`] for malformed JSON, invalid dates or
    /// negative counts.
    pub fn from_json(json: &str) -> ModelResult<Self> {
        serde_json::from_str(json)
            .map_err(|err| ModelError::invalid_input(format!("activity grid: {err}")))
    }

    /// Highest count of the year, 0 for an idle year.
    pub fn max_count(&self) -> u32 {
        self.days().map(|day| day.count).max().unwrap_or(0)
    }

    /// Number of days with a non-zero count.
    pub fn active_days(&self) -> usize {
        self.days().filter(|day| day.count > 0).count()
    }

    /// All days in week order.
    pub fn days(&self) -> impl Iterator<Item = &ActivityDay> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Checks the lattice bounds: 1 to 53 weeks, at most 7 days per week.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInput`] naming `label` and the offending week.
    pub fn validate(&self, label: &str) -> ModelResult<()> {
        if self.weeks.is_empty() {
            return Err(ModelError::invalid_input(format!("{label} has no weeks")));
        }
        if self.weeks.len() > GRID_WEEKS {
            return Err(ModelError::invalid_input(format!(
                "{label} has {} weeks, at most {GRID_WEEKS} fit the grid",
                self.weeks.len()
            )));
        }
        if let Some((index, week)) = self
            .weeks
            .iter()
            .enumerate()
            .find(|(_, week)| week.days.len() > DAYS_PER_WEEK)
        {
            return Err(ModelError::invalid_input(format!(
                "{label} week {index} has {} days, at most {DAYS_PER_WEEK} allowed",
                week.days.len()
            )));
        }
        Ok(())
    }
}

/// Everything needed to generate one model.
#[derive(Debug, Clone, Copy)]
pub struct SkylineRequest<'a> {
    /// Subject identifier used for the caption and the file name.
    pub subject: &'a str,
    pub start_year: i32,
    pub end_year: i32,
    /// One grid per year, oldest first (`start_year` to `end_year`).
    pub years: &'a [YearGrid],
}

impl<'a> SkylineRequest<'a> {
    /// A request covering one year.
    pub fn single_year(subject: &'a str, year: i32, grid: &'a YearGrid) -> Self {
        Self {
            subject,
            start_year: year,
            end_year: year,
            years: std::slice::from_ref(grid),
        }
    }

    /// Number of years covered by the range.
    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    /// Validates the request against the year limit.
    ///
    /// # Errors
    ///
    /// [`ModelError::InvalidInput`] when there are no years, more than
    /// `max_years`, the range does not match the number of grids, or any
    /// grid violates [`YearGrid::validate`].
    pub fn validate(&self, max_years: usize) -> ModelResult<()> {
        if self.years.is_empty() {
            return Err(ModelError::invalid_input("activity data cannot be empty"));
        }
        if self.years.len() > max_years {
            return Err(ModelError::invalid_input(format!(
                "{} years requested, at most {max_years} supported",
                self.years.len()
            )));
        }
        if self.start_year > self.end_year {
            return Err(ModelError::invalid_input(format!(
                "start year {} is after end year {}",
                self.start_year, self.end_year
            )));
        }
        let span = i64::from(self.end_year) - i64::from(self.start_year) + 1;
        if span != self.years.len() as i64 {
            return Err(ModelError::invalid_input(format!(
                "range {}..={} covers {span} years but {} grids were supplied",
                self.start_year,
                self.end_year,
                self.years.len()
            )));
        }
        for (offset, grid) in (0i64..).zip(self.years) {
            let year = i64::from(self.start_year) + offset;
            grid.validate(&format!("year {year}"))?;
        }
        Ok(())
    }
}
