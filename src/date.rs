//! This module implements `ShamsiDate`, the calendar-validated Solar
//! Hijri date value.

use core::fmt;
use core::str::FromStr;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{
    calendar::{MonthCode, Shamsi},
    iso::{write_padded_year, IsoDate},
    parsers::parse_shamsi_date,
    ShamsiError, ShamsiResult,
};

/// A validated Solar Hijri calendar date.
///
/// A `ShamsiDate` always holds a month within `1..=12` and a day within
/// the month's length for its year, so its conversion and accessor
/// methods are infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ShamsiDate {
    year: i32,
    month: u8,
    day: u8,
}

impl ShamsiDate {
    /// Creates a new `ShamsiDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `ShamsiDate`.
    ///
    /// Returns a range error when `month` is outside `1..=12` or `day`
    /// is outside the month's length for the given year.
    pub fn try_new(year: i32, month: u8, day: u8) -> ShamsiResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ShamsiError::range().with_message("month must be within a valid range."));
        }
        if day < 1 || day > Shamsi::days_in_month(year, month) {
            return Err(ShamsiError::range().with_message("day must be within a valid range."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the year.
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the one-based month, 1 = Farvardin through 12 = Esfand.
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month.
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the month code of this date's month.
    pub fn month_code(&self) -> MonthCode {
        MonthCode::for_valid_month(self.month)
    }

    /// Returns the one-based ordinal of this date within its year.
    pub fn day_of_year(&self) -> u16 {
        Shamsi::day_of_year(self.year, self.month, self.day)
    }

    /// Returns whether this date's year is a leap year.
    pub fn in_leap_year(&self) -> bool {
        Shamsi::is_leap_year(self.year)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        Shamsi::days_in_month(self.year, self.month)
    }

    /// Returns the number of days in this date's year.
    pub fn days_in_year(&self) -> u16 {
        Shamsi::days_in_year(self.year)
    }

    /// Converts this date to its Gregorian calendar date.
    ///
    /// The conversion anchors on Nowruz of this date's year and walks
    /// forward `day_of_year - 1` calendar days.
    pub fn to_iso(&self) -> IsoDate {
        Shamsi::first_gregorian_date(self.year)
            .add_days(i64::from(self.day_of_year()) - 1)
    }
}

impl FromStr for ShamsiDate {
    type Err = ShamsiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = parse_shamsi_date(s)?;
        Self::try_new(record.year, record.month, record.day)
    }
}

impl Writeable for ShamsiDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write_padded_year(self.year, sink)?;
        write!(sink, "-{:02}-{:02}", self.month, self.day)
    }
}

impl_display_with_writeable!(ShamsiDate);
