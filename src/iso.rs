//! This module implements the proleptic Gregorian date record.
//!
//! An `IsoDate` represents a Gregorian calendar date as its year, month,
//! and day components. It is the output type of the Shamsi conversion
//! operations and carries the epoch-day arithmetic those operations are
//! built on.

use core::fmt;

use writeable::{impl_display_with_writeable, Writeable};

use crate::{utils, ShamsiError, ShamsiResult};

/// `IsoDate` serves as a record of a proleptic Gregorian calendar date.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    /// Creates a new `IsoDate` without determining the validity.
    pub(crate) const fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a new validated `IsoDate`.
    pub fn try_new(year: i32, month: u8, day: u8) -> ShamsiResult<Self> {
        if !is_valid_date(year, i32::from(month), i32::from(day)) {
            return Err(ShamsiError::range().with_message("not a valid ISO date."));
        }
        Ok(Self::new_unchecked(year, month, day))
    }

    /// Returns the number of days between this date and 1970-01-01.
    #[inline]
    pub fn to_epoch_days(self) -> i64 {
        iso_date_to_epoch_days(self.year, i32::from(self.month) - 1, i64::from(self.day))
    }

    /// Returns the `IsoDate` that lies the given number of days after
    /// 1970-01-01.
    pub fn from_epoch_days(days: i64) -> Self {
        Self::new_unchecked(
            utils::epoch_days_to_year(days),
            utils::epoch_days_to_month_in_year(days) + 1,
            utils::epoch_days_to_date(days),
        )
    }

    /// Returns the date the given number of calendar days away from this
    /// date, carrying across month and year boundaries.
    #[inline]
    #[must_use]
    pub fn add_days(self, days: i64) -> Self {
        Self::from_epoch_days(self.to_epoch_days() + days)
    }

    /// Returns the number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        utils::iso_days_in_month(self.year, i32::from(self.month)) as u8
    }
}

impl Writeable for IsoDate {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        write_padded_year(self.year, sink)?;
        write!(sink, "-{:02}-{:02}", self.month, self.day)
    }
}

impl_display_with_writeable!(IsoDate);

/// Writes a year as four digits, or sign-prefixed six digits outside
/// 0000..=9999.
pub(crate) fn write_padded_year<W: fmt::Write + ?Sized>(year: i32, sink: &mut W) -> fmt::Result {
    if (0..=9999).contains(&year) {
        write!(sink, "{year:04}")
    } else {
        write!(sink, "{year:+07}")
    }
}

// ==== `IsoDate` specific utility functions ====

/// Returns the epoch days based off the given year, month, and day.
///
/// NOTE: Month should be in a range of 0-11
#[inline]
fn iso_date_to_epoch_days(year: i32, month: i32, day: i64) -> i64 {
    let resolved_year = year + month.div_euclid(12);
    let resolved_month = month.rem_euclid(12);

    utils::epoch_day_number_for_year(resolved_year)
        + utils::day_count_before_month(resolved_month, resolved_year)
        + day
        - 1
}

// Determines if the month and day are valid for the given year.
#[inline]
fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    (1..=utils::iso_days_in_month(year, month)).contains(&i64::from(day))
}

#[cfg(test)]
mod tests {
    use super::IsoDate;
    use alloc::string::ToString;

    #[test]
    fn epoch_day_round_trip() {
        let tests = [
            (1970, 1, 1, 0),
            (1970, 1, 2, 1),
            (1969, 12, 31, -1),
            (2000, 1, 1, 10957),
            (2000, 3, 1, 11017),
            (2024, 2, 29, 19782),
            (2025, 3, 21, 20168),
            (1600, 2, 29, -135081),
        ];
        for (year, month, day, days) in tests {
            let date = IsoDate::new_unchecked(year, month, day);
            assert_eq!(date.to_epoch_days(), days, "{year}-{month}-{day}");
            assert_eq!(IsoDate::from_epoch_days(days), date, "{year}-{month}-{day}");
        }
    }

    #[test]
    fn add_days_carries_over_boundaries() {
        let date = IsoDate::new_unchecked(2024, 2, 28);
        assert_eq!(date.add_days(1), IsoDate::new_unchecked(2024, 2, 29));
        assert_eq!(date.add_days(2), IsoDate::new_unchecked(2024, 3, 1));

        let date = IsoDate::new_unchecked(2025, 12, 31);
        assert_eq!(date.add_days(1), IsoDate::new_unchecked(2026, 1, 1));
        assert_eq!(date.add_days(-365), IsoDate::new_unchecked(2024, 12, 31));
    }

    #[test]
    fn days_in_month_tracks_leap_years() {
        assert_eq!(IsoDate::new_unchecked(2024, 2, 1).days_in_month(), 29);
        assert_eq!(IsoDate::new_unchecked(2025, 2, 1).days_in_month(), 28);
        assert_eq!(IsoDate::new_unchecked(1900, 2, 1).days_in_month(), 28);
        assert_eq!(IsoDate::new_unchecked(2000, 2, 1).days_in_month(), 29);
        assert_eq!(IsoDate::new_unchecked(2025, 3, 1).days_in_month(), 31);
        assert_eq!(IsoDate::new_unchecked(2025, 4, 1).days_in_month(), 30);
    }

    #[test]
    fn try_new_rejects_invalid_components() {
        assert!(IsoDate::try_new(2025, 0, 1).is_err());
        assert!(IsoDate::try_new(2025, 13, 1).is_err());
        assert!(IsoDate::try_new(2025, 2, 29).is_err());
        assert!(IsoDate::try_new(2024, 2, 29).is_ok());
    }

    #[test]
    fn display_pads_components() {
        assert_eq!(IsoDate::new_unchecked(2025, 3, 4).to_string(), "2025-03-04");
        assert_eq!(IsoDate::new_unchecked(33, 1, 1).to_string(), "0033-01-01");
        assert_eq!(
            IsoDate::new_unchecked(-3000, 12, 31).to_string(),
            "-003000-12-31"
        );
    }
}
