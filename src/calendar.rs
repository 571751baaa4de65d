//! This module implements the Solar Hijri calendar rules.
//!
//! The Shamsi year is anchored to the March equinox: Nowruz (1
//! Farvardin) falls on the Gregorian March 20 or 21, and a year is leap
//! exactly when its final month, Esfand, runs to 30 days. Both facts
//! are resolved against `icu_calendar`'s Persian calendar, probing the
//! Gregorian days around the equinox and reading back the Persian
//! day-of-month.

use icu_calendar::{persian::Persian, Date as IcuDate};
use tinystr::{tinystr, TinyAsciiStr};

use crate::{date::ShamsiDate, iso::IsoDate, ShamsiError, ShamsiResult};

/// Month lengths of a common (non-leap) Shamsi year.
const COMMON_YEAR_MONTH_LENGTHS: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Day of Esfand that only exists in leap years.
const ESFAND_LEAP_DAY: u32 = 30;

/// The Solar Hijri (Shamsi/Jalali) calendar.
///
/// Every operation is a pure function of its arguments; the type only
/// exists as a namespace, mirroring the stateless calendar rules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Shamsi;

impl Shamsi {
    /// Returns whether the given Shamsi year is a leap year.
    ///
    /// A year is leap exactly when its Esfand has 30 days. The check
    /// probes the two Gregorian days preceding the next Nowruz
    /// (March 20 and 21 of year + 622); if either of them is the 30th
    /// day of its Shamsi month, that month is a 30-day Esfand.
    ///
    /// No validation is performed; years outside the range the backing
    /// calendar arithmetic supports degrade silently.
    pub fn is_leap_year(year: i32) -> bool {
        let gregorian_year = year.saturating_add(622);
        persian_day_of_month(gregorian_year, 3, 20) == Some(ESFAND_LEAP_DAY)
            || persian_day_of_month(gregorian_year, 3, 21) == Some(ESFAND_LEAP_DAY)
    }

    /// Returns the lengths of the twelve months of the given year,
    /// Farvardin first.
    ///
    /// The first six months have 31 days and the next five have 30;
    /// Esfand has 30 days in leap years and 29 otherwise.
    pub fn month_lengths(year: i32) -> [u8; 12] {
        let mut months = COMMON_YEAR_MONTH_LENGTHS;
        if Self::is_leap_year(year) {
            months[11] = ESFAND_LEAP_DAY as u8;
        }
        months
    }

    /// Returns the number of days in the given month of the given year.
    ///
    /// The caller is responsible for `month` being within `1..=12`;
    /// out-of-range months yield 0.
    pub fn days_in_month(year: i32, month: u8) -> u8 {
        match month {
            1..=6 => 31,
            7..=11 => 30,
            12 => Self::month_lengths(year)[11],
            _ => 0,
        }
    }

    /// Returns the number of days in the given year: 366 for leap years,
    /// 365 otherwise.
    pub fn days_in_year(year: i32) -> u16 {
        if Self::is_leap_year(year) {
            crate::DAYS_PER_LEAP_YEAR
        } else {
            crate::DAYS_PER_COMMON_YEAR
        }
    }

    /// Returns the one-based ordinal of a month/day within its year.
    ///
    /// The caller is responsible for the components being within their
    /// valid ranges; no validation is performed here. Bounds-checked
    /// conversion goes through [`Shamsi::to_gregorian`].
    pub fn day_of_year(year: i32, month: u8, day: u8) -> u16 {
        let months = Self::month_lengths(year);
        let elapsed = months
            .iter()
            .take(usize::from(month.saturating_sub(1)))
            .map(|length| u16::from(*length))
            .sum::<u16>();
        elapsed + u16::from(day)
    }

    /// Returns the Gregorian date of 1 Farvardin (Nowruz) of the given
    /// Shamsi year.
    ///
    /// The candidate date is March 21 of year + 621. When the Persian
    /// calendar places day 1 of Farvardin elsewhere, Nowruz fell one
    /// Gregorian day earlier and the candidate is moved back to
    /// March 20.
    pub fn first_gregorian_date(year: i32) -> IsoDate {
        let gregorian_year = year.saturating_add(621);
        let candidate = IsoDate::new_unchecked(gregorian_year, 3, 21);
        match persian_day_of_month(gregorian_year, 3, 21) {
            Some(1) => candidate,
            _ => {
                #[cfg(feature = "log")]
                log::debug!("Nowruz of {year} falls on March 20 of {gregorian_year}");
                candidate.add_days(-1)
            }
        }
    }

    /// Converts a Shamsi date to its Gregorian calendar date.
    ///
    /// This is the validating entry point: an error is returned when
    /// `month` is outside `1..=12` or `day` is outside the month's
    /// length for the given year. All other operations assume validated
    /// input.
    ///
    /// The conversion anchors on Nowruz of the given year and walks
    /// forward `day_of_year - 1` calendar days.
    pub fn to_gregorian(year: i32, month: u8, day: u8) -> ShamsiResult<IsoDate> {
        Ok(ShamsiDate::try_new(year, month, day)?.to_iso())
    }
}

/// Returns the Persian calendar day-of-month of a Gregorian date, or
/// `None` when the backing calendar cannot represent the date.
fn persian_day_of_month(year: i32, month: u8, day: u8) -> Option<u32> {
    let date = IcuDate::try_new_iso_date(year, month, day).ok()?;
    Some(date.to_calendar(Persian).day_of_month().0)
}

// ==== MonthCode ====

// MonthCode constants.
const MONTH_CODES: [TinyAsciiStr<4>; 12] = [
    tinystr!(4, "M01"),
    tinystr!(4, "M02"),
    tinystr!(4, "M03"),
    tinystr!(4, "M04"),
    tinystr!(4, "M05"),
    tinystr!(4, "M06"),
    tinystr!(4, "M07"),
    tinystr!(4, "M08"),
    tinystr!(4, "M09"),
    tinystr!(4, "M10"),
    tinystr!(4, "M11"),
    tinystr!(4, "M12"),
];

/// A Shamsi month code, `M01` (Farvardin) through `M12` (Esfand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCode(pub(crate) TinyAsciiStr<4>);

impl MonthCode {
    /// Returns the month code for a month known to be within `1..=12`.
    pub(crate) fn for_valid_month(month: u8) -> Self {
        debug_assert!((1..=12).contains(&month));
        Self(MONTH_CODES[usize::from(month - 1)])
    }

    /// Returns the month code for a one-based month number.
    pub fn try_from_month(month: u8) -> ShamsiResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ShamsiError::range().with_message("month not in a valid range."));
        }
        Ok(Self(MONTH_CODES[usize::from(month - 1)]))
    }

    /// Returns this month code as its one-based month number.
    pub fn to_month_integer(&self) -> u8 {
        // Month codes are constructed from `MONTH_CODES` only, so the
        // trailing two bytes are ASCII digits.
        let bytes = self.0.all_bytes();
        (bytes[1] - b'0') * 10 + (bytes[2] - b'0')
    }

    /// Returns this month code as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
