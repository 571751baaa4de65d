//! The `shamsi_rs` crate implements Solar Hijri (Shamsi/Jalali) calendar
//! arithmetic and conversion to the proleptic Gregorian calendar.
//!
//! ```rust
//! use shamsi_rs::{Shamsi, ShamsiDate};
//!
//! // 1 Farvardin 1404 (Nowruz) falls on 2025-03-21.
//! let date = ShamsiDate::try_new(1404, 1, 1).unwrap();
//! assert_eq!(date.to_iso().to_string(), "2025-03-21");
//!
//! // 1403 is a leap year, so Esfand has 30 days.
//! assert!(Shamsi::is_leap_year(1403));
//! assert_eq!(Shamsi::month_lengths(1403)[11], 30);
//! ```
//!
//! The Solar Hijri year is anchored to the March equinox: 1 Farvardin
//! (Nowruz) falls on the Gregorian March 20 or 21, and a year is leap
//! exactly when its final month, Esfand, has 30 days. `shamsi_rs`
//! resolves both questions through [`icu_calendar`]'s deterministic
//! Persian calendar arithmetic.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod iso;
pub mod parsers;
pub mod primitive;

mod calendar;
mod date;

#[doc(hidden)]
pub(crate) mod utils;

#[doc(inline)]
pub use error::ShamsiError;

/// The `shamsi_rs` result type.
pub type ShamsiResult<T> = Result<T, ShamsiError>;

pub use crate::{
    calendar::{MonthCode, Shamsi},
    date::ShamsiDate,
    iso::IsoDate,
};

/// Number of months in a Shamsi year.
pub const MONTHS_PER_YEAR: u8 = 12;
/// Number of days in a common (non-leap) Shamsi year.
pub const DAYS_PER_COMMON_YEAR: u16 = 365;
/// Number of days in a leap Shamsi year.
pub const DAYS_PER_LEAP_YEAR: u16 = 366;
