//! This module implements `ShamsiError`.

use alloc::borrow::Cow;
use core::fmt;

/// `ErrorKind` maps to the available error kinds that a `ShamsiError`
/// may be raised with.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A generic error.
    #[default]
    Generic,
    /// A range error, raised when a date component falls outside its
    /// valid range.
    Range,
    /// A syntax error, raised when parsing a date string fails.
    Syntax,
    /// An assertion error for library invariants.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::Range => "RangeError",
            Self::Syntax => "SyntaxError",
            Self::Assert => "ImplementationError",
        })
    }
}

/// The error type of `shamsi_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShamsiError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl ShamsiError {
    #[inline]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a generic error.
    #[inline]
    #[must_use]
    pub const fn general(msg: &'static str) -> Self {
        Self {
            kind: ErrorKind::Generic,
            msg: Cow::Borrowed(msg),
        }
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub const fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates a syntax error.
    #[inline]
    #[must_use]
    pub const fn syntax() -> Self {
        Self::new(ErrorKind::Syntax)
    }

    /// Creates an assertion error for invariants that must hold inside
    /// the library.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Attaches a message to this error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the attached message, or an empty string if none was set.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for ShamsiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if !self.msg.is_empty() {
            write!(f, ": {}", self.msg)?;
        }
        Ok(())
    }
}

impl core::error::Error for ShamsiError {}
