use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::CalendarDate;

/// Validation errors raised while constructing domain values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("date must be formatted as YYYY-MM-DD: '{value}'")]
    InvalidDate { value: String },
    #[error("invalid calendar date components {year}-{month}-{day}")]
    InvalidDateComponents { year: i32, month: u8, day: u8 },
}

/// Cause of a failed holiday lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupErrorKind {
    /// The request never produced a response.
    Transport,
    /// The service answered with a non-2xx status.
    Status,
    /// The response body was not a decodable day-info document.
    Decode,
    /// The blocking executor could not be started.
    Runtime,
}

impl LookupErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Status => "status",
            Self::Decode => "decode",
            Self::Runtime => "runtime",
        }
    }
}

impl Display for LookupErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Remote lookup failure for a single date.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("holiday lookup for {date} failed ({kind}): {message}")]
pub struct LookupError {
    kind: LookupErrorKind,
    date: CalendarDate,
    message: String,
}

impl LookupError {
    pub fn new(kind: LookupErrorKind, date: CalendarDate, message: impl Into<String>) -> Self {
        Self {
            kind,
            date,
            message: message.into(),
        }
    }

    pub fn transport(date: CalendarDate, message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::Transport, date, message)
    }

    pub fn status(date: CalendarDate, status: u16) -> Self {
        Self::new(
            LookupErrorKind::Status,
            date,
            format!("day-info service returned status {status}"),
        )
    }

    pub fn decode(date: CalendarDate, message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::Decode, date, message)
    }

    pub fn runtime(date: CalendarDate, message: impl Into<String>) -> Self {
        Self::new(LookupErrorKind::Runtime, date, message)
    }

    pub const fn kind(&self) -> LookupErrorKind {
        self.kind
    }

    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
