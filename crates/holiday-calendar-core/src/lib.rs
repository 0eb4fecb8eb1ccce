//! # Holiday Calendar Core
//!
//! Public holiday lookups backed by the Kalendarium day-info API.
//!
//! ## Overview
//!
//! - **Single-date lookups** reduce a day's event list to a holiday flag
//! - **Range lookups** walk an inclusive date interval one day at a time
//! - **Safe defaults** at the public boundary: a failed lookup reads as
//!   "not a holiday", a failed range reads as "no holidays"
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`calendar`] | Blocking and async facade |
//! | [`config`] | Service endpoint and timeout settings |
//! | [`date`] | Calendar date newtype |
//! | [`error`] | Validation and lookup errors |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`range`] | Date-range enumeration |
//! | [`resolver`] | Single-date resolver and response decoding |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use holiday_calendar_core::{CalendarDate, HolidayCalendar};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let calendar = HolidayCalendar::new();
//!
//!     let christmas = CalendarDate::parse("2024-12-25")?;
//!     println!("holiday: {}", calendar.is_holiday(christmas));
//!
//!     let start = CalendarDate::parse("2024-12-20")?;
//!     let end = CalendarDate::parse("2024-12-31")?;
//!     for date in calendar.holidays_between(start, end) {
//!         println!("{date}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Internal calls return [`LookupError`], classified by [`LookupErrorKind`].
//! The facade logs the kind through `tracing` and then applies the default:
//!
//! ```rust
//! use holiday_calendar_core::{LookupError, LookupErrorKind};
//!
//! fn describe(error: &LookupError) -> &'static str {
//!     match error.kind() {
//!         LookupErrorKind::Transport => "service unreachable",
//!         LookupErrorKind::Status => "service rejected the request",
//!         LookupErrorKind::Decode => "unreadable response",
//!         LookupErrorKind::Runtime => "executor unavailable",
//!     }
//! }
//! ```

pub mod calendar;
pub mod config;
pub mod date;
pub mod error;
pub mod http_client;
pub mod range;
pub mod resolver;

pub use calendar::{HolidayCalendar, HolidayProvider};
pub use config::{CalendarConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use date::CalendarDate;
pub use error::{LookupError, LookupErrorKind, ValidationError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use range::{holidays_between, HolidaySet};
pub use resolver::{parse_day_info, DayInfoResolver};
