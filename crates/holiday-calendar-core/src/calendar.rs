//! Public holiday facade.
//!
//! Failures never reach the caller: a failed single-date lookup reads as
//! "not a holiday" and a failed range lookup reads as "no holidays".

use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use crate::config::CalendarConfig;
use crate::http_client::{HttpClient, ReqwestHttpClient};
use crate::range::{self, HolidaySet};
use crate::resolver::DayInfoResolver;
use crate::{CalendarDate, LookupError};

/// Blocking holiday queries exposed to hosting applications.
pub trait HolidayProvider {
    fn is_holiday(&self, date: CalendarDate) -> bool;

    fn holidays_between(&self, start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate>;
}

/// Holiday calendar backed by the remote day-info service.
#[derive(Clone)]
pub struct HolidayCalendar {
    resolver: DayInfoResolver,
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::new()
    }
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::with_config(CalendarConfig::default())
    }

    pub fn with_config(config: CalendarConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::with_http_client(http_client, config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: CalendarConfig) -> Self {
        Self {
            resolver: DayInfoResolver::new(http_client, config),
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        self.resolver.config()
    }

    /// Whether `date` is a holiday; `false` when the lookup fails.
    ///
    /// Blocks the calling thread. Inside a tokio runtime prefer
    /// [`HolidayCalendar::is_holiday_async`].
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        let outcome = run_blocking(date, self.resolver.resolve(date)).and_then(|result| result);
        collapse_single(outcome)
    }

    /// Holidays in `[start, end]`; empty when any lookup in the range fails.
    ///
    /// Blocks the calling thread. Inside a tokio runtime prefer
    /// [`HolidayCalendar::holidays_between_async`].
    pub fn holidays_between(&self, start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
        if start > end {
            return Vec::new();
        }

        let outcome = run_blocking(start, range::holidays_between(&self.resolver, start, end))
            .and_then(|result| result);
        collapse_range(outcome).into_vec()
    }

    pub async fn is_holiday_async(&self, date: CalendarDate) -> bool {
        collapse_single(self.resolver.resolve(date).await)
    }

    pub async fn holidays_between_async(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Vec<CalendarDate> {
        collapse_range(range::holidays_between(&self.resolver, start, end).await).into_vec()
    }
}

impl HolidayProvider for HolidayCalendar {
    fn is_holiday(&self, date: CalendarDate) -> bool {
        HolidayCalendar::is_holiday(self, date)
    }

    fn holidays_between(&self, start: CalendarDate, end: CalendarDate) -> Vec<CalendarDate> {
        HolidayCalendar::holidays_between(self, start, end)
    }
}

fn collapse_single(outcome: Result<bool, LookupError>) -> bool {
    outcome.unwrap_or_else(|error| {
        warn!(date = %error.date(), kind = %error.kind(), "treating failed lookup as not a holiday");
        false
    })
}

fn collapse_range(outcome: Result<HolidaySet, LookupError>) -> HolidaySet {
    outcome.unwrap_or_else(|error| {
        warn!(
            date = %error.date(),
            kind = %error.kind(),
            "range lookup aborted; discarding collected holidays"
        );
        HolidaySet::new()
    })
}

/// Drive `future` to completion on a runtime owned by this call.
///
/// A thread already inside a tokio runtime cannot block on a second one, so
/// the lookup moves to a scoped worker thread in that case.
fn run_blocking<F>(date: CalendarDate, future: F) -> Result<F::Output, LookupError>
where
    F: Future + Send,
    F::Output: Send,
{
    if tokio::runtime::Handle::try_current().is_err() {
        return block_on_owned_runtime(date, future);
    }

    std::thread::scope(|scope| {
        scope
            .spawn(move || block_on_owned_runtime(date, future))
            .join()
            .unwrap_or_else(|_| Err(LookupError::runtime(date, "lookup worker panicked")))
    })
}

fn block_on_owned_runtime<F>(date: CalendarDate, future: F) -> Result<F::Output, LookupError>
where
    F: Future,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LookupError::runtime(date, format!("failed to start runtime: {e}")))?;

    Ok(runtime.block_on(future))
}
