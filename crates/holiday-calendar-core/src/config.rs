//! Connection settings for the day-info service.

use crate::CalendarDate;

/// Public Kalendarium endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.kalendarium.dk";

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Where and how day-info requests are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            user_agent: format!("holiday-calendar/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl CalendarConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// `<base>/Dayinfo/YYYY-MM-DD`
    pub fn day_info_url(&self, date: CalendarDate) -> String {
        format!("{}/Dayinfo/{}", self.base_url, date.format_iso())
    }
}
