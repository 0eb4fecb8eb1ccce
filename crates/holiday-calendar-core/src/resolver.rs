//! Single-date lookups against the day-info service.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::CalendarConfig;
use crate::http_client::{HttpClient, HttpRequest};
use crate::{CalendarDate, LookupError};

/// Resolves one date to a holiday flag with a single GET round trip.
#[derive(Clone)]
pub struct DayInfoResolver {
    http_client: Arc<dyn HttpClient>,
    config: CalendarConfig,
}

impl DayInfoResolver {
    pub fn new(http_client: Arc<dyn HttpClient>, config: CalendarConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// `true` when any event reported for `date` is flagged as a holiday.
    #[instrument(skip_all, fields(date = %date))]
    pub async fn resolve(&self, date: CalendarDate) -> Result<bool, LookupError> {
        let request = HttpRequest::get(self.config.day_info_url(date))
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms);

        debug!(url = %request.url, "requesting day info");

        let result = self.fetch(date, request).await;
        if let Err(error) = &result {
            warn!(kind = %error.kind(), error = %error.message(), "day info lookup failed");
        }
        result
    }

    async fn fetch(&self, date: CalendarDate, request: HttpRequest) -> Result<bool, LookupError> {
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|error| LookupError::transport(date, error.message()))?;

        if !response.is_success() {
            return Err(LookupError::status(date, response.status));
        }

        parse_day_info(date, &response.body)
    }
}

/// Reduce a day-info body to its holiday flag.
///
/// A `null` document or a missing, `null`, or empty `events` list means no holiday.
/// Anything that is not a JSON object is rejected.
pub fn parse_day_info(date: CalendarDate, body: &str) -> Result<bool, LookupError> {
    let document: Value = serde_json::from_str(body)
        .map_err(|e| LookupError::decode(date, format!("failed to parse day info: {e}")))?;

    let day_info = match document {
        Value::Null => return Ok(false),
        Value::Object(map) => DayInfo::deserialize(Value::Object(map))
            .map_err(|e| LookupError::decode(date, format!("unexpected day info shape: {e}")))?,
        other => {
            return Err(LookupError::decode(
                date,
                format!("day info must be a JSON object, got {}", json_type(&other)),
            ))
        }
    };

    Ok(day_info.is_holiday())
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// Kalendarium day-info response structures
#[derive(Debug, Clone, Deserialize)]
struct DayInfo {
    #[serde(default)]
    events: Option<Vec<EventInfo>>,
}

impl DayInfo {
    fn is_holiday(&self) -> bool {
        self.events
            .as_deref()
            .is_some_and(|events| events.iter().any(|event| event.holliday))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EventInfo {
    // Field name is spelled this way by the upstream API.
    #[serde(default)]
    holliday: bool,
}
