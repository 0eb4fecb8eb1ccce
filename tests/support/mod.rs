//! Scripted day-info service shared by the behavior tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use holiday_calendar_core::{
    CalendarConfig, CalendarDate, HolidayCalendar, HttpClient, HttpError, HttpRequest,
    HttpResponse,
};

pub const BASE_URL: &str = "http://kalendarium.test";

/// How the scripted service misbehaves for a given day.
#[derive(Debug, Clone)]
pub enum Fault {
    Transport,
    Status(u16),
    Body(&'static str),
}

/// Answers `/Dayinfo/<date>` from a fixed script and records every URL it sees.
#[derive(Default)]
pub struct ScriptedDayInfoService {
    holidays: BTreeSet<String>,
    faults: BTreeMap<String, Fault>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedDayInfoService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holiday(mut self, date: &str) -> Self {
        self.holidays.insert(date.to_owned());
        self
    }

    pub fn with_fault(mut self, date: &str, fault: Fault) -> Self {
        self.faults.insert(date.to_owned(), fault);
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }

    pub fn requested_dates(&self) -> Vec<String> {
        self.requested_urls()
            .iter()
            .filter_map(|url| url.rsplit("/Dayinfo/").next().map(str::to_owned))
            .collect()
    }

    fn answer(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let date = url.rsplit("/Dayinfo/").next().unwrap_or_default();

        match self.faults.get(date) {
            Some(Fault::Transport) => Err(HttpError::new("connection refused")),
            Some(Fault::Status(status)) => Ok(HttpResponse::new(*status, "upstream error")),
            Some(Fault::Body(body)) => Ok(HttpResponse::ok_json(*body)),
            None if self.holidays.contains(date) => Ok(HttpResponse::ok_json(format!(
                r#"{{"date":"{date}","events":[{{"holliday":false,"danishShort":"Flagdag"}},{{"holliday":true,"danishShort":"Helligdag"}}]}}"#
            ))),
            None => Ok(HttpResponse::ok_json(format!(
                r#"{{"date":"{date}","events":[]}}"#
            ))),
        }
    }
}

impl HttpClient for ScriptedDayInfoService {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request.url.clone());
        let response = self.answer(&request.url);
        Box::pin(async move { response })
    }
}

pub fn calendar_for(service: &Arc<ScriptedDayInfoService>) -> HolidayCalendar {
    HolidayCalendar::with_http_client(
        service.clone(),
        CalendarConfig::default().with_base_url(BASE_URL),
    )
}

pub fn day(value: &str) -> CalendarDate {
    CalendarDate::parse(value).expect("valid date")
}

pub fn iso(dates: &[CalendarDate]) -> Vec<String> {
    dates.iter().map(|date| date.format_iso()).collect()
}
