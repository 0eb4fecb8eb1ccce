//! Inclusive date-range holiday enumeration.

use tracing::{debug, instrument};

use crate::resolver::DayInfoResolver;
use crate::{CalendarDate, LookupError};

/// Ascending, duplicate-free holidays found in one range query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    dates: Vec<CalendarDate>,
}

impl HolidaySet {
    pub fn new() -> Self {
        Self::default()
    }

    // Callers push in strictly ascending order.
    fn push(&mut self, date: CalendarDate) {
        debug_assert!(self.dates.last().is_none_or(|last| *last < date));
        self.dates.push(date);
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: CalendarDate) -> bool {
        self.dates.binary_search(&date).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalendarDate> {
        self.dates.iter()
    }

    pub fn as_slice(&self) -> &[CalendarDate] {
        &self.dates
    }

    pub fn into_vec(self) -> Vec<CalendarDate> {
        self.dates
    }
}

impl IntoIterator for HolidaySet {
    type Item = CalendarDate;
    type IntoIter = std::vec::IntoIter<CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.into_iter()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a CalendarDate;
    type IntoIter = std::slice::Iter<'a, CalendarDate>;

    fn into_iter(self) -> Self::IntoIter {
        self.dates.iter()
    }
}

/// Visit every day in `[start, end]`, one lookup at a time, in ascending order.
///
/// The first failed lookup ends the walk and is returned; holidays gathered
/// before it are dropped with the partial set.
#[instrument(skip_all, fields(start = %start, end = %end))]
pub async fn holidays_between(
    resolver: &DayInfoResolver,
    start: CalendarDate,
    end: CalendarDate,
) -> Result<HolidaySet, LookupError> {
    let mut holidays = HolidaySet::new();
    let mut cursor = Some(start);
    let mut visited = 0_usize;

    while let Some(day) = cursor.filter(|day| *day <= end) {
        if resolver.resolve(day).await? {
            holidays.push(day);
        }
        visited += 1;
        cursor = day.next_day();
    }

    debug!(days = visited, holidays = holidays.len(), "range lookup complete");
    Ok(holidays)
}
