// Query filtering for generic records

use crate::record::Record;
use chrono::{NaiveDate, NaiveDateTime};

/// Comparison applied to one record field
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Case-insensitive substring containment. Needle stored lowercased.
    Contains(String),
    /// Exact string equality
    Equals(String),
    /// Inclusive calendar-day range against a date or timestamp field
    DateRange {
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    },
}

/// One field constraint
#[derive(Debug, Clone)]
pub struct Criterion {
    pub field: String,
    pub predicate: Predicate,
}

/// AND-combination of criteria. Empty, sentinel and all-`None` inputs never
/// become criteria, so an untouched search form yields the identity query.
#[derive(Debug, Clone, Default)]
pub struct Query {
    criteria: Vec<Criterion>,
}

/// Select value meaning "no constraint"
const ALL: &str = "all";

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring constraint. Empty needles are dropped.
    pub fn contains(mut self, field: &str, needle: &str) -> Self {
        if !needle.is_empty() {
            self.criteria.push(Criterion {
                field: field.to_string(),
                predicate: Predicate::Contains(needle.to_lowercase()),
            });
        }
        self
    }

    /// Exact-match constraint. Empty values and the `"all"` sentinel are
    /// dropped.
    pub fn equals(mut self, field: &str, value: &str) -> Self {
        if !value.is_empty() && value != ALL {
            self.criteria.push(Criterion {
                field: field.to_string(),
                predicate: Predicate::Equals(value.to_string()),
            });
        }
        self
    }

    /// Inclusive date-range constraint. Dropped when both bounds are absent.
    pub fn date_range(mut self, field: &str, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        if start.is_some() || end.is_some() {
            self.criteria.push(Criterion {
                field: field.to_string(),
                predicate: Predicate::DateRange { start, end },
            });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    /// True when the record satisfies every criterion
    pub fn matches<T: Record>(&self, record: &T) -> bool {
        self.criteria.iter().all(|c| {
            let value = record.field(&c.field);
            match &c.predicate {
                Predicate::Contains(needle) => value.is_some_and(|v| v.to_lowercase().contains(needle)),
                Predicate::Equals(want) => value.as_deref() == Some(want.as_str()),
                Predicate::DateRange { start, end } => {
                    // A record whose stored date string does not parse is
                    // excluded by any date-range criterion.
                    let Some(date) = value.as_deref().and_then(parse_date) else {
                        return false;
                    };
                    // Calendar-day comparison makes the end bound inclusive
                    // through 23:59:59 of that day.
                    start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e)
                }
            }
        })
    }

    /// Filtered subset in source order. Pure; the canonical collection is
    /// never touched.
    pub fn apply<T: Record>(&self, records: &[T]) -> Vec<T> {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

/// Parse a stored date field: bare `YYYY-MM-DD` or the store's
/// `YYYY-MM-DD HH:MM:SS` timestamp format.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}
