use contracts::domain::a003_pending_entry::{DateRangeQuery, PendingEntry};
use contracts::enums::PalletStatus;
use leptos::prelude::*;

use crate::shared::date_utils::today_iso;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterMode {
    ByStatus,
    ByDateRange,
}

impl FilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::ByStatus => "status",
            FilterMode::ByDateRange => "range",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "range" => FilterMode::ByDateRange,
            _ => FilterMode::ByStatus,
        }
    }
}

/// What the table is currently showing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PalletQuery {
    Status(PalletStatus),
    Range(DateRangeQuery),
}

#[derive(Clone, Debug)]
pub struct PalletListState {
    pub items: Vec<PendingEntry>,
    pub mode: FilterMode,
    pub status: PalletStatus,
    pub date_from: String,
    pub date_to: String,
    pub is_loaded: bool,
}

impl Default for PalletListState {
    fn default() -> Self {
        let today = today_iso();
        Self {
            items: Vec::new(),
            mode: FilterMode::ByStatus,
            status: PalletStatus::Received,
            date_from: today.clone(),
            date_to: today,
            is_loaded: false,
        }
    }
}

impl PalletListState {
    pub fn query(&self) -> Result<PalletQuery, String> {
        match self.mode {
            FilterMode::ByStatus => Ok(PalletQuery::Status(self.status)),
            FilterMode::ByDateRange => {
                DateRangeQuery::parse(&self.date_from, &self.date_to).map(PalletQuery::Range)
            }
        }
    }
}

pub fn create_state() -> RwSignal<PalletListState> {
    RwSignal::new(PalletListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_query_by_status() {
        let state = PalletListState {
            status: PalletStatus::RegisteredInErp,
            ..Default::default()
        };
        assert_eq!(
            state.query(),
            Ok(PalletQuery::Status(PalletStatus::RegisteredInErp))
        );
    }

    #[test]
    fn test_query_by_range() {
        let state = PalletListState {
            mode: FilterMode::ByDateRange,
            date_from: "2024-05-01".into(),
            date_to: "2024-05-07".into(),
            ..Default::default()
        };
        match state.query() {
            Ok(PalletQuery::Range(range)) => {
                assert_eq!(range.from, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
                assert_eq!(range.to, NaiveDate::from_ymd_opt(2024, 5, 7).unwrap());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_query_rejects_empty_dates() {
        let state = PalletListState {
            mode: FilterMode::ByDateRange,
            date_from: String::new(),
            ..Default::default()
        };
        assert!(state.query().is_err());
    }

    #[test]
    fn test_filter_mode_roundtrip() {
        assert_eq!(FilterMode::from_value("range"), FilterMode::ByDateRange);
        assert_eq!(FilterMode::from_value("anything"), FilterMode::ByStatus);
        assert_eq!(FilterMode::ByDateRange.as_str(), "range");
    }
}
