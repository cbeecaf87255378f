//! Per-status and per-operator totals for the daily entries report.

use std::collections::HashMap;

use contracts::domain::a002_pallet_product::UNASSIGNED_OPERATOR;
use contracts::domain::a003_pending_entry::PendingEntry;
use contracts::enums::PalletStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct StatusCount {
    pub status: PalletStatus,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorCount {
    pub operator: String,
    pub count: usize,
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntrySummary {
    pub total: usize,
    /// Every known stage in pipeline order (zeros included), then unknown codes.
    pub by_status: Vec<StatusCount>,
    /// Most pallets first; ties by name.
    pub by_operator: Vec<OperatorCount>,
    pub unassigned: usize,
    /// Net kilograms over entries that carry product data.
    pub total_weight: f64,
}

fn assigned_operator(entry: &PendingEntry) -> Option<&str> {
    entry
        .operator
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty() && *name != UNASSIGNED_OPERATOR)
}

pub fn summarize(entries: &[PendingEntry]) -> EntrySummary {
    let mut status_counts: HashMap<PalletStatus, usize> = HashMap::new();
    let mut operators: HashMap<String, (usize, f64)> = HashMap::new();
    let mut unassigned = 0;
    let mut total_weight = 0.0;

    for entry in entries {
        *status_counts.entry(entry.status).or_default() += 1;
        let weight = entry.product.as_ref().map(|p| p.peso_neto).unwrap_or(0.0);
        total_weight += weight;

        match assigned_operator(entry) {
            Some(name) => {
                let slot = operators.entry(name.to_string()).or_default();
                slot.0 += 1;
                slot.1 += weight;
            }
            None => unassigned += 1,
        }
    }

    let mut by_status: Vec<StatusCount> = PalletStatus::all()
        .into_iter()
        .map(|status| StatusCount {
            status,
            count: status_counts.get(&status).copied().unwrap_or(0),
        })
        .collect();
    let mut unknown: Vec<StatusCount> = status_counts
        .iter()
        .filter(|(status, _)| matches!(status, PalletStatus::Unknown(_)))
        .map(|(status, count)| StatusCount {
            status: *status,
            count: *count,
        })
        .collect();
    unknown.sort_by_key(|s| s.status.code());
    by_status.extend(unknown);

    let mut by_operator: Vec<OperatorCount> = operators
        .into_iter()
        .map(|(operator, (count, weight))| OperatorCount {
            operator,
            count,
            weight,
        })
        .collect();
    by_operator.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.operator.cmp(&b.operator))
    });

    EntrySummary {
        total: entries.len(),
        by_status,
        by_operator,
        unassigned,
        total_weight,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_pending_entry::TagProductInfo;

    fn entry(id: i64, status: i32, operator: Option<&str>, weight: f64) -> PendingEntry {
        PendingEntry {
            id,
            pallet_number: format!("T-{}", id),
            traceability: String::new(),
            status: PalletStatus::from(status),
            operator: operator.map(str::to_string),
            created_at: "2024-05-02T08:00:00".to_string(),
            product: Some(TagProductInfo {
                peso_neto: weight,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_empty_report_lists_every_stage() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.by_status.len(), 4);
        assert!(summary.by_status.iter().all(|s| s.count == 0));
        assert!(summary.by_operator.is_empty());
    }

    #[test]
    fn test_counts_per_status_and_operator() {
        let entries = vec![
            entry(1, 1, Some("Ana"), 100.0),
            entry(2, 1, Some("Luis"), 50.0),
            entry(3, 3, Some("Ana"), 25.5),
            entry(4, 4, None, 10.0),
            entry(5, 2, Some("Indefinido"), 0.0),
        ];
        let summary = summarize(&entries);

        assert_eq!(summary.total, 5);
        assert_eq!(summary.unassigned, 2);
        assert!((summary.total_weight - 185.5).abs() < 1e-9);

        let counts: Vec<usize> = summary.by_status.iter().map(|s| s.count).collect();
        assert_eq!(counts, vec![2, 1, 1, 1]);

        assert_eq!(summary.by_operator[0].operator, "Ana");
        assert_eq!(summary.by_operator[0].count, 2);
        assert!((summary.by_operator[0].weight - 125.5).abs() < 1e-9);
        assert_eq!(summary.by_operator[1].operator, "Luis");
    }

    #[test]
    fn test_unknown_codes_follow_known_stages() {
        let entries = vec![entry(1, 9, Some("Ana"), 0.0), entry(2, 7, Some("Ana"), 0.0)];
        let summary = summarize(&entries);
        assert_eq!(summary.by_status.len(), 6);
        assert_eq!(summary.by_status[4].status, PalletStatus::Unknown(7));
        assert_eq!(summary.by_status[5].status, PalletStatus::Unknown(9));
    }

    #[test]
    fn test_operator_ties_sorted_by_name() {
        let entries = vec![entry(1, 1, Some("Zoe"), 0.0), entry(2, 1, Some("Beto"), 0.0)];
        let names: Vec<String> = summarize(&entries)
            .by_operator
            .into_iter()
            .map(|o| o.operator)
            .collect();
        assert_eq!(names, vec!["Beto", "Zoe"]);
    }
}
