use std::collections::BTreeMap;

use super::model::{CourtMetrics, CourtRecord, LoanDataset, RiskRating};

// ---------------------------------------------------------------------------
// Guarded division
// ---------------------------------------------------------------------------

/// Divide, mapping a zero divisor to `f64::NAN` instead of panicking or
/// producing an infinity. The dashboards are display code; a row with no
/// judges should render as "no data", not crash the chart.
pub fn ratio(numerator: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        f64::NAN
    } else {
        numerator / divisor
    }
}

// ---------------------------------------------------------------------------
// Loan-portfolio aggregations
// ---------------------------------------------------------------------------

/// Group-count the records at `indices` by risk rating.
pub fn count_by_risk_rating(
    dataset: &LoanDataset,
    indices: &[usize],
) -> BTreeMap<RiskRating, usize> {
    let mut counts: BTreeMap<RiskRating, usize> = BTreeMap::new();
    for &i in indices {
        *counts.entry(dataset.records[i].risk_rating).or_default() += 1;
    }
    counts
}

/// Mean average balance per servicer over the records at `indices`.
///
/// Servicers come back in dataset order; servicers absent from the subset
/// are omitted rather than reported as zero.
pub fn average_balance_by_servicer(
    dataset: &LoanDataset,
    indices: &[usize],
) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        let entry = sums.entry(rec.servicer.as_str()).or_insert((0.0, 0));
        entry.0 += rec.average_balance;
        entry.1 += 1;
    }

    dataset
        .servicers
        .iter()
        .filter_map(|name| {
            sums.get(name.as_str())
                .map(|&(sum, n)| (name.clone(), ratio(sum, n as f64)))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Court metric derivation
// ---------------------------------------------------------------------------

/// Derive `cases_per_judge` and `resolution_rate` for each court row.
///
/// Pure function; the input is untouched. A row with `judges == 0` gets
/// `NAN` for `cases_per_judge`, and `cases_filed == 0` gets `NAN` for
/// `resolution_rate`. Other rows are unaffected by such a neighbour.
pub fn derive_court_metrics(records: &[CourtRecord]) -> Vec<CourtMetrics> {
    records
        .iter()
        .map(|rec| CourtMetrics {
            cases_per_judge: ratio(rec.cases_filed as f64, rec.judges as f64),
            resolution_rate: ratio(rec.cases_resolved as f64, rec.cases_filed as f64),
            record: rec.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
