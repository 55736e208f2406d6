use std::fmt;

// ---------------------------------------------------------------------------
// RiskRating – categorical risk bucket for a loan segment
// ---------------------------------------------------------------------------

/// Coarse risk bucket assigned to a portfolio segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskRating {
    Low,
    Medium,
    High,
}

impl RiskRating {
    pub fn label(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
        }
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Month – calendar month, ordered chronologically
// ---------------------------------------------------------------------------

/// A calendar month. Displays as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    pub year: u16,
    pub month: u8,
}

impl Month {
    pub const fn new(year: u16, month: u8) -> Self {
        Month { year, month }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

// ---------------------------------------------------------------------------
// LoanRecord – one row of the portfolio table
// ---------------------------------------------------------------------------

/// One (servicer, month) segment of the student-loan portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanRecord {
    pub servicer: String,
    pub month: Month,
    pub loan_count: u32,
    /// Percentage of loans past due, e.g. `4.2` for 4.2 %.
    pub delinquency_rate: f64,
    /// Mean outstanding balance for the segment, in dollars.
    pub average_balance: f64,
    pub risk_rating: RiskRating,
}

// ---------------------------------------------------------------------------
// LoanDataset – the complete portfolio table
// ---------------------------------------------------------------------------

/// The full portfolio table with pre-computed category lists.
///
/// The record order is the table order from the source data and is preserved
/// by every downstream operation. The dataset is never mutated after
/// construction; filtering produces index subsets instead.
#[derive(Debug, Clone)]
pub struct LoanDataset {
    /// All records (rows), in table order.
    pub records: Vec<LoanRecord>,
    /// Distinct servicers in first-appearance order.
    pub servicers: Vec<String>,
    /// Distinct months in chronological order.
    pub months: Vec<Month>,
}

impl LoanDataset {
    /// Build category indices from the loaded records.
    pub fn from_records(records: Vec<LoanRecord>) -> Self {
        let mut servicers: Vec<String> = Vec::new();
        for rec in &records {
            if !servicers.contains(&rec.servicer) {
                servicers.push(rec.servicer.clone());
            }
        }

        let mut months: Vec<Month> = Vec::new();
        for rec in &records {
            if !months.contains(&rec.month) {
                months.push(rec.month);
            }
        }
        months.sort();

        LoanDataset {
            records,
            servicers,
            months,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Position of a month on the shared x-axis.
    pub fn month_index(&self, month: Month) -> Option<usize> {
        self.months.iter().position(|m| *m == month)
    }
}

// ---------------------------------------------------------------------------
// CourtRecord – one row of the court-resource table
// ---------------------------------------------------------------------------

/// Resource and caseload figures for one court.
#[derive(Debug, Clone, PartialEq)]
pub struct CourtRecord {
    pub court: String,
    pub judges: u32,
    pub support_staff: u32,
    pub cases_filed: u32,
    pub cases_resolved: u32,
    pub region: String,
}

// ---------------------------------------------------------------------------
// CourtMetrics – a court row with its derived columns
// ---------------------------------------------------------------------------

/// A [`CourtRecord`] together with the two derived workload metrics.
///
/// Both metrics are `f64::NAN` when their divisor is zero; see
/// [`crate::data::aggregate::derive_court_metrics`].
#[derive(Debug, Clone)]
pub struct CourtMetrics {
    pub record: CourtRecord,
    /// `cases_filed / judges`.
    pub cases_per_judge: f64,
    /// `cases_resolved / cases_filed`.
    pub resolution_rate: f64,
}
