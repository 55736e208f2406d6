use super::model::{CourtRecord, LoanDataset, LoanRecord, Month, RiskRating};

// ---------------------------------------------------------------------------
// Embedded tables
// ---------------------------------------------------------------------------
//
// Both dashboards run over fixed sample tables compiled into the binary.
// There is no file or network ingestion; the tables are re-created on each
// run and never mutated afterwards.

/// Materialize the student-loan portfolio table: 2 months × 4 servicers.
pub fn loan_portfolio() -> LoanDataset {
    let rows: [(&str, Month, u32, f64, f64, RiskRating); 8] = [
        ("SLMA", Month::new(2023, 1), 10_000, 4.2, 32_000.0, RiskRating::Medium),
        ("Nelnet", Month::new(2023, 1), 8_500, 5.1, 31_000.0, RiskRating::High),
        ("ACS", Month::new(2023, 1), 6_000, 3.7, 29_500.0, RiskRating::Low),
        ("Great Lakes", Month::new(2023, 1), 9_200, 4.8, 30_000.0, RiskRating::Medium),
        ("SLMA", Month::new(2023, 2), 10_200, 4.0, 32_500.0, RiskRating::Medium),
        ("Nelnet", Month::new(2023, 2), 8_700, 5.3, 31_200.0, RiskRating::High),
        ("ACS", Month::new(2023, 2), 6_100, 3.6, 29_700.0, RiskRating::Low),
        ("Great Lakes", Month::new(2023, 2), 9_300, 4.7, 30_200.0, RiskRating::Medium),
    ];

    let records = rows
        .into_iter()
        .map(
            |(servicer, month, loan_count, delinquency_rate, average_balance, risk_rating)| {
                LoanRecord {
                    servicer: servicer.to_string(),
                    month,
                    loan_count,
                    delinquency_rate,
                    average_balance,
                    risk_rating,
                }
            },
        )
        .collect();

    LoanDataset::from_records(records)
}

/// Materialize the court-resource table: one row per county court.
pub fn court_table() -> Vec<CourtRecord> {
    let rows: [(&str, u32, u32, u32, u32, &str); 4] = [
        ("County A", 12, 40, 12_000, 11_000, "North"),
        ("County B", 8, 25, 8_500, 8_000, "South"),
        ("County C", 15, 55, 16_000, 15_500, "East"),
        ("County D", 10, 30, 11_000, 10_500, "West"),
    ];

    rows.into_iter()
        .map(
            |(court, judges, support_staff, cases_filed, cases_resolved, region)| CourtRecord {
                court: court.to_string(),
                judges,
                support_staff,
                cases_filed,
                cases_resolved,
                region: region.to_string(),
            },
        )
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn portfolio_shape() {
        let ds = loan_portfolio();
        assert_eq!(ds.len(), 8);
        assert_eq!(ds.servicers, ["SLMA", "Nelnet", "ACS", "Great Lakes"]);
        assert_eq!(ds.months, [Month::new(2023, 1), Month::new(2023, 2)]);
    }

    #[test]
    fn portfolio_order_is_table_order() {
        let ds = loan_portfolio();
        assert_eq!(ds.records[0].servicer, "SLMA");
        assert_eq!(ds.records[0].month, Month::new(2023, 1));
        assert_eq!(ds.records[7].servicer, "Great Lakes");
        assert_eq!(ds.records[7].month, Month::new(2023, 2));
    }

    #[test]
    fn court_table_shape() {
        let courts = court_table();
        assert_eq!(courts.len(), 4);
        let names: Vec<&str> = courts.iter().map(|c| c.court.as_str()).collect();
        assert_eq!(names, ["County A", "County B", "County C", "County D"]);
        assert_eq!(courts[2].judges, 15);
        assert_eq!(courts[2].support_staff, 55);
    }

    #[test]
    fn month_displays_iso_style() {
        assert_eq!(Month::new(2023, 1).to_string(), "2023-01");
    }
}
