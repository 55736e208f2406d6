use eframe::egui::Color32;

use crate::color::ColorMap;
use crate::data::aggregate::{average_balance_by_servicer, count_by_risk_rating};
use crate::data::filter::{filter_by_servicer, FilterState};
use crate::data::model::{CourtMetrics, LoanDataset, RiskRating};

use super::spec::{
    BarChart, BarEntry, ChartData, ChartSpec, LineChart, PieChart, Series, Slice, Tile,
    TreemapChart, TreemapGroup, ValueLabels,
};

// ---------------------------------------------------------------------------
// Loan dashboard – four charts, recomputed per selection
// ---------------------------------------------------------------------------

/// Build the four loan-dashboard chart specs for a servicer selection.
///
/// Every call recomputes everything from the full dataset restricted to
/// `selected`; there is no cached intermediate state. An empty selection
/// produces four charts with no series, slices, or bars.
pub fn loan_charts(
    dataset: &LoanDataset,
    selected: &FilterState,
    colors: &ColorMap,
) -> Vec<ChartSpec> {
    let indices = filter_by_servicer(dataset, selected);

    vec![
        ChartSpec {
            id: "loan-count-trend",
            title: "Loan Count Trend".to_string(),
            data: ChartData::Line(trend_chart(dataset, &indices, colors, "Loan Count", |rec| {
                rec.loan_count as f64
            })),
        },
        ChartSpec {
            id: "delinquency-trend",
            title: "Delinquency Rate Trend (%)".to_string(),
            data: ChartData::Line(trend_chart(
                dataset,
                &indices,
                colors,
                "Delinquency Rate (%)",
                |rec| rec.delinquency_rate,
            )),
        },
        ChartSpec {
            id: "risk-rating-pie",
            title: "Risk Rating Distribution".to_string(),
            data: ChartData::Pie(risk_pie(dataset, &indices)),
        },
        ChartSpec {
            id: "avg-balance-bar",
            title: "Average Loan Balance by Servicer".to_string(),
            data: ChartData::Bar(balance_bars(dataset, &indices, colors)),
        },
    ]
}

/// One line series per servicer present in the subset, x = month position.
fn trend_chart(
    dataset: &LoanDataset,
    indices: &[usize],
    colors: &ColorMap,
    y_label: &str,
    metric: impl Fn(&crate::data::model::LoanRecord) -> f64,
) -> LineChart {
    let series = dataset
        .servicers
        .iter()
        .filter_map(|servicer| {
            let points: Vec<[f64; 2]> = indices
                .iter()
                .map(|&i| &dataset.records[i])
                .filter(|rec| &rec.servicer == servicer)
                .filter_map(|rec| {
                    dataset
                        .month_index(rec.month)
                        .map(|mi| [mi as f64, metric(rec)])
                })
                .collect();
            if points.is_empty() {
                return None;
            }
            Some(Series {
                name: servicer.clone(),
                color: colors.color_for(servicer),
                points,
            })
        })
        .collect();

    LineChart {
        x_labels: dataset.months.iter().map(|m| m.to_string()).collect(),
        y_label: y_label.to_string(),
        series,
    }
}

fn risk_pie(dataset: &LoanDataset, indices: &[usize]) -> PieChart {
    let counts = count_by_risk_rating(dataset, indices);
    PieChart {
        slices: counts
            .into_iter()
            .map(|(rating, count)| Slice {
                label: rating.to_string(),
                value: count as f64,
                color: risk_color(rating),
            })
            .collect(),
    }
}

fn balance_bars(dataset: &LoanDataset, indices: &[usize], colors: &ColorMap) -> BarChart {
    BarChart {
        y_label: "Average Balance ($)".to_string(),
        bars: average_balance_by_servicer(dataset, indices)
            .into_iter()
            .map(|(servicer, mean)| BarEntry {
                color: colors.color_for(&servicer),
                label: servicer,
                value: mean,
            })
            .collect(),
        value_labels: ValueLabels::None,
    }
}

/// Semantic colours for risk buckets; green/amber/red reads better here
/// than positional palette hues.
fn risk_color(rating: RiskRating) -> Color32 {
    match rating {
        RiskRating::Low => Color32::from_rgb(0x4c, 0xaf, 0x50),
        RiskRating::Medium => Color32::from_rgb(0xff, 0xb3, 0x00),
        RiskRating::High => Color32::from_rgb(0xe5, 0x39, 0x35),
    }
}

// ---------------------------------------------------------------------------
// Court dashboard – three static charts
// ---------------------------------------------------------------------------

/// Build the three court-dashboard chart specs. Called once at startup;
/// the court dashboard has no interactive state.
pub fn court_charts(metrics: &[CourtMetrics]) -> Vec<ChartSpec> {
    let courts: Vec<&str> = metrics.iter().map(|m| m.record.court.as_str()).collect();
    let court_colors = ColorMap::new(&courts);

    let mut regions: Vec<&str> = Vec::new();
    for m in metrics {
        if !regions.contains(&m.record.region.as_str()) {
            regions.push(m.record.region.as_str());
        }
    }
    let region_colors = ColorMap::new(&regions);

    vec![
        ChartSpec {
            id: "cases-per-judge-bar",
            title: "Workload Per Judge by Court".to_string(),
            data: ChartData::Bar(BarChart {
                y_label: "Cases Per Judge".to_string(),
                bars: metrics
                    .iter()
                    .map(|m| BarEntry {
                        label: m.record.court.clone(),
                        value: m.cases_per_judge,
                        color: court_colors.color_for(&m.record.court),
                    })
                    .collect(),
                value_labels: ValueLabels::None,
            }),
        },
        ChartSpec {
            id: "resolution-rate-bar",
            title: "Resolution Rate by Court".to_string(),
            data: ChartData::Bar(BarChart {
                y_label: "Resolution Rate".to_string(),
                bars: metrics
                    .iter()
                    .map(|m| BarEntry {
                        label: m.record.court.clone(),
                        value: m.resolution_rate,
                        color: court_colors.color_for(&m.record.court),
                    })
                    .collect(),
                value_labels: ValueLabels::Percent,
            }),
        },
        ChartSpec {
            id: "staff-treemap",
            title: "Support Staff Allocation by Region and Court".to_string(),
            data: ChartData::Treemap(staff_treemap(metrics, &region_colors)),
        },
    ]
}

/// Region → court treemap weighted by support staff.
fn staff_treemap(metrics: &[CourtMetrics], region_colors: &ColorMap) -> TreemapChart {
    let mut groups: Vec<TreemapGroup> = Vec::new();
    for m in metrics {
        let region = &m.record.region;
        let tile = Tile {
            label: m.record.court.clone(),
            weight: m.record.support_staff as f64,
        };
        match groups.iter_mut().find(|g| &g.label == region) {
            Some(group) => group.tiles.push(tile),
            None => groups.push(TreemapGroup {
                label: region.clone(),
                color: region_colors.color_for(region),
                tiles: vec![tile],
            }),
        }
    }
    TreemapChart { groups }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::aggregate::derive_court_metrics;
    use crate::data::filter::init_filter_state;
    use crate::data::loader::{court_table, loan_portfolio};

    fn full_loan_charts() -> (LoanDataset, Vec<ChartSpec>) {
        let ds = loan_portfolio();
        let colors = ColorMap::new(&ds.servicers);
        let charts = loan_charts(&ds, &init_filter_state(&ds), &colors);
        (ds, charts)
    }

    #[test]
    fn loan_dashboard_has_four_charts_with_source_titles() {
        let (_, charts) = full_loan_charts();
        let titles: Vec<&str> = charts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Loan Count Trend",
                "Delinquency Rate Trend (%)",
                "Risk Rating Distribution",
                "Average Loan Balance by Servicer",
            ]
        );
    }

    #[test]
    fn trend_charts_carry_one_series_per_servicer() {
        let (ds, charts) = full_loan_charts();
        for spec in &charts[..2] {
            let ChartData::Line(line) = &spec.data else {
                panic!("{} should be a line chart", spec.id);
            };
            assert_eq!(line.x_labels, ["2023-01", "2023-02"]);
            assert_eq!(line.series.len(), ds.servicers.len());
            for s in &line.series {
                assert_eq!(s.points.len(), 2);
                assert_eq!(s.points[0][0], 0.0);
                assert_eq!(s.points[1][0], 1.0);
            }
        }
    }

    #[test]
    fn pie_reflects_risk_counts() {
        let (_, charts) = full_loan_charts();
        let ChartData::Pie(pie) = &charts[2].data else {
            panic!("expected pie");
        };
        let mut slices: Vec<(&str, f64)> = pie
            .slices
            .iter()
            .map(|s| (s.label.as_str(), s.value))
            .collect();
        slices.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(slices, [("High", 2.0), ("Low", 2.0), ("Medium", 4.0)]);
        assert_eq!(pie.total(), 8.0);
    }

    #[test]
    fn selection_restricts_every_chart() {
        let ds = loan_portfolio();
        let colors = ColorMap::new(&ds.servicers);
        let selected: FilterState = ["SLMA".to_string()].into_iter().collect();
        let charts = loan_charts(&ds, &selected, &colors);

        let ChartData::Line(line) = &charts[0].data else {
            panic!("expected line");
        };
        assert_eq!(line.series.len(), 1);
        assert_eq!(line.series[0].name, "SLMA");
        assert_eq!(line.series[0].points, [[0.0, 10_000.0], [1.0, 10_200.0]]);

        let ChartData::Pie(pie) = &charts[2].data else {
            panic!("expected pie");
        };
        assert_eq!(pie.slices.len(), 1);
        assert_eq!(pie.slices[0].label, "Medium");

        let ChartData::Bar(bar) = &charts[3].data else {
            panic!("expected bar");
        };
        assert_eq!(bar.bars.len(), 1);
        assert!((bar.bars[0].value - 32_250.0).abs() < 1e-9);
    }

    #[test]
    fn empty_selection_yields_empty_charts_without_error() {
        let ds = loan_portfolio();
        let colors = ColorMap::new(&ds.servicers);
        let charts = loan_charts(&ds, &FilterState::new(), &colors);
        assert_eq!(charts.len(), 4);
        for spec in &charts {
            match &spec.data {
                ChartData::Line(l) => assert!(l.series.is_empty()),
                ChartData::Pie(p) => assert!(p.slices.is_empty()),
                ChartData::Bar(b) => assert!(b.bars.is_empty()),
                ChartData::Treemap(_) => panic!("no treemap on the loan dashboard"),
            }
        }
    }

    #[test]
    fn rebuilding_charts_is_pure() {
        let ds = loan_portfolio();
        let colors = ColorMap::new(&ds.servicers);
        let sel = init_filter_state(&ds);
        let a = loan_charts(&ds, &sel, &colors);
        let b = loan_charts(&ds, &sel, &colors);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.title, y.title);
        }
    }

    #[test]
    fn court_dashboard_has_three_charts_with_source_titles() {
        let charts = court_charts(&derive_court_metrics(&court_table()));
        let titles: Vec<&str> = charts.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Workload Per Judge by Court",
                "Resolution Rate by Court",
                "Support Staff Allocation by Region and Court",
            ]
        );
    }

    #[test]
    fn resolution_chart_prints_percent_labels() {
        let charts = court_charts(&derive_court_metrics(&court_table()));
        let ChartData::Bar(bar) = &charts[1].data else {
            panic!("expected bar");
        };
        assert_eq!(bar.value_labels, ValueLabels::Percent);
        assert_eq!(
            bar.value_labels.format(bar.bars[0].value).as_deref(),
            Some("91.67%")
        );
    }

    #[test]
    fn treemap_groups_courts_under_their_region() {
        let charts = court_charts(&derive_court_metrics(&court_table()));
        let ChartData::Treemap(tm) = &charts[2].data else {
            panic!("expected treemap");
        };
        let labels: Vec<&str> = tm.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["North", "South", "East", "West"]);
        assert!(tm.groups.iter().all(|g| g.tiles.len() == 1));
        assert_eq!(tm.groups[2].tiles[0].label, "County C");
        assert_eq!(tm.groups[2].tiles[0].weight, 55.0);
    }
}
