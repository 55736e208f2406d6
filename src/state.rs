use crate::chart::build::loan_charts;
use crate::chart::spec::ChartSpec;
use crate::color::ColorMap;
use crate::data::filter::{init_filter_state, FilterState};
use crate::data::loader::loan_portfolio;
use crate::data::model::LoanDataset;

// ---------------------------------------------------------------------------
// Loan-dashboard application state
// ---------------------------------------------------------------------------

/// The full UI state of the loan dashboard, independent of rendering.
///
/// The dataset is read-only after construction; the only thing a user
/// action can change is the servicer selection, and every change rebuilds
/// all four chart specs from scratch.
pub struct AppState {
    /// The embedded portfolio table.
    pub dataset: LoanDataset,

    /// Currently selected servicers. Defaults to all of them.
    pub selected: FilterState,

    /// Per-servicer colours, fixed for the lifetime of the app.
    pub colors: ColorMap,

    /// The four chart specs for the current selection (cached).
    pub charts: Vec<ChartSpec>,
}

impl Default for AppState {
    fn default() -> Self {
        let dataset = loan_portfolio();
        let selected = init_filter_state(&dataset);
        let colors = ColorMap::new(&dataset.servicers);
        let charts = loan_charts(&dataset, &selected, &colors);
        Self {
            dataset,
            selected,
            colors,
            charts,
        }
    }
}

impl AppState {
    /// Rebuild all four chart specs after a selection change.
    pub fn refresh(&mut self) {
        self.charts = loan_charts(&self.dataset, &self.selected, &self.colors);
        log::debug!(
            "recomputed {} charts for {} selected servicer(s)",
            self.charts.len(),
            self.selected.len()
        );
    }

    /// Toggle a single servicer in the filter.
    pub fn toggle_servicer(&mut self, servicer: &str) {
        if !self.selected.remove(servicer) {
            self.selected.insert(servicer.to_string());
        }
        self.refresh();
    }

    /// Select every servicer.
    pub fn select_all(&mut self) {
        self.selected = init_filter_state(&self.dataset);
        self.refresh();
    }

    /// Clear the selection; all charts become empty.
    pub fn select_none(&mut self) {
        self.selected.clear();
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::ChartData;

    #[test]
    fn default_state_selects_everything() {
        let state = AppState::default();
        assert_eq!(state.selected.len(), state.dataset.servicers.len());
        assert_eq!(state.charts.len(), 4);
    }

    #[test]
    fn toggle_updates_charts_synchronously() {
        let mut state = AppState::default();
        state.select_none();
        state.toggle_servicer("ACS");

        let ChartData::Line(line) = &state.charts[0].data else {
            panic!("expected line chart");
        };
        assert_eq!(line.series.len(), 1);
        assert_eq!(line.series[0].name, "ACS");

        state.toggle_servicer("ACS");
        let ChartData::Line(line) = &state.charts[0].data else {
            panic!("expected line chart");
        };
        assert!(line.series.is_empty());
    }

    #[test]
    fn select_all_restores_full_dashboard() {
        let mut state = AppState::default();
        state.select_none();
        state.select_all();
        let ChartData::Bar(bar) = &state.charts[3].data else {
            panic!("expected bar chart");
        };
        assert_eq!(bar.bars.len(), 4);
    }
}
