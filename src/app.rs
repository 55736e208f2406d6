use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation – loan dashboard
// ---------------------------------------------------------------------------

pub struct LoanDashboardApp {
    pub state: AppState,
}

impl Default for LoanDashboardApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for LoanDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: servicer filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: 2×2 chart grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = (ui.available_height() / 2.0 - 40.0).max(160.0);
            for row in self.state.charts.chunks(2) {
                ui.columns(row.len(), |cols| {
                    for (col, spec) in cols.iter_mut().zip(row) {
                        charts::chart_panel(col, spec, chart_height);
                    }
                });
            }
        });
    }
}
