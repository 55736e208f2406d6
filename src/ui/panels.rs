use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::data::filter::filter_by_servicer;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – servicer filter
// ---------------------------------------------------------------------------

/// Render the servicer filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    ui.strong(format!(
        "Servicer  ({}/{})",
        state.selected.len(),
        state.dataset.servicers.len()
    ));

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let servicers = state.dataset.servicers.clone();
            for servicer in &servicers {
                let mut checked = state.selected.contains(servicer);
                let text = RichText::new(servicer).color(state.colors.color_for(servicer));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_servicer(servicer);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the status bar above the charts.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.label(RichText::new("Student Loan Portfolio Dashboard").strong());

        ui.separator();

        let visible = filter_by_servicer(&state.dataset, &state.selected).len();
        ui.label(format!(
            "{} records loaded, {} visible",
            state.dataset.len(),
            visible
        ));
    });
}
