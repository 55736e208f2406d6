use eframe::egui;

use deskboard::chart::spec::ChartSpec;
use deskboard::data::aggregate::derive_court_metrics;
use deskboard::data::loader::court_table;
use deskboard::ui::charts;

// ---------------------------------------------------------------------------
// Court dashboard – three static charts, no interactivity
// ---------------------------------------------------------------------------

struct CourtDashboardApp {
    charts: Vec<ChartSpec>,
}

impl CourtDashboardApp {
    fn new() -> Self {
        let metrics = derive_court_metrics(&court_table());
        log::info!("derived metrics for {} courts", metrics.len());
        Self {
            charts: deskboard::chart::build::court_charts(&metrics),
        }
    }
}

impl eframe::App for CourtDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.heading("Court Resource Allocation Dashboard");
                    ui.separator();
                    for spec in &self.charts {
                        charts::chart_panel(ui, spec, 280.0);
                        ui.add_space(12.0);
                    }
                });
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 1000.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Court Resource Allocation Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(CourtDashboardApp::new()))),
    )
}
