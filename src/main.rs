use deskboard::app::LoanDashboardApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Student Loan Portfolio Dashboard",
        options,
        Box::new(|_cc| {
            let app = LoanDashboardApp::default();
            log::info!(
                "loaded portfolio: {} records, servicers {:?}",
                app.state.dataset.len(),
                app.state.dataset.servicers
            );
            Ok(Box::new(app))
        }),
    )
}
