use std::f32::consts::TAU;

use eframe::egui::{
    Align2, Color32, CornerRadius, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, StrokeKind,
    Ui, Vec2,
};
use egui_plot::{Bar, BarChart as PlotBarChart, Legend, Line, Plot, PlotPoint, PlotPoints, Text};

use crate::chart::spec::{BarChart, ChartData, ChartSpec, LineChart, PieChart, TreemapChart};
use crate::chart::treemap;

// ---------------------------------------------------------------------------
// Chart panel dispatch
// ---------------------------------------------------------------------------

/// Render one chart spec: title heading plus the chart body.
pub fn chart_panel(ui: &mut Ui, spec: &ChartSpec, height: f32) {
    ui.vertical(|ui: &mut Ui| {
        ui.strong(&spec.title);
        match &spec.data {
            ChartData::Line(line) => line_chart(ui, spec.id, line, height),
            ChartData::Bar(bar) => bar_chart(ui, spec.id, bar, height),
            ChartData::Pie(pie) => pie_chart(ui, pie, height),
            ChartData::Treemap(tm) => treemap_chart(ui, tm, height),
        }
    });
}

// ---------------------------------------------------------------------------
// Line chart (egui_plot)
// ---------------------------------------------------------------------------

fn line_chart(ui: &mut Ui, id: &str, chart: &LineChart, height: f32) {
    let labels = chart.x_labels.clone();

    Plot::new(id)
        .height(height)
        .legend(Legend::default())
        .y_axis_label(&chart.y_label)
        .x_axis_formatter(move |mark, _range| {
            // Only the integer marks carry a month label.
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for series in &chart.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.line(
                    Line::new(points)
                        .name(&series.name)
                        .color(series.color)
                        .width(1.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Bar chart (egui_plot)
// ---------------------------------------------------------------------------

fn bar_chart(ui: &mut Ui, id: &str, chart: &BarChart, height: f32) {
    let labels: Vec<String> = chart.bars.iter().map(|b| b.label.clone()).collect();

    // NAN is the "no data" sentinel; such bars are simply not drawn.
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .filter(|(_, b)| !b.value.is_nan())
        .map(|(i, b)| {
            Bar::new(i as f64, b.value)
                .name(&b.label)
                .fill(b.color)
                .width(0.6)
        })
        .collect();

    let max_value = chart
        .bars
        .iter()
        .map(|b| b.value)
        .filter(|v| !v.is_nan())
        .fold(0.0_f64, f64::max);

    // Value labels float a little above their bar.
    let texts: Vec<(f64, f64, String)> = chart
        .bars
        .iter()
        .enumerate()
        .filter_map(|(i, b)| {
            chart
                .value_labels
                .format(b.value)
                .map(|text| (i as f64, b.value + max_value * 0.03, text))
        })
        .collect();

    Plot::new(id)
        .height(height)
        .y_axis_label(&chart.y_label)
        .include_y(max_value * 1.1)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-6 || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(PlotBarChart::new(bars));
            for (x, y, text) in &texts {
                plot_ui.text(
                    Text::new(PlotPoint::new(*x, *y), RichText::new(text.as_str()).size(12.0))
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Pie chart (painter)
// ---------------------------------------------------------------------------

fn pie_chart(ui: &mut Ui, chart: &PieChart, height: f32) {
    let total = chart.total();

    ui.horizontal(|ui: &mut Ui| {
        let size = Vec2::splat(height.min(ui.available_width() * 0.6));
        let (response, painter) = ui.allocate_painter(size, Sense::hover());

        if total > 0.0 {
            let rect = response.rect;
            let center = rect.center();
            let radius = rect.width().min(rect.height()) * 0.45;

            // Start at 12 o'clock, sweep clockwise.
            let mut angle = -TAU / 4.0;
            for slice in &chart.slices {
                let sweep = (slice.value / total) as f32 * TAU;
                paint_wedge(&painter, center, radius, angle, sweep, slice.color);
                angle += sweep;
            }
        }

        // Legend with slice percentages.
        ui.vertical(|ui: &mut Ui| {
            if chart.slices.is_empty() {
                ui.label("No data for the current selection.");
                return;
            }
            for slice in &chart.slices {
                let pct = slice.value / total * 100.0;
                ui.horizontal(|ui: &mut Ui| {
                    ui.label(RichText::new("■").color(slice.color));
                    ui.label(format!("{} — {:.1}%", slice.label, pct));
                });
            }
        });
    });
}

/// Paint a filled wedge as a fan of small triangles, which keeps every
/// painted shape convex regardless of the sweep angle.
fn paint_wedge(
    painter: &eframe::egui::Painter,
    center: Pos2,
    radius: f32,
    start: f32,
    sweep: f32,
    color: Color32,
) {
    const STEP: f32 = 0.05;
    let steps = (sweep / STEP).ceil().max(1.0) as usize;

    let point_at = |a: f32| Pos2::new(center.x + radius * a.cos(), center.y + radius * a.sin());

    for i in 0..steps {
        let a0 = start + sweep * i as f32 / steps as f32;
        let a1 = start + sweep * (i + 1) as f32 / steps as f32;
        painter.add(Shape::convex_polygon(
            vec![center, point_at(a0), point_at(a1)],
            color,
            Stroke::NONE,
        ));
    }
}

// ---------------------------------------------------------------------------
// Treemap chart (painter)
// ---------------------------------------------------------------------------

fn treemap_chart(ui: &mut Ui, chart: &TreemapChart, height: f32) {
    let size = Vec2::new(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    let placed = treemap::layout(rect.width() as f64, rect.height() as f64, chart);
    if placed.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No data",
            FontId::proportional(14.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    for tile in &placed {
        let group = &chart.groups[tile.group];
        let tile_rect = Rect::from_min_size(
            Pos2::new(rect.left() + tile.x as f32, rect.top() + tile.y as f32),
            Vec2::new(tile.width as f32, tile.height as f32),
        );

        painter.rect_filled(tile_rect, CornerRadius::ZERO, group.color);
        painter.rect_stroke(
            tile_rect,
            CornerRadius::ZERO,
            Stroke::new(1.5, ui.visuals().extreme_bg_color),
            StrokeKind::Inside,
        );

        // Label only when the tile is big enough to read it.
        if tile_rect.width() > 60.0 && tile_rect.height() > 28.0 {
            let inner = &group.tiles[tile.tile];
            painter.text(
                tile_rect.center(),
                Align2::CENTER_CENTER,
                format!("{} / {}\n{}", group.label, inner.label, inner.weight),
                FontId::proportional(12.0),
                Color32::WHITE,
            );
        }
    }
}
