use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// ChartSpec – a fully parameterized chart, independent of any widget
// ---------------------------------------------------------------------------

/// One chart panel: a stable id, a display title, and the plotted data.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    /// Stable identifier, also used as the egui widget id.
    pub id: &'static str,
    pub title: String,
    pub data: ChartData,
}

#[derive(Debug, Clone)]
pub enum ChartData {
    Line(LineChart),
    Pie(PieChart),
    Bar(BarChart),
    Treemap(TreemapChart),
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

/// Multi-series line chart over a shared categorical x-axis.
#[derive(Debug, Clone)]
pub struct LineChart {
    /// Tick labels; series points use the label position as x.
    pub x_labels: Vec<String>,
    pub y_label: String,
    pub series: Vec<Series>,
}

#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PieChart {
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

impl PieChart {
    /// Sum of slice values. Zero when there are no slices.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct BarChart {
    pub y_label: String,
    pub bars: Vec<BarEntry>,
    /// How (and whether) to print the value above each bar.
    pub value_labels: ValueLabels,
}

/// A single bar. A `NAN` value means "no data" and is skipped by the
/// renderer instead of being drawn as a zero-height bar.
#[derive(Debug, Clone)]
pub struct BarEntry {
    pub label: String,
    pub value: f64,
    pub color: Color32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueLabels {
    None,
    /// Render the value as a percentage with two decimals, e.g. `91.67%`.
    Percent,
}

impl ValueLabels {
    /// Format a bar value for display, or `None` when labels are off or
    /// the value is the no-data sentinel.
    pub fn format(&self, value: f64) -> Option<String> {
        if value.is_nan() {
            return None;
        }
        match self {
            ValueLabels::None => None,
            ValueLabels::Percent => Some(format!("{:.2}%", value * 100.0)),
        }
    }
}

// ---------------------------------------------------------------------------
// Treemap chart
// ---------------------------------------------------------------------------

/// Two-level treemap: outer groups, inner tiles weighted by a value.
#[derive(Debug, Clone)]
pub struct TreemapChart {
    pub groups: Vec<TreemapGroup>,
}

#[derive(Debug, Clone)]
pub struct TreemapGroup {
    pub label: String,
    pub color: Color32,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone)]
pub struct Tile {
    pub label: String,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_labels_format_two_decimals() {
        assert_eq!(ValueLabels::Percent.format(0.916_666_7).as_deref(), Some("91.67%"));
        assert_eq!(ValueLabels::Percent.format(0.968_75).as_deref(), Some("96.88%"));
    }

    #[test]
    fn labels_skip_sentinel_and_none_mode() {
        assert_eq!(ValueLabels::Percent.format(f64::NAN), None);
        assert_eq!(ValueLabels::None.format(0.5), None);
    }

    #[test]
    fn empty_pie_totals_zero() {
        let pie = PieChart { slices: Vec::new() };
        assert_eq!(pie.total(), 0.0);
    }
}
