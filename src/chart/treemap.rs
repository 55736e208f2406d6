use super::spec::TreemapChart;

// ---------------------------------------------------------------------------
// Two-level slice-and-dice layout
// ---------------------------------------------------------------------------

/// A laid-out tile in chart coordinates: `(0,0)` is the top-left corner of
/// the chart area, `x` grows right, `y` grows down.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    /// Index into `chart.groups`.
    pub group: usize,
    /// Index into `chart.groups[group].tiles`.
    pub tile: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlacedTile {
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Effective weight of a tile: `NAN` and non-positive weights count as zero
/// so a single bad row cannot poison the whole layout.
fn effective_weight(w: f64) -> f64 {
    if w.is_nan() || w <= 0.0 {
        0.0
    } else {
        w
    }
}

/// Lay out a two-level treemap in a `width` × `height` area.
///
/// Groups are sliced along the x-axis proportionally to their total weight;
/// within each group, tiles are diced along the y-axis. Tiles with zero
/// effective weight are dropped. When every weight is zero the result is
/// empty — there is nothing meaningful to draw and dividing by the zero
/// total would be the original script's bug all over again.
pub fn layout(width: f64, height: f64, chart: &TreemapChart) -> Vec<PlacedTile> {
    let group_totals: Vec<f64> = chart
        .groups
        .iter()
        .map(|g| g.tiles.iter().map(|t| effective_weight(t.weight)).sum())
        .collect();
    let grand_total: f64 = group_totals.iter().sum();

    if grand_total <= 0.0 || width <= 0.0 || height <= 0.0 {
        return Vec::new();
    }

    let mut placed = Vec::new();
    let mut x = 0.0;

    for (gi, (group, &group_total)) in chart.groups.iter().zip(&group_totals).enumerate() {
        if group_total <= 0.0 {
            continue;
        }
        let group_width = width * group_total / grand_total;

        let mut y = 0.0;
        for (ti, tile) in group.tiles.iter().enumerate() {
            let w = effective_weight(tile.weight);
            if w <= 0.0 {
                continue;
            }
            let tile_height = height * w / group_total;
            placed.push(PlacedTile {
                group: gi,
                tile: ti,
                x,
                y,
                width: group_width,
                height: tile_height,
            });
            y += tile_height;
        }

        x += group_width;
    }

    placed
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
