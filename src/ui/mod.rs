/// UI layer: egui panels and the chart renderers.

pub mod charts;
pub mod panels;
