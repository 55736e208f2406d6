/// Chart layer: declarative chart specifications and their builders.
///
/// The builders in [`build`] turn aggregated data into [`spec::ChartSpec`]
/// values; nothing in this module touches egui. The UI layer walks the
/// specs and draws them, so the mapping from data to charts stays a pure
/// function that the tests can exercise directly.

pub mod build;
pub mod spec;
pub mod treemap;
