//! Two small dashboards over fixed in-memory tables:
//!
//! * **loan-dashboard** – student-loan portfolio with a servicer filter and
//!   four charts, all recomputed on every filter change.
//! * **court-dashboard** – court resource allocation with two derived
//!   metrics and three static charts.
//!
//! The [`data`] layer holds the tables and the pure filter/aggregation
//! functions; the [`chart`] layer maps aggregates to declarative chart
//! specs; the [`ui`] layer draws the specs with egui.

pub mod app;
pub mod chart;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
