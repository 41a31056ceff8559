//! Dashboard read model.

mod get_dashboard;

pub use get_dashboard::{GetDashboardHandler, GetDashboardQuery};
