pub mod dashboard;

pub use dashboard::{dashboard_page, search_results, DashboardVm};
