pub mod charts;
pub mod dashboard;
pub mod filter_bar;

pub use dashboard::SalesAnalyticsDashboard;
