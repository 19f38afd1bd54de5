pub mod daily_trend;
pub mod dashboard;

pub use dashboard::SalesSummaryDashboard;
