pub mod d100_sales_analytics;
pub mod d101_sales_summary;
