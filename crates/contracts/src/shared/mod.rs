pub mod data_table;
pub mod envelope;
pub mod error;
pub mod list;
pub mod pagination;
pub mod validation;
