//! Tab management
//!
//! - `page`: TabPage wrapper that shows or hides a tab's content
//! - `registry`: tab key to view mapping
//! - `tab_labels`: tab titles and dynamic key helpers

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{
    company_route_details_key, detail_tab_label, parse_company_route_details_key, tab_label_for_key,
    COMPANY_ROUTE_NEW,
};
