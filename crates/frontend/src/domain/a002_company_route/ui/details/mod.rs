//! Company route form, opened in its own tab.
//!
//! - view_model.rs: loading, form state and the save command
//! - view.rs: the page

mod view;
mod view_model;

pub use view::CompanyRouteDetails;
pub use view_model::CompanyRouteDetailsViewModel;
