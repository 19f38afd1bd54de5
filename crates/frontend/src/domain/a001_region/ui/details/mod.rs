//! Region add/edit dialog.
//!
//! - view_model.rs: form state and the save command
//! - view.rs: the dialog

mod view;
mod view_model;

pub use view::RegionDetails;
pub use view_model::RegionDetailsViewModel;
