pub mod details;
pub mod list;

pub use details::CompanyRouteDetails;
pub use list::CompanyRouteList;
