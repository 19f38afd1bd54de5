pub mod a001_region;
pub mod a002_company_route;
