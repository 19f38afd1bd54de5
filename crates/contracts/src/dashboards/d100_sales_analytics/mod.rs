pub mod dto;
pub mod filters;
pub mod pivot;
