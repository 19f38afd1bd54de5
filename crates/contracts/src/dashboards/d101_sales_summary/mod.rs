pub mod daily;
pub mod dto;
pub mod period;
