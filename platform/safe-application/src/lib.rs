pub mod config;
pub mod live_data;
pub mod reporting;
