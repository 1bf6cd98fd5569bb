pub mod live_data;
pub mod run_data;
