pub mod artifacts;
pub mod run_data;
