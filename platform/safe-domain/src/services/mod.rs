pub mod snapshot;
pub mod uptime;
