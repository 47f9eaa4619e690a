pub mod config;
pub mod weighted;
