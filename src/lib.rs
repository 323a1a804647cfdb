pub mod config;
pub mod crd;
pub mod env;
pub mod error;
pub mod plugin;
pub mod workload;
