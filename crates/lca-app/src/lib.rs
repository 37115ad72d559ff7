//! Application service layer - use cases, config, batch runs

pub mod app;
pub mod config;
