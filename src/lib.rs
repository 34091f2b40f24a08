pub mod assets;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod render;
pub mod selection;
pub mod selectors;
// cmd and reports are binary modules (declared in main.rs).
