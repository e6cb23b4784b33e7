//! CLI library components for the Credit Class Finder.

pub mod config;
pub mod logging;
pub mod pipeline;
