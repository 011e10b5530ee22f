//! Push a monochrome image to a badge display agent.
//!
//! One linear pass: load -> extract -> pack -> POST.

pub mod config;
pub mod debug_output;
pub mod pipeline;

pub use config::AppConfig;
pub use pipeline::{Pipeline, RunReport};
