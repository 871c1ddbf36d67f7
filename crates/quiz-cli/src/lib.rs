//! CLI library components for the quiz converter.

pub mod logging;
pub mod pipeline;
pub mod types;
