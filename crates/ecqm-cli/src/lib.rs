//! Library components of the eCQM list generator CLI.

pub mod config;
pub mod logging;
pub mod pipeline;
