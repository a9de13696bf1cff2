//! Shared scaffolding for the Tortuga rule command-line tools:
//! common options, settings resolution, logging and output.

pub mod args;
pub mod config;
pub mod logging;
pub mod output;
pub mod rules;
