//! progressionctl - command surface for the progression table generator.

pub mod cli;
pub mod commands;
pub mod logging;
