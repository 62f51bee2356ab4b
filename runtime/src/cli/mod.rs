//! CLI subcommand implementations for the clickmap binary.

pub mod extract_cmd;
pub mod input;
pub mod output;
pub mod script_cmd;
pub mod summary_cmd;
