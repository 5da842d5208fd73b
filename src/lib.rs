// Library interface for scmprompt
// Exposes internal modules for testing and potential library usage

pub mod cli;
pub mod command;
pub mod config;
pub mod env;
pub mod errors;
pub mod prompt;
pub mod shell;
pub mod style;
pub mod suggestions;
pub mod vcs;
