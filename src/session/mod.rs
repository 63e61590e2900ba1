//! Text front end: command parsing, output formatting and the input loop

pub mod command;
pub mod config;
pub mod render;
pub mod runner;

pub use command::{Command, CommandError};
pub use config::SessionConfig;
pub use runner::Session;
