//! zttt terminal front end
//!
//! Library half of the `zttt` binary: argument parsing, the config file, the
//! interactive game loops and the JSON game summary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod session;
mod summary;

pub use cli::{Cli, Command};
pub use config::{CliConfig, ConfigError, EngineConfig};
pub use session::Session;
pub use summary::GameSummary;
