//! Command-line host for the `helper-kit` formatting helpers.
//!
//! The binary in `main.rs` only wires logging, settings and the system
//! clock; parsing and command execution live here so they can be tested
//! without spawning a process.

mod cli;
mod command;
mod config;
mod error;

pub use cli::{
    BytesArgs, Cli, Command, PaginateArgs, PhoneArgs, PluralArgs, SlugArgs, TimestampArgs,
    TokenDecodeArgs, TokenEncodeArgs,
};
pub use command::execute;
pub use config::HelperKitSettings;
pub use error::CliError;
