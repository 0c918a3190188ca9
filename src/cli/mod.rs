//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;
mod error;

pub use args::{Args, Command, ConfigAction, CreateArgs, GenArgs};
pub use commands::{
    create_art, generate_art, handle_config_action, init_config, run, run_create, run_gen,
    write_output,
};
pub use enums::{CharacterSet, Luminance, ProviderName, Quantize};
pub use error::CliError;
