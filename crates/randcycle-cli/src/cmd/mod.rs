//! Command modules for the `randcycle` CLI.
//!
//! Each submodule implements one subcommand. The `run` function in each
//! module takes the already-read input content plus the parsed arguments
//! and returns `Ok(())` on success or a [`crate::error::CliError`] on
//! failure.

pub mod inspect;
pub mod sample;
