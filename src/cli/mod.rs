//! Command Line Interface (CLI) layer for favforge.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `generate` and
//! `transparent` subcommands. It wires user-provided options to the
//! library functionality exposed via `favforge::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
