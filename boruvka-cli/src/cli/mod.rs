//! Command-line interface for computing and generating minimum spanning
//! trees.
//!
//! `run` loads an edge list and prints its minimum spanning forest; `generate`
//! writes a random edge list for later runs.

mod commands;

pub use commands::{
    Cli, CliError, Command, CommandOutcome, ExecutionSummary, GenerateCommand, GenerationSummary,
    RunCommand, render_outcome, render_summary, run_cli,
};
