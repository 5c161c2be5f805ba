//! `boruvka` binary: computes minimum spanning trees of edge lists and
//! generates random edge lists.
//!
//! Results go to stdout; diagnostics go to stderr through `tracing`.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use boruvka_cli::{
    cli::{Cli, CliError, render_outcome, run_cli},
    logging::{LoggingError, init_logging},
};
use boruvka_core::MstErrorCode;
use clap::Parser;
use tracing::{error, field};

fn execute(cli: Cli, out: &mut impl Write) -> Result<()> {
    let outcome = run_cli(cli).context("command failed")?;
    render_outcome(&outcome, &mut *out).context("could not write result to stdout")?;
    out.flush().context("could not flush stdout")
}

/// Stable code of the MST failure behind `err`, when there is one.
fn mst_code(err: &anyhow::Error) -> Option<MstErrorCode> {
    match err.downcast_ref::<CliError>()? {
        CliError::Core(core) => Some(core.code()),
        _ => None,
    }
}

fn main() -> ExitCode {
    if let Err(err) = init_logging() {
        log_setup_failed(&err);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let mut stdout = BufWriter::new(io::stdout().lock());
    match execute(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(
                error = %err,
                code = mst_code(&err).map(|code| field::display(code.as_str())),
                "boruvka exited with an error"
            );
            ExitCode::FAILURE
        }
    }
}

#[expect(
    clippy::print_stderr,
    reason = "tracing is not available when its own setup fails"
)]
fn log_setup_failed(err: &LoggingError) {
    eprintln!("boruvka: cannot set up logging: {err}");
}
