#![allow(clippy::result_large_err)]

mod cli;
pub mod component;
pub mod config;
mod error;
pub mod hooks;
pub mod index;
pub mod templates;
pub mod ui;

pub use cli::USAGE;
pub use error::{CompgenError, Result};

/// Entry point for the CLI.
///
/// Help and version exit 0 through clap; any other parse failure becomes an
/// `Args` error so the process exits 1.
pub fn run() -> Result<()> {
    use clap::Parser;
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => return Err(CompgenError::Args(err.to_string().trim_end().to_string())),
    };
    cli::run_generate(cli)
}

/// Prints an error the way the binary reports it before exiting.
pub fn report(err: &CompgenError) {
    match err {
        CompgenError::Usage => {
            ui::info(&err.to_string());
            ui::info(USAGE);
        }
        _ => ui::error(&err.to_string()),
    }
}
