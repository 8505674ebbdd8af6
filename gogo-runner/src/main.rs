mod repl;
mod runner;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Once;

use anyhow::Context;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Source file to run. Starts the REPL when omitted.
    path: Option<PathBuf>,
    /// Print every token of the input before evaluating it.
    #[arg(long)]
    tokens: bool,
}

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // stays silent unless RUST_LOG asks for output
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

fn main() -> anyhow::Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    match cli.path {
        None => {
            repl::start(cli.tokens)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(path) => {
            let source = std::fs::read_to_string(&path)
                .with_context(|| format!("could not read {}", path.display()))?;
            Ok(runner::execute(&source, cli.tokens))
        }
    }
}
