//! cmdline REPL entry point.
//!
//! Launch the interactive shell:
//! ```bash
//! cargo run -p cmdline-repl
//! ```
//!
//! Run a single line:
//! ```bash
//! cargo run -p cmdline-repl -- --no-persist -c "math add 2 3"
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cmdline_repl::Cli;

fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    cmdline_repl::install_panic_hook();

    let cli = Cli::parse();
    if let Some(line) = &cli.command {
        let code = cmdline_repl::run_once(&cli, line)?;
        std::process::exit(code);
    }

    cmdline_repl::run(&cli)
}
