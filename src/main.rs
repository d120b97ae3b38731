//! loggate - gate log lines by severity and tag from the shell
//!
//! Usage:
//!   loggate emit <SEVERITY> <MESSAGE> [--tag T]...   Write the line if admitted
//!        [--file F] [--function NAME] [--line N]    Call-site provenance to report
//!   loggate check <SEVERITY> [--tag T]...            Exit 0 if admitted, 1 if not
//!   loggate show-config                              Print effective configuration

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use loggate::{logging, StdoutSink};
use std::process::ExitCode;
use std::sync::Arc;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let result = commands::gate_from_cli(&cli).and_then(|gate| {
        commands::execute(&cli, &gate, Arc::new(StdoutSink), &mut std::io::stdout().lock())
    });
    if let Err(e) = &result {
        eprintln!("loggate: {}", e);
    }
    ExitCode::from(commands::exit_status(&result))
}
