//! Subcommand execution
//!
//! Kept apart from `main` so the exit status contract can be tested:
//! 0 when a line is emitted or a command completes, 1 when `check` finds the
//! call suppressed, 2 on any error.

use crate::cli::{call_tags, Cli, Command};
use loggate::config::{self, Config};
use loggate::error::{GateError, Result};
use loggate::{CallSite, LogGate, Logger, Sink};
use std::io::Write;
use std::sync::Arc;

/// Exit status for any error
pub const EXIT_ERROR: u8 = 2;

/// Result of a successfully executed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Command ran to completion (`emit`, `show-config`)
    Done,
    /// `check`: the call would be emitted
    Admitted,
    /// `check`: the call would be suppressed
    Suppressed,
}

impl Outcome {
    pub fn exit_status(self) -> u8 {
        match self {
            Outcome::Done | Outcome::Admitted => 0,
            Outcome::Suppressed => 1,
        }
    }
}

/// Exit status for a command result
pub fn exit_status(result: &Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.exit_status(),
        Err(_) => EXIT_ERROR,
    }
}

/// Build the gate from the config file plus command-line overrides
///
/// An explicit `--config` must exist and parse; the default location falls
/// back to defaults.
pub fn gate_from_cli(cli: &Cli) -> Result<LogGate> {
    let file_config = match &cli.config {
        Some(path) => config::load(path)?,
        None => config::load_or_default(&config::default_path()),
    };
    Ok(LogGate::with_config(
        cli.apply_overrides(file_config.gate_config()),
    ))
}

/// Run the subcommand against `gate`
///
/// Emitted log lines go to `sink`; command output (`check` verdicts,
/// `show-config`) goes to `out`.
pub fn execute(
    cli: &Cli,
    gate: &LogGate,
    sink: Arc<dyn Sink>,
    out: &mut dyn Write,
) -> Result<Outcome> {
    match &cli.command {
        Command::Emit {
            severity,
            message,
            tags,
            file,
            function,
            line,
        } => {
            let logger = Logger::with_sink(gate.clone(), sink);
            let tags = call_tags(tags);
            let site = CallSite::new(file, function, *line);
            logger.log(*severity, message, tags.as_deref(), site);
            Ok(Outcome::Done)
        }
        Command::Check { severity, tags } => {
            let tags = call_tags(tags);
            let (outcome, verdict) = if gate.should_emit(*severity, tags.as_deref()) {
                (Outcome::Admitted, "emit")
            } else {
                (Outcome::Suppressed, "suppress")
            };
            writeln!(out, "{}", verdict).map_err(|source| GateError::Output { source })?;
            Ok(outcome)
        }
        Command::ShowConfig => {
            let effective = Config::from_gate_config(&gate.snapshot());
            write!(out, "{}", effective.to_toml()?)
                .map_err(|source| GateError::Output { source })?;
            Ok(Outcome::Done)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use loggate::{Filter, MemorySink, Severity};

    fn run(args: &[&str], gate: &LogGate) -> (Result<Outcome>, Vec<String>, String) {
        let cli = Cli::parse_from(args.iter().copied());
        let sink = Arc::new(MemorySink::new());
        let mut out = Vec::new();
        let result = execute(&cli, gate, sink.clone(), &mut out);
        (result, sink.lines(), String::from_utf8(out).unwrap())
    }

    fn gate(min_severity: Severity, filter: Filter) -> LogGate {
        LogGate::with_config(loggate::GateConfig::new(min_severity, filter))
    }

    // === check ===

    #[test]
    fn test_check_admitted_exits_zero() {
        let gate = gate(Severity::Info, Filter::tags(["ui"]));
        let (result, _, out) = run(&["loggate", "check", "warning", "--tag", "ui"], &gate);

        assert_eq!(out, "emit\n");
        assert_eq!(exit_status(&result), 0);
        assert_eq!(result.unwrap(), Outcome::Admitted);
    }

    #[test]
    fn test_check_suppressed_exits_one() {
        let gate = gate(Severity::Info, Filter::tags(["ui"]));
        let (result, _, out) = run(&["loggate", "check", "error", "--tag", "db"], &gate);

        assert_eq!(out, "suppress\n");
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_check_below_threshold_exits_one() {
        let gate = gate(Severity::Warning, Filter::AllowAll);
        let (result, _, _) = run(&["loggate", "check", "info"], &gate);

        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn test_check_untagged_passes_tag_filter() {
        let gate = gate(Severity::Verbose, Filter::tags(["ui"]));
        let (result, _, _) = run(&["loggate", "check", "verbose"], &gate);

        assert_eq!(exit_status(&result), 0);
    }

    // === emit ===

    #[test]
    fn test_emit_writes_line_with_provenance() {
        let gate = LogGate::new();
        let (result, lines, out) = run(
            &[
                "loggate", "emit", "info", "deployed", "--file", "ops/deploy.sh", "--function",
                "rollout", "--line", "17",
            ],
            &gate,
        );

        assert_eq!(exit_status(&result), 0);
        assert_eq!(lines, vec!["😊 deploy.rollout[17]: deployed"]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_emit_suppressed_still_exits_zero() {
        let gate = gate(Severity::Verbose, Filter::AllowNone);
        let (result, lines, _) = run(&["loggate", "emit", "error", "muted"], &gate);

        assert_eq!(exit_status(&result), 0);
        assert!(lines.is_empty());
    }

    // === show-config ===

    #[test]
    fn test_show_config_prints_effective_toml() {
        let gate = gate(Severity::Error, Filter::tags(["net"]));
        let (result, _, out) = run(&["loggate", "show-config"], &gate);

        assert_eq!(exit_status(&result), 0);
        let parsed = config::parse(&out, std::path::Path::new("stdout")).unwrap();
        assert_eq!(parsed.gate_config(), *gate.snapshot());
    }

    // === gate construction / errors ===

    #[test]
    fn test_missing_explicit_config_exits_two() {
        let path = std::env::temp_dir().join(format!(
            "loggate-absent-{}.toml",
            std::process::id()
        ));
        let cli = Cli::parse_from([
            "loggate",
            "--config",
            path.to_str().unwrap(),
            "check",
            "error",
        ]);

        let result = gate_from_cli(&cli).map(|_| Outcome::Done);

        assert!(matches!(result, Err(GateError::ConfigRead { .. })));
        assert_eq!(exit_status(&result), EXIT_ERROR);
    }

    #[test]
    fn test_explicit_config_with_overrides() {
        let path = std::env::temp_dir().join(format!(
            "loggate-cli-config-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[gate]\nmin_severity = \"error\"\nfilter = \"none\"\n").unwrap();
        let cli = Cli::parse_from([
            "loggate",
            "--config",
            path.to_str().unwrap(),
            "--tags",
            "ui",
            "check",
            "error",
        ]);

        let gate = gate_from_cli(&cli);
        let _ = std::fs::remove_file(&path);

        assert_eq!(
            *gate.unwrap().snapshot(),
            loggate::GateConfig::new(Severity::Error, Filter::tags(["ui"]))
        );
    }
}
