//! Shell context, command dispatch, and CLI error types.

use std::io;
use std::path::Path;

use strsim::levenshtein;
use thiserror::Error;

use crate::cli::output;
use crate::config::{Config, ConfigManager};
use crate::errors::ScanError;
use crate::ocr::{scan_receipt, OcrError, TextDumpEngine};
use crate::session::{EmptyBuckets, Session};
use crate::utils::persistence::save_session_to_file;

/// Fatal shell failures that end the CLI loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Recoverable failures reported to the user without leaving the shell.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Ocr(#[from] OcrError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("exit requested")]
    ExitRequested,
}

pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

const COMMANDS: &[(&str, &str)] = &[
    ("scan", "scan <text-file>: interpret a recognized-text dump"),
    ("list", "list: show all records in scan order"),
    ("report", "report: per-category totals"),
    ("monthly", "monthly: per-month totals"),
    ("total", "total: running total and record count"),
    ("export", "export <path>: write the session snapshot as JSON"),
    ("config", "config: show active configuration"),
    ("help", "help: this overview"),
    ("exit", "exit: leave the shell"),
];

/// State threaded through the CLI loop: the session, the active config, and
/// the recognition engine used by `scan`.
pub struct ShellContext {
    pub(crate) session: Session,
    pub(crate) config: Config,
    engine: TextDumpEngine,
    pub(crate) mode: CliMode,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = ConfigManager::new().load()?;
        Ok(Self {
            session: Session::new(),
            config,
            engine: TextDumpEngine,
            mode,
            running: true,
        })
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _)| *name).collect()
    }

    pub(crate) fn prompt(&self) -> String {
        format!("receipts[{}]> ", self.session.record_count())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let result = match command {
            "scan" => self.cmd_scan(args),
            "list" => self.cmd_list(),
            "report" => self.cmd_report(),
            "monthly" => self.cmd_monthly(),
            "total" => self.cmd_total(),
            "export" => self.cmd_export(args),
            "config" => self.cmd_config(),
            "help" => self.cmd_help(),
            "exit" | "quit" => Err(CommandError::ExitRequested),
            _ => {
                self.suggest_command(raw);
                return Ok(LoopControl::Continue);
            }
        };
        match result {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    fn cmd_scan(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let [path] = args else {
            return Err(CommandError::InvalidArguments(
                "Usage: scan <text-file>".into(),
            ));
        };
        let record = scan_receipt(&self.engine, &mut self.session, Path::new(path))?;
        output::success(format!(
            "Recorded \"{}\": {}{:.2}, {} ({:.0}% confidence)",
            record.description,
            self.config.currency,
            record.amount,
            record.category,
            record.confidence * 100.0,
        ));
        Ok(())
    }

    fn cmd_list(&self) -> Result<(), CommandError> {
        if self.session.records().is_empty() {
            output::info("No records yet. Use `scan` to add one.");
            return Ok(());
        }
        for record in self.session.records() {
            output::info(format!(
                "{} | {}{:.2} | {} | {} | {:.0}%",
                record.date,
                self.config.currency,
                record.amount,
                record.category,
                record.description,
                record.confidence * 100.0,
            ));
        }
        Ok(())
    }

    fn cmd_report(&self) -> Result<(), CommandError> {
        let totals = self.session.category_totals();
        if totals.is_empty() {
            output::info("No records yet.");
            return Ok(());
        }
        output::section("Totals by category");
        for (category, total) in totals {
            output::info(format!(
                "{:<14} {}{:.2}",
                category, self.config.currency, total
            ));
        }
        Ok(())
    }

    fn cmd_monthly(&self) -> Result<(), CommandError> {
        let empty = if self.config.zero_fill_months {
            EmptyBuckets::ZeroFill
        } else {
            EmptyBuckets::Omit
        };
        let totals = self.session.monthly_totals(empty);
        if totals.is_empty() {
            output::info("No records yet.");
            return Ok(());
        }
        output::section("Totals by month");
        for bucket in totals {
            output::info(format!(
                "{} {}{:.2}",
                bucket.month.format("%Y-%m"),
                self.config.currency,
                bucket.total
            ));
        }
        Ok(())
    }

    fn cmd_total(&self) -> Result<(), CommandError> {
        output::info(format!(
            "{} receipt(s) scanned, {}{:.2} total",
            self.session.record_count(),
            self.config.currency,
            self.session.running_total()
        ));
        Ok(())
    }

    fn cmd_export(&self, args: &[&str]) -> Result<(), CommandError> {
        let [path] = args else {
            return Err(CommandError::InvalidArguments("Usage: export <path>".into()));
        };
        save_session_to_file(&self.session, Path::new(path))?;
        output::success(format!("Session exported to {path}"));
        Ok(())
    }

    fn cmd_config(&self) -> Result<(), CommandError> {
        output::info(format!("currency: {}", self.config.currency));
        output::info(format!("zero_fill_months: {}", self.config.zero_fill_months));
        Ok(())
    }

    fn cmd_help(&self) -> Result<(), CommandError> {
        output::section("Commands");
        for (_, help) in COMMANDS {
            output::info(help);
        }
        Ok(())
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = COMMANDS
            .iter()
            .map(|(name, _)| (levenshtein(name, input), *name))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    /// Reports a recoverable error. Prior records and totals stay intact.
    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        output::error(err);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::shell::parse_command_line;

    fn context() -> ShellContext {
        ShellContext {
            session: Session::new(),
            config: Config::default(),
            engine: TextDumpEngine,
            mode: CliMode::Script,
            running: true,
        }
    }

    fn process(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = parse_command_line(line).unwrap();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        context.dispatch(&tokens[0].to_lowercase(), &tokens[0], &args)
    }

    #[test]
    fn scan_requires_a_path() {
        let mut ctx = context();
        let result = process(&mut ctx, "scan");
        assert!(matches!(result, Err(CommandError::InvalidArguments(_))));
    }

    #[test]
    fn failed_scan_keeps_session_intact() {
        let mut ctx = context();
        let result = process(&mut ctx, "scan /definitely/not/there.txt");
        assert!(matches!(result, Err(CommandError::Ocr(_))));
        assert_eq!(ctx.session.record_count(), 0);
        assert_eq!(ctx.session.running_total(), 0.0);
    }

    #[test]
    fn scan_records_a_text_dump() {
        let mut ctx = context();
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "Corner Cafe\nTotal $6.75\n").unwrap();
        let line = format!("scan {}", file.path().display());
        process(&mut ctx, &line).unwrap();
        assert_eq!(ctx.session.record_count(), 1);
        assert!((ctx.session.running_total() - 6.75).abs() < 1e-9);
    }

    #[test]
    fn exit_stops_the_loop() {
        let mut ctx = context();
        assert!(matches!(process(&mut ctx, "exit"), Ok(LoopControl::Exit)));
    }

    #[test]
    fn unknown_command_is_not_an_error() {
        let mut ctx = context();
        assert!(matches!(
            process(&mut ctx, "scna receipt.txt"),
            Ok(LoopControl::Continue)
        ));
    }
}
