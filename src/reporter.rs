use crate::checker::Outcome;
use crate::command::{CommandTable, InvocationSpec};
use crate::config::Config;
use crate::error::FaultKind;
use crate::runner::InvocationResult;
use chrono::{DateTime, Local};
use std::io::{self, Write};
use std::time::Duration;

/// Renders a run as human-readable text.
pub struct Reporter<W: Write> {
    out: W,
}

impl Reporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn header(&mut self, config: &Config, started_at: DateTime<Local>) -> io::Result<()> {
        writeln!(self.out, "🔍 Code quality check")?;
        writeln!(self.out, "=====================")?;
        writeln!(self.out, "🎯 Target: {}", config.target.display())?;
        writeln!(self.out, "🐍 Interpreter: {}", config.interpreter.display())?;
        writeln!(self.out, "🕒 Started at: {}", started_at.to_rfc3339())?;
        writeln!(self.out)
    }

    /// Announces a tool before it blocks the run.
    pub fn invocation_started(&mut self, spec: &InvocationSpec) -> io::Result<()> {
        writeln!(self.out, "🚀 Running: {}", spec.command_line())?;
        self.out.flush()
    }

    pub fn outcome(&mut self, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Completed {
                result,
                interpretation,
            } => {
                self.captured(result)?;
                writeln!(self.out, "🔲 {}", interpretation.message)?;
            }
            Outcome::InterpretationFailed { result, error } => {
                self.captured(result)?;
                writeln!(
                    self.out,
                    "{}: could not interpret exit code: {}",
                    FaultKind::Unexpected.prefix(),
                    error
                )?;
            }
            Outcome::LaunchFailed(error) => {
                writeln!(self.out, "{} - {}", error.kind().prefix(), error)?;
            }
        }
        writeln!(self.out)?;
        self.out.flush()
    }

    /// Raw tool output and exit code, printed ahead of any interpretation.
    fn captured(&mut self, result: &InvocationResult) -> io::Result<()> {
        if !result.stdout.is_empty() {
            writeln!(self.out, "{}", result.stdout.trim_end_matches('\n'))?;
        }
        if !result.stderr.is_empty() {
            writeln!(self.out, "{}", result.stderr.trim_end_matches('\n'))?;
        }
        writeln!(self.out, "🔙 Exit code: {}", result.exit_code)
    }

    pub fn footer(&mut self, tools_run: usize, elapsed: Duration) -> io::Result<()> {
        writeln!(
            self.out,
            "✅ Ran {} tool(s) in {:.2}s",
            tools_run,
            elapsed.as_secs_f64()
        )?;
        self.out.flush()
    }

    /// Lists the invocations a run would perform.
    pub fn command_table(&mut self, table: &CommandTable) -> io::Result<()> {
        for spec in table {
            writeln!(self.out, "{:<32} {}", spec.tool().to_string(), spec.command_line())?;
        }
        self.out.flush()
    }
}
