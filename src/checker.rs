use crate::command::{CommandTable, InvocationSpec};
use crate::config::Config;
use crate::error::{InterpretError, LaunchError};
use crate::interpreter::{self, Interpretation};
use crate::reporter::Reporter;
use crate::runner::{InvocationResult, Runner};
use chrono::Local;
use std::io::{self, Write};
use std::time::Instant;
use tracing::{debug, info};

/// What happened to a single tool invocation. Every variant lets the run
/// move on to the next tool.
#[derive(Debug)]
pub enum Outcome {
    Completed {
        result: InvocationResult,
        interpretation: Interpretation,
    },
    LaunchFailed(LaunchError),
    InterpretationFailed {
        result: InvocationResult,
        error: InterpretError,
    },
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed { .. })
    }
}

/// Runs the configured tools one after another and reports each result.
pub struct QualityChecker {
    config: Config,
    table: CommandTable,
    runner: Runner,
}

impl QualityChecker {
    pub fn new(config: Config) -> Self {
        let table = CommandTable::build(&config);
        Self {
            config,
            table,
            runner: Runner::new(),
        }
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Runs every invocation in table order, writing the report as it goes.
    ///
    /// Tool faults never stop the run; only a failure to write the report does.
    pub async fn run<W: Write>(&self, reporter: &mut Reporter<W>) -> io::Result<Vec<Outcome>> {
        let start_time = Instant::now();
        reporter.header(&self.config, Local::now())?;

        let mut outcomes = Vec::with_capacity(self.table.len());
        for spec in &self.table {
            reporter.invocation_started(spec)?;
            let outcome = self.invoke(spec).await;
            reporter.outcome(&outcome)?;
            outcomes.push(outcome);
        }

        let completed = outcomes.iter().filter(|o| o.is_completed()).count();
        info!("{}/{} tools completed", completed, outcomes.len());

        reporter.footer(outcomes.len(), start_time.elapsed())?;
        Ok(outcomes)
    }

    /// Launches one tool and classifies its exit code.
    pub async fn invoke(&self, spec: &InvocationSpec) -> Outcome {
        let result = match self.runner.execute(spec).await {
            Ok(result) => result,
            Err(error) => {
                debug!("{} failed to launch: {:?}", spec.tool().module(), error);
                return Outcome::LaunchFailed(error);
            }
        };

        match interpreter::interpret(spec, result.exit_code) {
            Ok(interpretation) => {
                debug!(
                    "{} -> {:?}",
                    spec.tool().module(),
                    interpretation.category
                );
                Outcome::Completed {
                    result,
                    interpretation,
                }
            }
            Err(error) => {
                debug!("{} could not be interpreted: {}", spec.tool().module(), error);
                Outcome::InterpretationFailed { result, error }
            }
        }
    }
}
