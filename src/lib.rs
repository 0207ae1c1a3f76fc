pub mod config;
pub mod tool;
pub mod command;
pub mod error;
pub mod runner;
pub mod interpreter;
pub mod reporter;
pub mod checker;

pub use config::Config;
pub use tool::ToolKind;
pub use command::{CommandTable, InvocationSpec};
pub use error::{FaultKind, InterpretError, LaunchError};
pub use runner::{InvocationResult, Runner};
pub use interpreter::{interpret, Interpretation, StatusCategory};
pub use reporter::Reporter;
pub use checker::{Outcome, QualityChecker};

pub type Result<T> = anyhow::Result<T>;
