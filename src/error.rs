use std::io;
use thiserror::Error;

/// A tool process could not be run to completion.
#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("{program}: {source}")]
    NotFound {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("permission denied starting {program}: {source}")]
    PermissionDenied {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program}: {source}")]
    Subprocess {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{stream} of {program} is not valid UTF-8")]
    InvalidOutput {
        program: String,
        stream: &'static str,
    },

    #[error("{program} exited without a status code")]
    NoExitStatus { program: String },
}

impl LaunchError {
    /// Sorts a spawn or wait failure by its I/O error kind.
    pub fn from_io(program: impl Into<String>, source: io::Error) -> Self {
        let program = program.into();
        match source.kind() {
            io::ErrorKind::NotFound => LaunchError::NotFound { program, source },
            io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program, source },
            _ => LaunchError::Subprocess { program, source },
        }
    }

    pub fn kind(&self) -> FaultKind {
        match self {
            LaunchError::NotFound { .. } => FaultKind::ToolNotFound,
            LaunchError::PermissionDenied { .. } | LaunchError::Subprocess { .. } => {
                FaultKind::Subprocess
            }
            LaunchError::InvalidOutput { .. } | LaunchError::NoExitStatus { .. } => {
                FaultKind::Unexpected
            }
        }
    }
}

/// A completed invocation whose exit code has no meaning in any status table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretError {
    #[error("process was terminated by signal {0}")]
    TerminatedBySignal(i32),
}

/// How a fault is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultKind {
    ToolNotFound,
    Subprocess,
    Unexpected,
}

impl FaultKind {
    pub fn prefix(self) -> &'static str {
        match self {
            FaultKind::ToolNotFound => "❌ Error: tool not found",
            FaultKind::Subprocess => "⚠️ Error running command",
            FaultKind::Unexpected => "🚨 Unexpected error",
        }
    }
}
