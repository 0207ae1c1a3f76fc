use crate::command::InvocationSpec;
use crate::error::LaunchError;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::debug;

/// Exit code and decoded output streams of one finished tool process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationResult {
    /// Process exit code. Negative values mean the process was killed by
    /// signal `-exit_code`.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Launches tool processes one at a time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Runner;

impl Runner {
    pub fn new() -> Self {
        Self
    }

    /// Runs `spec` to completion and captures its output.
    ///
    /// A non-zero exit code is a normal result. Only failures to start,
    /// wait on, or decode the process are errors.
    pub async fn execute(&self, spec: &InvocationSpec) -> Result<InvocationResult, LaunchError> {
        let program = spec.program().to_string_lossy().into_owned();
        debug!("spawning {}", spec);

        let output = Command::new(spec.program())
            .args(spec.args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| LaunchError::from_io(program.clone(), e))?;

        let exit_code = exit_code(output.status).ok_or_else(|| LaunchError::NoExitStatus {
            program: program.clone(),
        })?;
        debug!("{} exited with {}", spec.tool().module(), exit_code);

        let stdout = decode(output.stdout, &program, "stdout")?;
        let stderr = decode(output.stderr, &program, "stderr")?;

        Ok(InvocationResult {
            exit_code,
            stdout,
            stderr,
        })
    }
}

fn decode(bytes: Vec<u8>, program: &str, stream: &'static str) -> Result<String, LaunchError> {
    String::from_utf8(bytes).map_err(|_| LaunchError::InvalidOutput {
        program: program.to_string(),
        stream,
    })
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.code().or_else(|| status.signal().map(|signal| -signal))
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> Option<i32> {
    status.code()
}
