use crate::config::Config;
use crate::tool::ToolKind;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;

/// A fully formed command line for one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSpec {
    tool: ToolKind,
    program: PathBuf,
    args: Vec<OsString>,
}

impl InvocationSpec {
    /// `<interpreter> -m <module> <tool args...>`
    pub fn new(tool: ToolKind, interpreter: impl Into<PathBuf>, target: impl AsRef<OsStr>) -> Self {
        let mut args: Vec<OsString> = vec!["-m".into(), tool.module().into()];
        args.extend(tool.tool_args(target.as_ref()));

        Self {
            tool,
            program: interpreter.into(),
            args,
        }
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn program(&self) -> &PathBuf {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The command line as a single space-joined string, for display only.
    pub fn command_line(&self) -> String {
        let mut line = self.program.to_string_lossy().into_owned();
        for arg in &self.args {
            line.push(' ');
            line.push_str(&arg.to_string_lossy());
        }
        line
    }
}

impl fmt::Display for InvocationSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Ordered invocations for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTable {
    specs: Vec<InvocationSpec>,
}

impl CommandTable {
    /// One spec per configured tool. The target path is not validated here;
    /// a bad path surfaces as the tool's own error output and exit code.
    pub fn build(config: &Config) -> Self {
        let target = config.target_arg();
        let specs = config
            .tools
            .iter()
            .map(|&tool| InvocationSpec::new(tool, &config.interpreter, target))
            .collect();

        Self { specs }
    }

    pub fn specs(&self) -> &[InvocationSpec] {
        &self.specs
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }
}

impl<'a> IntoIterator for &'a CommandTable {
    type Item = &'a InvocationSpec;
    type IntoIter = std::slice::Iter<'a, InvocationSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
