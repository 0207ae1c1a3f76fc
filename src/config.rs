use crate::tool::ToolKind;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Settings for one checker run. Built from command-line arguments only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File or directory every tool analyzes.
    pub target: PathBuf,
    /// Python interpreter used to launch each tool as `-m <module>`.
    pub interpreter: PathBuf,
    /// Tools to run, in run order.
    pub tools: Vec<ToolKind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from("."),
            interpreter: Self::default_interpreter(),
            tools: ToolKind::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            ..Self::default()
        }
    }

    /// Interpreter name looked up on `PATH` when none is given.
    pub fn default_interpreter() -> PathBuf {
        if cfg!(windows) {
            PathBuf::from("python")
        } else {
            PathBuf::from("python3")
        }
    }

    pub fn with_interpreter(mut self, interpreter: impl Into<PathBuf>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Restricts the run to `tools`; order and duplicates in the input don't matter.
    pub fn with_tools(mut self, tools: &[ToolKind]) -> Self {
        self.tools = ToolKind::normalize_selection(tools);
        self
    }

    /// Target exactly as handed to each tool.
    pub fn target_arg(&self) -> &OsStr {
        self.target.as_os_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_tool_on_current_directory() {
        let config = Config::default();
        assert_eq!(config.target, PathBuf::from("."));
        assert_eq!(config.tools, ToolKind::ALL.to_vec());
        assert_eq!(config.interpreter, Config::default_interpreter());
    }

    #[test]
    fn builder_overrides() {
        let config = Config::new("pkg/module.py")
            .with_interpreter("/opt/py/bin/python")
            .with_tools(&[ToolKind::StyleChecker, ToolKind::Linter]);

        assert_eq!(config.target_arg(), "pkg/module.py");
        assert_eq!(config.interpreter, PathBuf::from("/opt/py/bin/python"));
        assert_eq!(config.tools, vec![ToolKind::Linter, ToolKind::StyleChecker]);
    }
}
