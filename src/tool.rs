use std::ffi::{OsStr, OsString};
use std::fmt;

/// The analysis tools the checker knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, clap::ValueEnum)]
pub enum ToolKind {
    /// black
    #[value(alias = "black")]
    Formatter,
    /// pylint
    #[value(alias = "pylint")]
    Linter,
    /// flake8
    #[value(alias = "flake8")]
    StyleChecker,
    /// vulture
    #[value(alias = "vulture")]
    DeadCodeDetector,
    /// radon (cyclomatic complexity)
    #[value(alias = "radon")]
    ComplexityAnalyzer,
}

impl ToolKind {
    /// Every tool, in the order a run invokes them.
    pub const ALL: [ToolKind; 5] = [
        ToolKind::Formatter,
        ToolKind::Linter,
        ToolKind::StyleChecker,
        ToolKind::DeadCodeDetector,
        ToolKind::ComplexityAnalyzer,
    ];

    /// Python module passed to `-m`.
    pub fn module(self) -> &'static str {
        match self {
            ToolKind::Formatter => "black",
            ToolKind::Linter => "pylint",
            ToolKind::StyleChecker => "flake8",
            ToolKind::DeadCodeDetector => "vulture",
            ToolKind::ComplexityAnalyzer => "radon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Formatter => "formatter",
            ToolKind::Linter => "linter",
            ToolKind::StyleChecker => "style checker",
            ToolKind::DeadCodeDetector => "dead-code detector",
            ToolKind::ComplexityAnalyzer => "complexity analyzer",
        }
    }

    /// Tool arguments placed after `-m <module>`, with the target spliced in.
    pub fn tool_args(self, target: &OsStr) -> Vec<OsString> {
        match self {
            // `radon cc <path> -a` prints the average complexity as well
            ToolKind::ComplexityAnalyzer => {
                vec!["cc".into(), target.to_os_string(), "-a".into()]
            }
            _ => vec![target.to_os_string()],
        }
    }

    /// Sorts a user selection into run order and drops duplicates.
    /// An empty selection means every tool.
    pub fn normalize_selection(selection: &[ToolKind]) -> Vec<ToolKind> {
        if selection.is_empty() {
            return Self::ALL.to_vec();
        }
        Self::ALL
            .iter()
            .copied()
            .filter(|kind| selection.contains(kind))
            .collect()
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.module(), self.label())
    }
}
