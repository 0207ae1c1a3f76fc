use crate::command::InvocationSpec;
use crate::error::InterpretError;
use crate::tool::ToolKind;

/// What an exit code says about the analyzed code or the tool run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Clean,
    Reformatted,
    IssuesFound,
    SyntaxError,
    InternalError,
    Timeout,
    PathAccessError,
    ExecutionError,
    CriticalError,
    Unexpected,
}

/// A status line for one completed invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub category: StatusCategory,
    pub message: String,
}

type StatusTable = &'static [(i32, StatusCategory, &'static str)];

const FORMATTER_STATUS: StatusTable = &[
    (0, StatusCategory::Clean, "✅ Code is already formatted."),
    (1, StatusCategory::Reformatted, "✍️ Formatting changes were applied."),
    (2, StatusCategory::SyntaxError, "❌ Syntax error in the source file."),
    (123, StatusCategory::InternalError, "🚨 Internal black error."),
    (124, StatusCategory::Timeout, "⏱️ Timeout: the run exceeded its time limit."),
    (125, StatusCategory::PathAccessError, "🚫 Could not access the file or directory."),
];

const STYLE_CHECKER_STATUS: StatusTable = &[
    (0, StatusCategory::Clean, "✅ Code is clean: no style errors."),
    (1, StatusCategory::IssuesFound, "⚠️ Errors or warnings were found."),
];

const DEAD_CODE_STATUS: StatusTable = &[
    (0, StatusCategory::Clean, "✅ No unused code found."),
    (1, StatusCategory::IssuesFound, "⚠️ Unused code found."),
    (2, StatusCategory::ExecutionError, "❌ vulture failed to run."),
];

const COMPLEXITY_STATUS: StatusTable = &[
    (0, StatusCategory::Clean, "✅ Run succeeded."),
    (1, StatusCategory::ExecutionError, "⚠️ Execution error."),
    (2, StatusCategory::CriticalError, "❌ Critical error."),
];

/// pylint ORs message-category bits into its exit code, so any code in
/// `1..=31` means issues were found. Bit 32 flags a usage or fatal error.
const LINTER_CRITICAL_THRESHOLD: i32 = 32;

/// Maps the exit code of a finished invocation to a status line.
pub fn interpret(spec: &InvocationSpec, exit_code: i32) -> Result<Interpretation, InterpretError> {
    if exit_code < 0 {
        return Err(InterpretError::TerminatedBySignal(-exit_code));
    }

    let interpretation = match spec.tool() {
        ToolKind::Linter => interpret_linter(spec, exit_code),
        ToolKind::Formatter => lookup(FORMATTER_STATUS, spec, exit_code),
        ToolKind::StyleChecker => lookup(STYLE_CHECKER_STATUS, spec, exit_code),
        ToolKind::DeadCodeDetector => lookup(DEAD_CODE_STATUS, spec, exit_code),
        ToolKind::ComplexityAnalyzer => lookup(COMPLEXITY_STATUS, spec, exit_code),
    };
    Ok(interpretation)
}

fn interpret_linter(spec: &InvocationSpec, exit_code: i32) -> Interpretation {
    if exit_code >= LINTER_CRITICAL_THRESHOLD {
        Interpretation {
            category: StatusCategory::CriticalError,
            message: format!("❗ Critical error in {}", spec.command_line()),
        }
    } else if exit_code > 0 {
        Interpretation {
            category: StatusCategory::IssuesFound,
            message: "🚩 pylint found warnings or style issues".to_string(),
        }
    } else {
        Interpretation {
            category: StatusCategory::Clean,
            message: "✅ pylint: no errors found".to_string(),
        }
    }
}

fn lookup(table: StatusTable, spec: &InvocationSpec, exit_code: i32) -> Interpretation {
    match table.iter().find(|(code, _, _)| *code == exit_code) {
        Some(&(_, category, message)) => Interpretation {
            category,
            message: message.to_string(),
        },
        None => Interpretation {
            category: StatusCategory::Unexpected,
            message: format!(
                "🚩 Unexpected exit code {} from {}",
                exit_code,
                spec.command_line()
            ),
        },
    }
}
