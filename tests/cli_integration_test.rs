use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_code-quality-check"))
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

/// Writes an executable shell script that stands in for the Python interpreter.
/// It receives `-m <module> <tool args...>`.
#[cfg(unix)]
fn fake_interpreter(dir: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("python");
    fs::write(&path, format!("#!/bin/sh\n{body}")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[cfg(unix)]
#[test]
fn test_check_runs_every_tool_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("app.py");
    fs::write(&target, "print('hi')\n").unwrap();

    let python = fake_interpreter(
        temp_dir.path(),
        r#"case "$2" in
  black) echo "All done!" >&2; exit 0 ;;
  pylint) echo "app.py:1:0: C0114: Missing module docstring"; exit 16 ;;
  flake8) exit 0 ;;
  vulture) exit 0 ;;
  radon) echo "Average complexity: A (1.0)"; exit 0 ;;
esac
exit 99
"#,
    );

    let output = bin()
        .args(["check", target.to_str().unwrap(), "--interpreter"])
        .arg(&python)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);

    let running: Vec<_> = stdout
        .lines()
        .filter(|l| l.starts_with("🚀 Running:"))
        .collect();
    assert_eq!(running.len(), 5);
    let modules = ["black", "pylint", "flake8", "vulture", "radon"];
    for (line, module) in running.iter().zip(modules) {
        assert!(line.contains(&format!("-m {module} ")), "{line}");
    }
    assert!(running[4].ends_with(&format!("radon cc {} -a", target.display())));

    assert!(stdout.contains("All done!"));
    assert!(stdout.contains("🔲 ✅ Code is already formatted."));
    assert!(stdout.contains("🔙 Exit code: 16"));
    assert!(stdout.contains("🔲 🚩 pylint found warnings or style issues"));
    assert!(stdout.contains("🔲 ✅ Code is clean: no style errors."));
    assert!(stdout.contains("🔲 ✅ No unused code found."));
    assert!(stdout.contains("Average complexity: A (1.0)"));
    assert!(stdout.contains("🔲 ✅ Run succeeded."));
}

#[test]
fn test_missing_interpreter_reports_each_tool_and_exits_cleanly() {
    let output = bin()
        .args(["check", ".", "--interpreter", "no-such-python-3b81f"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("🚀 Running:").count(), 5);
    assert_eq!(stdout.matches("❌ Error: tool not found").count(), 5);
    assert!(stdout.contains("✅ Ran 5 tool(s)"));
}

#[cfg(unix)]
#[test]
fn test_nonexistent_target_still_completes() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.py");

    // every tool reports the bad path itself; radon's target is the fourth arg
    let python = fake_interpreter(
        temp_dir.path(),
        r#"if [ "$2" = radon ]; then target="$4"; else target="$3"; fi
if [ ! -e "$target" ]; then echo "$target: No such file or directory" >&2; exit 2; fi
exit 0
"#,
    );

    let output = bin()
        .args(["check", missing.to_str().unwrap(), "--interpreter"])
        .arg(&python)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert_eq!(stdout.matches("No such file or directory").count(), 5);
    assert!(stdout.contains("🔲 ❌ Syntax error in the source file."));
    assert!(stdout.contains("🔲 🚩 pylint found warnings or style issues"));
    assert!(stdout.contains("🔲 🚩 Unexpected exit code 2 from"));
    assert!(stdout.contains("🔲 ❌ vulture failed to run."));
    assert!(stdout.contains("🔲 ❌ Critical error."));
}

#[cfg(unix)]
#[test]
fn test_tool_selection_limits_the_run() {
    let temp_dir = TempDir::new().unwrap();
    let python = fake_interpreter(temp_dir.path(), "exit 0\n");

    let output = bin()
        .args(["check", ".", "--tool", "radon", "--tool", "formatter", "--interpreter"])
        .arg(&python)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let running: Vec<_> = stdout
        .lines()
        .filter(|l| l.starts_with("🚀 Running:"))
        .collect();
    assert_eq!(running.len(), 2);
    assert!(running[0].contains("-m black"));
    assert!(running[1].contains("-m radon cc"));
}

#[test]
fn test_tools_subcommand_lists_commands_without_running() {
    let output = bin()
        .args(["tools", "src", "--interpreter", "no-such-python-3b81f"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].ends_with("no-such-python-3b81f -m black src"));
    assert!(lines[4].ends_with("no-such-python-3b81f -m radon cc src -a"));
    assert!(!stdout.contains("tool not found"));
}
