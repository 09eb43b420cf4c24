use super::detector::detect_statements;
use super::types::StatementRange;

/// The trailing call that executes a built-up command.
const RUN_SUFFIX: &str = ".Run()";

/// Statement forms that execute eagerly and never take the suffix.
const EXEMPT_CALLS: [&str; 2] = ["run.Quick(", "run.WithInput("];

/// Assertion helper calls must keep their bare closing parenthesis.
const ASSERTION_MARKER: &str = "assertion.";

/// Append `.Run()` to the last code line of each statement that needs it.
///
/// Only lines already ending in `)` are touched, so the edit cannot
/// unbalance the statement it lands on.
pub fn append_run_suffix(lines: &mut [String], ranges: &[StatementRange]) {
    for range in ranges {
        let last = &lines[range.last_code_line];

        if last.contains(RUN_SUFFIX) {
            continue;
        }
        if EXEMPT_CALLS
            .iter()
            .any(|call| lines[range.start].contains(call))
        {
            continue;
        }

        let last = &lines[range.last_code_line];
        if last.trim_end().ends_with(')') {
            if last.contains(ASSERTION_MARKER) {
                continue;
            }
            let fixed = format!("{}{}\n", last.trim_end(), RUN_SUFFIX);
            lines[range.last_code_line] = fixed;
        }
    }
}

/// Strip `.Run()` from any assertion line it ended up on, however it got
/// there. Runs over the whole document, not just the detected statements.
pub fn strip_assertion_suffix(lines: &mut [String]) {
    let misplaced = format!("){}", RUN_SUFFIX);
    for line in lines.iter_mut() {
        if line.contains(ASSERTION_MARKER) && line.contains(&misplaced) {
            *line = line.replace(&misplaced, ")");
        }
    }
}

/// Full fixup over the in-memory document: detect statement ranges, append
/// the missing suffixes, then undo any that landed on assertion lines.
pub fn fix_lines(lines: &mut [String]) {
    let ranges = detect_statements(lines);
    append_run_suffix(lines, &ranges);
    strip_assertion_suffix(lines);
}
