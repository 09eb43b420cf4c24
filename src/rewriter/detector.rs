use super::types::StatementRange;

/// Statement starts recognized in the generated test source. All three sit
/// behind a single leading tab inside a test function body.
const STATEMENT_STARTS: [&str; 3] = [
    "\tresult := run.Command",
    "\tresult := run.Quick",
    "\tresult := run.WithInput",
];

/// Continuation lines of a statement are indented one level deeper.
const CONTINUATION_INDENT: &str = "\t\t";

fn is_statement_start(line: &str) -> bool {
    STATEMENT_STARTS.iter().any(|m| line.contains(m))
}

/// Scan for `result := run...` statements and record where each one ends.
///
/// A statement extends over following lines while they keep the deeper
/// indentation; a blank line or a line back at statement depth closes it.
/// The last non-blank line of the range is what later passes edit.
pub fn detect_statements(lines: &[String]) -> Vec<StatementRange> {
    let mut ranges = Vec::new();
    let mut i = 0usize;

    while i < lines.len() {
        if !is_statement_start(&lines[i]) {
            i += 1;
            continue;
        }

        let start = i;
        let mut end = i + 1;
        while end < lines.len() {
            let next = &lines[end];
            if next.trim().is_empty() {
                break;
            }
            if next.starts_with(CONTINUATION_INDENT) {
                end += 1;
            } else {
                break;
            }
        }

        // Walk back over trailing blank lines, never past the start line.
        let mut last_code_line = end - 1;
        while last_code_line > start && lines[last_code_line].trim().is_empty() {
            last_code_line -= 1;
        }

        ranges.push(StatementRange {
            start,
            last_code_line,
        });
        i = end;
    }

    ranges
}
