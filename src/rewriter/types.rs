/// One detected `result := run...` statement: the line it starts on and the
/// last non-blank line belonging to it. Single-line statements have
/// `start == last_code_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementRange {
    pub start: usize,
    pub last_code_line: usize,
}
