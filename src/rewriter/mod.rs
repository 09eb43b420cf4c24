mod detector;
mod document;
mod passes;
mod types;

pub use detector::detect_statements;
pub use document::{read_document, split_lines, write_document};
pub use passes::{append_run_suffix, fix_lines, strip_assertion_suffix};
pub use types::StatementRange;
