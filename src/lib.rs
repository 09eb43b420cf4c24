//! Fixup tool for generated `command_test.go` files: appends the `.Run()`
//! call to `result := run.Command(...)` statements that are missing it.

pub mod rewriter;
