use anyhow::Context;
use runfix::rewriter;

/// The generated test file this tool fixes up, relative to the working
/// directory it is run from.
const TARGET_FILE: &str = "command_test.go";

fn main() -> anyhow::Result<()> {
    let mut lines = rewriter::read_document(TARGET_FILE)
        .with_context(|| format!("could not read {}", TARGET_FILE))?;

    rewriter::fix_lines(&mut lines);

    rewriter::write_document(TARGET_FILE, &lines)
        .with_context(|| format!("could not write {}", TARGET_FILE))?;

    println!("Fixed {}", TARGET_FILE);
    Ok(())
}
