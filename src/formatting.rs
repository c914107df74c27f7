//! Terminal presentation of tool output.
//!
//! Linters emit flat `path:line: message` streams; the formatter partitions
//! them into one block per offending file so a developer can scan by file
//! instead of by line. Purely a presentation transform; empty input
//! produces empty output.

use colored::Colorize;
use std::io::Write;

/// One visual block: a header (usually a file path) plus its messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBlock {
    pub header: String,
    pub lines: Vec<String>,
}

/// Partition raw line-oriented tool output into per-file blocks.
///
/// A line of the form `<path>:<line>...` opens (or continues) the block for
/// `<path>`; indented continuation lines attach to the current block.
/// Free-form lines that match nothing become their own headerless block.
pub fn partition_messages(raw: &str) -> Vec<MessageBlock> {
    let mut blocks: Vec<MessageBlock> = Vec::new();

    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(path) = leading_path(line) {
            match blocks.last_mut() {
                Some(block) if block.header == path => block.lines.push(line.to_string()),
                _ => blocks.push(MessageBlock {
                    header: path,
                    lines: vec![line.to_string()],
                }),
            }
        } else if line.starts_with(|c: char| c.is_whitespace()) {
            match blocks.last_mut() {
                Some(block) => block.lines.push(line.to_string()),
                None => blocks.push(MessageBlock {
                    header: String::new(),
                    lines: vec![line.to_string()],
                }),
            }
        } else {
            blocks.push(MessageBlock {
                header: String::new(),
                lines: vec![line.to_string()],
            });
        }
    }

    blocks
}

/// Render blocks with a colored header per file.
pub fn write_messages<W: Write>(writer: &mut W, blocks: &[MessageBlock]) -> std::io::Result<()> {
    for block in blocks {
        if !block.header.is_empty() {
            writeln!(writer, "{}", block.header.cyan().bold())?;
        }
        for line in &block.lines {
            writeln!(writer, "  {line}")?;
        }
    }
    Ok(())
}

/// Format and print raw tool output to stdout.
pub fn format_messages(raw: &str) {
    let blocks = partition_messages(raw);
    let mut stdout = std::io::stdout();
    // stdout going away mid-print is not worth surfacing
    let _ = write_messages(&mut stdout, &blocks);
}

/// Print a leveled section header before a pipeline stage.
pub fn print_header(title: &str, level: u8) {
    match level {
        1 => println!("\n{}\n{}", title.bold().blue(), "=".repeat(title.len()).blue()),
        2 => println!("\n{}", title.bold()),
        _ => println!("{}", title.dimmed()),
    }
}

/// `path:line...` detection: a token before the first `:` that looks like a
/// relative or absolute file path followed by a line number.
fn leading_path(line: &str) -> Option<String> {
    let (candidate, rest) = line.split_once(':')?;
    if candidate.is_empty() || candidate.contains(char::is_whitespace) {
        return None;
    }
    // require a line number (or `line:col`) right after the path
    let after = rest.split(&[':', ' '][..]).next()?;
    if after.trim().chars().all(|c| c.is_ascii_digit()) && !after.trim().is_empty() {
        Some(candidate.to_string())
    } else {
        None
    }
}
