use anyhow::Result;
use linediff::{DiffOptions, InlineDiffPart, LineDiff, diff_lines_with_edges, diff_stats};

fn main() -> Result<()> {
    let old = r#"fn main() {
    let x = 1;
    println!("x = {}", x);
}
"#;

    let new = r#"fn main() {
    let x = 2;
    println!("x = {}", x);
    println!("done");
}
"#;

    let records = diff_lines_with_edges(old, new, DiffOptions::default());

    for record in &records {
        match record {
            LineDiff::Context {
                content,
                old_line,
                new_line,
            } => println!("  {old_line:>4} {new_line:>4} | {}", trimmed(content)),
            LineDiff::Add {
                content, new_line, ..
            } => println!("+      {new_line:>4} | {}", trimmed(content)),
            LineDiff::Remove {
                content, old_line, ..
            } => println!("- {old_line:>4}      | {}", trimmed(content)),
            LineDiff::Change {
                old_line,
                new_line,
                inline_diffs,
                ..
            } => println!(
                "~ {old_line:>4} {new_line:>4} | {}",
                trimmed(&render_inline(inline_diffs))
            ),
            LineDiff::Divider { line } => println!("  .... after line {line}"),
        }
    }

    let stats = diff_stats(&records);
    println!("\n{} additions, {} deletions", stats.additions, stats.deletions);

    println!("\n{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

fn render_inline(parts: &[InlineDiffPart]) -> String {
    let mut out = String::new();
    for part in parts {
        match part {
            InlineDiffPart::Unchanged(value) => out.push_str(value),
            InlineDiffPart::Add(value) => {
                out.push_str("{+");
                out.push_str(value);
                out.push_str("+}");
            }
            InlineDiffPart::Remove(value) => {
                out.push_str("[-");
                out.push_str(value);
                out.push_str("-]");
            }
        }
    }
    out
}

fn trimmed(line: &str) -> &str {
    line.trim_end_matches('\n')
}
