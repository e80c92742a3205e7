use anyhow::Context;
use colored::Colorize;
use revdiff_core::{compare_with, decode_text, FileDiff, LineEnding, LineKind, Segment, SegmentKind};

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let old_bytes =
        std::fs::read(&cli.old).with_context(|| format!("reading {}", cli.old.display()))?;
    let new_bytes =
        std::fs::read(&cli.new).with_context(|| format!("reading {}", cli.new.display()))?;
    let old_text = decode_text(&old_bytes)
        .with_context(|| format!("{} is not comparable text", cli.old.display()))?;
    let new_text = decode_text(&new_bytes)
        .with_context(|| format!("{} is not comparable text", cli.new.display()))?;

    let ending = if cli.crlf {
        LineEnding::CrLf
    } else {
        LineEnding::Lf
    };
    let diff = compare_with(
        old_text,
        new_text,
        cli.old.display().to_string(),
        cli.new.display().to_string(),
        ending,
    );

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&diff)?),
        OutputFormat::Text => print_side_by_side(&diff),
    }
    Ok(())
}

fn print_side_by_side(diff: &FileDiff) {
    println!("{} {}", "old:".red().bold(), diff.old_label);
    println!("{} {}", "new:".green().bold(), diff.new_label);
    println!();

    let width = diff
        .entries
        .iter()
        .map(|e| e.old_text().chars().count())
        .max()
        .unwrap_or(0)
        .max(8);

    for entry in &diff.entries {
        let marker = match entry.kind {
            LineKind::Unchanged => " ".normal(),
            LineKind::Added => "+".green().bold(),
            LineKind::Removed => "-".red().bold(),
            LineKind::Modified => "~".yellow().bold(),
        };
        let (old_column, old_len) = render_side(&entry.old_segments);
        let (new_column, _) = render_side(&entry.new_segments);
        println!(
            "{:>4} {} {}{} {} {}",
            entry.line_number.to_string().dimmed(),
            marker,
            old_column,
            " ".repeat(width.saturating_sub(old_len)),
            "│".dimmed(),
            new_column
        );
    }

    println!();
    println!(
        "{} added, {} removed, {} modified",
        diff.additions().to_string().green(),
        diff.removals().to_string().red(),
        diff.modifications().to_string().yellow()
    );
}

/// Render one side of a line with change highlighting. Returns the colored
/// string and its visible character count (escape codes excluded), which the
/// caller needs for column padding.
fn render_side(segments: &[Segment]) -> (String, usize) {
    let mut out = String::new();
    let mut visible = 0;
    for segment in segments {
        visible += segment.text.chars().count();
        let piece = match segment.kind {
            SegmentKind::Unchanged => segment.text.as_str().normal(),
            SegmentKind::Added => segment.text.as_str().green(),
            SegmentKind::Removed => segment.text.as_str().red(),
        };
        out.push_str(&piece.to_string());
    }
    (out, visible)
}
