//! Plain-text rendering of diff results and formula listings

use brewtrack_core::{DiffResult, Formula};

const DESC_WIDTH: usize = 60;
const DESC_WIDTH_NARROW: usize = 50;

/// Print the three change categories and a summary line.
///
/// Empty categories are skipped, matching the summary counts.
pub fn print_diff(diff: &DiffResult) {
    if !diff.added.is_empty() {
        let name_width = column_width(diff.added.iter().map(|f| f.name.len()));
        println!("New Formulas ({}):", diff.added.len());
        for formula in &diff.added {
            println!(
                "  {:<name_width$}  {:<12}  {}",
                formula.name,
                version_label(formula),
                truncate(formula.desc.as_deref().unwrap_or("No description"), DESC_WIDTH),
            );
        }
        println!();
    }

    if !diff.removed.is_empty() {
        let name_width = column_width(diff.removed.iter().map(|f| f.name.len()));
        println!("Removed Formulas ({}):", diff.removed.len());
        for formula in &diff.removed {
            println!(
                "  {:<name_width$}  {:<12}  {}",
                formula.name,
                version_label(formula),
                truncate(formula.desc.as_deref().unwrap_or("No description"), DESC_WIDTH),
            );
        }
        println!();
    }

    if !diff.updated.is_empty() {
        let name_width = column_width(diff.updated.iter().map(|u| u.current.name.len()));
        println!("Updated Formulas ({}):", diff.updated.len());
        for update in &diff.updated {
            println!(
                "  {:<name_width$}  {} -> {}  {}",
                update.current.name,
                version_label(&update.previous),
                version_label(&update.current),
                truncate(
                    update.current.desc.as_deref().unwrap_or("No description"),
                    DESC_WIDTH_NARROW,
                ),
            );
        }
        println!();
    }

    println!(
        "Summary: {} added, {} removed, {} updated",
        diff.added.len(),
        diff.removed.len(),
        diff.updated.len()
    );
}

/// Print formulas as a detail listing, one block per formula.
pub fn print_formula_blocks<'a>(formulas: impl Iterator<Item = &'a Formula>) {
    for formula in formulas {
        println!("{}", formula.name);
        println!("  Version:  {}", version_label(formula));
        if let Some(desc) = &formula.desc {
            println!("  Desc:     {}", desc);
        }
        if let Some(homepage) = &formula.homepage {
            println!("  Homepage: {}", homepage);
        }
        println!();
    }
}

fn version_label(formula: &Formula) -> &str {
    formula.version.as_deref().unwrap_or("N/A")
}

fn column_width(lengths: impl Iterator<Item = usize>) -> usize {
    lengths.max().unwrap_or(0)
}

/// Shorten to at most `width` characters, ellipsis included.
fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate("short", 60), "short");
    }

    #[test]
    fn truncate_adds_ellipsis() {
        let long = "x".repeat(80);
        let out = truncate(&long, 60);
        assert_eq!(out.chars().count(), 60);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        let long = "ü".repeat(80);
        let out = truncate(&long, 10);
        assert_eq!(out.chars().count(), 10);
    }
}
