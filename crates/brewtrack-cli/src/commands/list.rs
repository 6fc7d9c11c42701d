use anyhow::Result;
use brewtrack_fetch::CatalogSource;

use crate::render;

pub async fn handle(source: &dyn CatalogSource, limit: Option<usize>) -> Result<()> {
    let snapshot = source.fetch_all().await?;

    if snapshot.is_empty() {
        println!("No formulas found.");
        return Ok(());
    }

    println!("Found {} formulas\n", snapshot.len());

    let shown = limit.unwrap_or(snapshot.len());
    render::print_formula_blocks(snapshot.records().take(shown));

    if shown < snapshot.len() {
        println!("... and {} more (raise --limit to see them)", snapshot.len() - shown);
    }

    Ok(())
}
