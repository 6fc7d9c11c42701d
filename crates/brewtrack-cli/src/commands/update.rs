use anyhow::Result;
use brewtrack_engine::{Tracker, UpdateOutcome};
use brewtrack_fetch::CatalogSource;

pub async fn handle(source: &dyn CatalogSource, tracker: &Tracker) -> Result<()> {
    let current = source.fetch_all().await?;

    match tracker.run_update(&current)? {
        UpdateOutcome::BaselineEstablished(metadata) => {
            println!(
                "✓ Baseline established with {} formulas",
                metadata.formula_count
            );
            println!("  Hash: {}", &metadata.content_hash[..12]);
        }
        UpdateOutcome::Unchanged(metadata) => {
            println!(
                "Formula data is already up to date ({} formulas).",
                metadata.formula_count
            );
        }
        UpdateOutcome::Updated(metadata) => {
            println!(
                "✓ Successfully updated formula data. Total formulas: {}",
                metadata.formula_count
            );
        }
    }

    Ok(())
}
