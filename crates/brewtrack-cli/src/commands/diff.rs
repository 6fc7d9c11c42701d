use anyhow::Result;
use brewtrack_engine::{DiffOutcome, Tracker};
use brewtrack_fetch::CatalogSource;

use crate::render;

pub async fn handle(source: &dyn CatalogSource, tracker: &Tracker) -> Result<()> {
    let current = source.fetch_all().await?;

    match tracker.run_diff(&current)? {
        DiffOutcome::NoBaseline => {
            anyhow::bail!(
                "no stored formula data found; run 'brewtrack update' first to establish a baseline"
            )
        }
        DiffOutcome::Unchanged => {
            println!("No changes since the last update.");
        }
        DiffOutcome::Changes(diff) => render::print_diff(&diff),
    }

    Ok(())
}
