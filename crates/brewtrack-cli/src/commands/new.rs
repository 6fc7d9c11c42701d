use anyhow::Result;
use brewtrack_engine::{NewOutcome, Tracker};
use brewtrack_fetch::CatalogSource;

use crate::render;

pub async fn handle(
    source: &dyn CatalogSource,
    tracker: &Tracker,
    limit: Option<usize>,
) -> Result<()> {
    let current = source.fetch_all().await?;

    match tracker.run_new(&current, limit)? {
        NewOutcome::NoBaseline => {
            anyhow::bail!(
                "no stored formula data found; run 'brewtrack update' first to establish a baseline"
            )
        }
        NewOutcome::Added { formulas, total } => {
            if formulas.is_empty() {
                println!("No new formulas since last update.");
                return Ok(());
            }

            if formulas.len() < total {
                println!(
                    "Newly Added Formulas ({} of {} shown):\n",
                    formulas.len(),
                    total
                );
            } else {
                println!("Newly Added Formulas ({}):\n", total);
            }
            render::print_formula_blocks(formulas.iter());
        }
    }

    Ok(())
}
