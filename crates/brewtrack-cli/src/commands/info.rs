use anyhow::Result;
use brewtrack_fetch::CatalogClient;

pub async fn handle(client: &CatalogClient, name: &str) -> Result<()> {
    match client.fetch_formula(name).await? {
        Some(formula) => {
            println!("Formula: {}", formula.name);
            println!("  Version:  {}", formula.version.as_deref().unwrap_or("N/A"));
            println!(
                "  Desc:     {}",
                formula.desc.as_deref().unwrap_or("No description available")
            );
            println!(
                "  Homepage: {}",
                formula.homepage.as_deref().unwrap_or("No homepage listed")
            );
        }
        None => {
            println!("Formula '{}' not found.", name);
        }
    }

    Ok(())
}
