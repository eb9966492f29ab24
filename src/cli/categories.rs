//! CLI `categories` command: list categories with their live counts.

use anyhow::Result;

use capsule::config::CapsuleConfig;

pub async fn categories(config: &CapsuleConfig, json: bool) -> Result<()> {
    let capsule = super::open_capsule(config)?;
    let categories = capsule.list_categories().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    if categories.is_empty() {
        println!("No categories yet.");
        return Ok(());
    }

    println!("Categories");
    println!("{}", "=".repeat(30));
    for category in &categories {
        let count = capsule.count(Some(std::slice::from_ref(category))).await?;
        println!("  {:<16} {}", category, count);
    }
    Ok(())
}
