use anyhow::Result;

use capsule::config::CapsuleConfig;

/// Run a keyword search from the terminal.
pub async fn search(config: &CapsuleConfig, query: &str, json: bool) -> Result<()> {
    let capsule = super::open_capsule(config)?;
    let results = capsule.search(query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} result(s)\n", results.len());
    for (i, result) in results.iter().enumerate() {
        println!("  {}. [{}] {}", i + 1, result.category, result.id);
        println!("     {}", super::truncate_preview(&result.content, 120));
        println!();
    }

    Ok(())
}
