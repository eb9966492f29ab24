//! CLI `add` command: store a new inspiration.

use anyhow::Result;

use capsule::config::CapsuleConfig;

pub async fn add(config: &CapsuleConfig, content: &str, category: Option<&str>, json: bool) -> Result<()> {
    let capsule = super::open_capsule(config)?;
    let saved = capsule.insert(content, category).await?;

    if !json {
        println!("Stored as {}.", saved.category);
    }
    super::print_inspiration(&saved, json)
}
