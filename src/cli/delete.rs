use anyhow::Result;

use capsule::config::CapsuleConfig;

pub async fn delete(config: &CapsuleConfig, id: &str) -> Result<()> {
    let capsule = super::open_capsule(config)?;
    capsule.delete(id).await?;
    println!("Deleted {id}.");
    Ok(())
}
