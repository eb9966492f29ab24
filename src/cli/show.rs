//! CLI `show` command: display a single inspiration by id.

use anyhow::{bail, Result};

use capsule::config::CapsuleConfig;

pub async fn show(config: &CapsuleConfig, id: &str, json: bool) -> Result<()> {
    let capsule = super::open_capsule(config)?;
    match capsule.get(id).await? {
        Some(inspiration) => super::print_inspiration(&inspiration, json),
        None => bail!("inspiration not found: {id}"),
    }
}
