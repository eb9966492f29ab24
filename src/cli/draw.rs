//! CLI `next` command: draw one inspiration at random.

use anyhow::Result;

use capsule::config::CapsuleConfig;

pub async fn next(config: &CapsuleConfig, categories: &[String], json: bool) -> Result<()> {
    let capsule = super::open_capsule(config)?;

    match capsule.draw_random(Some(categories)).await? {
        Some(inspiration) => super::print_inspiration(&inspiration, json),
        None => {
            if json {
                println!("null");
            } else if categories.is_empty() {
                println!("Your capsule is empty. Add your first inspiration with `capsule add`.");
            } else {
                println!("Nothing in {}.", categories.join(", "));
            }
            Ok(())
        }
    }
}
