//! List manifest keys and their resolved paths

use anyhow::Result;
use pathstone_asset::{AssetResolver, ROOT_DIR_KEY};

pub fn run(manifest: &str) -> Result<()> {
    let mut resolver = AssetResolver::new(manifest);
    let keys: Vec<String> = resolver
        .load_config()?
        .flatten()
        .into_iter()
        .map(|(key, _)| key)
        .filter(|key| key != ROOT_DIR_KEY && !key.is_empty())
        .collect();

    if keys.is_empty() {
        println!("No assets in {}", manifest);
        return Ok(());
    }

    println!("{} asset(s):\n", keys.len());
    for key in &keys {
        println!("  {} -> {}", key, resolver.get_asset(key));
    }

    Ok(())
}
