//! Resolve a single asset key

use anyhow::Result;
use pathstone_asset::AssetResolver;

pub fn run(manifest: &str, key: &str, strict: bool) -> Result<()> {
    let mut resolver = AssetResolver::new(manifest);
    resolver.load_config()?;

    let path = resolver.get_asset(key);
    if path.is_empty() {
        if strict {
            anyhow::bail!("Key '{}' did not resolve against {}", key, manifest);
        }
        // Non-strict misses mirror the library contract: empty output, exit 0.
        return Ok(());
    }

    println!("{}", path);
    Ok(())
}
