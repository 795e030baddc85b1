//! Show the manifest root directory

use anyhow::Result;
use pathstone_asset::AssetResolver;

pub fn run(manifest: &str) -> Result<()> {
    let mut resolver = AssetResolver::new(manifest);
    resolver.load_config()?;
    println!("{}", resolver.root_dir());
    Ok(())
}
