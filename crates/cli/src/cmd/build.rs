//! Build a manifest from files and directories

use anyhow::{Context, Result};
use manifest::BuildOptions;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub fn run(
    paths: &[String],
    base_dir: Option<String>,
    no_crc: bool,
    crc_cache: Option<&Path>,
    with_header: bool,
) -> Result<()> {
    let options = BuildOptions {
        crc: !no_crc,
        crc_cache: crc_cache.map(load_cache).transpose()?,
        base_dir,
    };
    if let Some(cache) = &options.crc_cache {
        debug!(entries = cache.len(), "loaded CRC cache");
    }

    let text = manifest::build(paths, &options)?;

    if with_header {
        println!("{}", manifest::header());
    }
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

/// Load a JSON object mapping file paths to checksum strings
fn load_cache(path: &Path) -> Result<HashMap<String, String>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read CRC cache {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("invalid CRC cache {}", path.display()))
}
