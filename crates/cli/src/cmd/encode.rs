//! Percent-encode a path for use in a manifest line

use anyhow::Result;

pub fn run(path: &str) -> Result<()> {
    println!("{}", manifest::encode(path));
    Ok(())
}
