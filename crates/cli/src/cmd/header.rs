//! Print the archive-streaming response header

use anyhow::Result;

pub fn run() -> Result<()> {
    println!("{}", manifest::header());
    Ok(())
}
