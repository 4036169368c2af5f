//! Streaming CRC-32 computation with a caller-supplied cache
//!
//! The downstream proxy copies the checksum verbatim into the ZIP entry's
//! CRC-32 field, so the value must be the zlib/ISO-3309 polynomial over the
//! file's exact bytes. Files can be arbitrarily large; they are folded into
//! the accumulator in fixed-size chunks, never held in memory whole.

use crate::builder::BuildOptions;
use anyhow::{Context, Result};
use flate2::Crc;
use std::fs::File;
use std::io::{BufReader, Read};

/// Chunk size for streaming reads
const BUFFER_SIZE: usize = 8 * 1024;

/// Resolve the checksum field for one file.
///
/// Returns `"-"` when checksums are disabled, the cached string when the
/// cache holds a non-empty entry for the exact path key, or a freshly
/// computed CRC-32 rendered as unpadded lowercase hex.
pub fn compute(file: &str, options: &BuildOptions) -> Result<String> {
    if !options.crc {
        return Ok("-".to_string());
    }

    // Honor the cache; an empty value is a miss, not an error
    if let Some(cache) = &options.crc_cache {
        if let Some(cached) = cache.get(file) {
            if !cached.is_empty() {
                return Ok(cached.clone());
            }
        }
    }

    Ok(format!("{:x}", file_crc32(file)?))
}

/// Stream a file through the CRC-32 accumulator in `BUFFER_SIZE` chunks
pub fn file_crc32(path: &str) -> Result<u32> {
    let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
    let mut reader = BufReader::new(file);
    let mut crc = Crc::new();

    let mut buffer = [0u8; BUFFER_SIZE];
    loop {
        let bytes_read = reader
            .read(&mut buffer)
            .with_context(|| format!("failed to read {path}"))?;
        if bytes_read == 0 {
            break;
        }
        crc.update(&buffer[..bytes_read]);
    }

    Ok(crc.sum())
}
