//! Manifest assembly from an expanded file list
//!
//! `build` is a pure, synchronous transform: normalize inputs, expand
//! directories, derive the member-name prefix, then render one line per
//! file. All state lives and dies within the call; the only caller-owned
//! piece is the optional checksum cache, which is read but never written.

use crate::checksum;
use crate::encode;
use crate::expand;
use crate::prefix;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Options controlling a manifest build
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Compute CRC-32 checksums; when false every line carries the `-`
    /// placeholder (default: true)
    pub crc: bool,
    /// Pre-computed checksums keyed by the exact path string; a non-empty
    /// entry short-circuits computation for that path (default: none)
    pub crc_cache: Option<HashMap<String, String>>,
    /// Explicit root for archive member names instead of the detected
    /// common prefix (default: none, prefix is inferred)
    pub base_dir: Option<String>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            crc: true,
            crc_cache: None,
            base_dir: None,
        }
    }
}

/// One line of the manifest, describing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLine {
    /// Lowercase hex CRC-32, or `-` when checksums are disabled
    pub crc: String,
    /// Byte size on disk at build time
    pub size: u64,
    /// Percent-encoded path the proxy fetches internally
    pub url: String,
    /// Path of the file inside the archive
    pub name: String,
}

impl fmt::Display for ManifestLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.crc, self.size, self.url, self.name)
    }
}

/// Build the file manifest for the archive-streaming proxy.
///
/// `files` may mix plain files and directories; directories are expanded
/// recursively. Returns one line per file joined by `\n` with no trailing
/// newline. Line order follows expansion order; callers requiring a
/// deterministic order sort the result. An empty input yields an empty
/// string; a missing or unreadable path fails the whole build before any
/// output is produced.
pub fn build<I, S>(files: I, options: &BuildOptions) -> Result<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let list = expand::file_list(files)?;
    if list.is_empty() {
        return Ok(String::new());
    }

    let mut prefix = match &options.base_dir {
        Some(dir) => dir.clone(),
        None => prefix::detect_common_prefix(&list),
    };
    if !prefix.ends_with('/') {
        prefix.push('/');
    }

    debug!(files = list.len(), prefix = %prefix, "building manifest");

    let mut lines = Vec::with_capacity(list.len());
    for file in &list {
        lines.push(manifest_line(file, &prefix, options)?.to_string());
    }
    Ok(lines.join("\n"))
}

/// Get the response header that signals the downstream proxy to treat the
/// body as a manifest and stream a ZIP from it.
pub fn header() -> &'static str {
    "X-Archive-Files: zip"
}

fn manifest_line(file: &str, prefix: &str, options: &BuildOptions) -> Result<ManifestLine> {
    let size = std::fs::metadata(file)
        .with_context(|| format!("failed to stat {file}"))?
        .len();
    Ok(ManifestLine {
        crc: checksum::compute(file, options)?,
        size,
        url: encode::encode(file),
        name: member_name(file, prefix),
    })
}

/// Strip the archive root from the path, textually. A path the prefix does
/// not occur in (symlink resolution differences) is kept unchanged.
fn member_name(path: &str, prefix: &str) -> String {
    path.replacen(prefix, "", 1)
}
