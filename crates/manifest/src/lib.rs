//! Manifest builder for proxy-streamed ZIP downloads
//!
//! This crate produces the file manifest consumed by an archive-streaming
//! reverse proxy (nginx mod_zip): one line per file carrying a CRC-32
//! checksum, the byte size, the percent-encoded retrieval path and the
//! archive member name. The proxy assembles the ZIP on the fly from those
//! lines; nothing here ever writes an archive to disk.

pub mod builder;
pub mod checksum;
pub mod encode;
pub mod expand;
pub mod prefix;

// Re-export main entry points for convenience
pub use builder::{build, header, BuildOptions, ManifestLine};
pub use encode::{decode, encode};
pub use expand::escape_glob_pattern;

/// Common result type used throughout the manifest crate
pub type Result<T> = anyhow::Result<T>;
