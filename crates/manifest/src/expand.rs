//! Directory expansion for manifest inputs
//!
//! Callers hand the builder a mixed list of files and directories; the
//! archive has to be described file by file, so directories are expanded
//! through a recursive glob. Directory names containing glob control
//! characters are escaped first so the engine traverses them literally.

use anyhow::{anyhow, Context, Result};
use glob::MatchOptions;
use std::path::Path;

/// Expand a mixed list of files and directories into a flat file list.
///
/// Plain file paths pass through untouched. Directory paths are made
/// absolute, stripped of any trailing separator and expanded recursively;
/// only regular files survive the expansion (symlinks to regular files are
/// followed, other entries are skipped). A path that is neither an existing
/// file nor an existing directory is an error.
pub fn file_list<I, S>(files: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut list = Vec::new();
    for entry in files {
        let entry = entry.as_ref();
        let path = Path::new(entry);
        if path.is_dir() {
            expand_dir(entry, &mut list)?;
        } else if path.is_file() {
            list.push(entry.to_string());
        } else {
            return Err(anyhow!("no such file or directory: {entry}"));
        }
    }
    Ok(list)
}

/// Escape glob control characters so a path is matched literally.
///
/// The engine treats `?`, `*`, `[` and `]` as pattern syntax; a directory
/// named `c/[brackets]` would otherwise be read as a character class. Each
/// control character is wrapped in a bracket class of its own.
pub fn escape_glob_pattern(path: &str) -> String {
    glob::Pattern::escape(path)
}

fn expand_dir(dir: &str, list: &mut Vec<String>) -> Result<()> {
    let absolute = absolutize(dir)?;
    // Trailing separators would double up in descendant paths
    let absolute = absolute.trim_end_matches('/');

    let pattern = format!("{}/**/*", escape_glob_pattern(absolute));
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: false,
        // Wildcards do not match a leading dot, so dotfiles stay out of
        // the archive unless listed explicitly
        require_literal_leading_dot: true,
    };

    let paths = glob::glob_with(&pattern, options)
        .with_context(|| format!("invalid glob pattern for directory {dir}"))?;
    for matched in paths {
        let path = matched.with_context(|| format!("failed to read entry under {dir}"))?;
        if path.is_file() {
            let path = path
                .to_str()
                .ok_or_else(|| anyhow!("path under {dir} is not valid UTF-8"))?;
            list.push(path.to_string());
        }
    }
    Ok(())
}

/// Make a directory path absolute without resolving symlinks. Member-name
/// stripping works on the path as given, so symlink targets must not leak in.
fn absolutize(dir: &str) -> Result<String> {
    let path = Path::new(dir);
    if path.is_absolute() {
        return Ok(dir.to_string());
    }
    let joined = std::env::current_dir()
        .context("Failed to get current directory")?
        .join(path);
    joined
        .to_str()
        .map(|p| p.to_string())
        .ok_or_else(|| anyhow!("directory path is not valid UTF-8: {dir}"))
}
