//! Common prefix detection for archive member names
//!
//! The prefix is the ancestor path stripped from every file to form its
//! member name inside the archive. Detection is character-wise over the
//! sorted parent directories, not segment-aware: two parents sharing a
//! partial segment name truncate the prefix mid-segment (`/data/ab` and
//! `/data/ac` yield `/data/a`). That behavior is load-bearing for existing
//! manifests and is pinned by the tests below.

/// Compute the directory prefix shared by every file in the list.
///
/// A single file yields its parent directory, so the member name is the
/// bare filename. Several files yield the longest common leading character
/// run of the lexicographically smallest and largest parent directories.
pub fn detect_common_prefix(list: &[String]) -> String {
    if list.len() == 1 {
        return parent_dir(&list[0]).to_string();
    }

    let mut parents: Vec<&str> = list.iter().map(|p| parent_dir(p)).collect();
    parents.sort_unstable();
    match (parents.first(), parents.last()) {
        (Some(min), Some(max)) => common_prefix(min, max),
        _ => String::new(),
    }
}

/// Longest common leading character run of two strings
fn common_prefix(min: &str, max: &str) -> String {
    min.chars()
        .zip(max.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a)
        .collect()
}

/// Textual dirname: everything before the last separator
fn parent_dir(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(idx) => &path[..idx],
        None => ".",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_single_file_uses_parent_directory() {
        let list = paths(&["/data/a/lorem.txt"]);
        assert_eq!(detect_common_prefix(&list), "/data/a");
    }

    #[test]
    fn test_shared_directory_is_the_prefix() {
        let list = paths(&["/data/a/lorem.txt", "/data/a/ipsum.txt"]);
        assert_eq!(detect_common_prefix(&list), "/data/a");
    }

    #[test]
    fn test_prefix_stops_one_level_above_diverging_parents() {
        let list = paths(&[
            "/data/a/lorem.txt",
            "/data/a/ipsum.txt",
            "/data/b/Cargo.png",
        ]);
        assert_eq!(detect_common_prefix(&list), "/data/");
    }

    #[test]
    fn test_prefix_can_truncate_mid_segment() {
        let list = paths(&["/data/ab/one.txt", "/data/ac/two.txt"]);
        assert_eq!(detect_common_prefix(&list), "/data/a");
    }

    #[test]
    fn test_nested_parent_is_not_over_stripped() {
        let list = paths(&["/data/a/lorem.txt", "/data/a/d/my_file.txt"]);
        assert_eq!(detect_common_prefix(&list), "/data/a");
    }

    #[test]
    fn test_root_level_file() {
        let list = paths(&["/lorem.txt"]);
        assert_eq!(detect_common_prefix(&list), "/");
    }

    #[test]
    fn test_parent_dir_semantics() {
        assert_eq!(parent_dir("/data/a/lorem.txt"), "/data/a");
        assert_eq!(parent_dir("/lorem.txt"), "/");
        assert_eq!(parent_dir("lorem.txt"), ".");
    }
}
