use std::path::PathBuf;

/// Turns a package such as `org.acme-lib_core` into `org/acme/lib/core/<file>`.
///
/// `.`, `-` and `_` all act as separators; empty segments are dropped, so a
/// missing or blank package yields just the file name.
pub fn get_group_as_file_path(group: Option<&str>, file: &str) -> PathBuf {
    let mut path: PathBuf = group
        .unwrap_or_default()
        .trim()
        .split(['.', '-', '_'])
        .filter(|segment| !segment.is_empty())
        .collect();
    path.push(file);
    path
}
