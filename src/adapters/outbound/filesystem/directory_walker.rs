use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Build output and cache directories that never hold first-party projects
pub const IGNORED_DIR_NAMES: &[&str] = &["node_modules", "target", "build", "__pycache__"];

/// True for hidden directories and the names in [`IGNORED_DIR_NAMES`]
pub fn is_ignored_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() || entry.depth() == 0 {
        return false;
    }
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.') || IGNORED_DIR_NAMES.contains(&name))
}

/// Whether `path` has one of `extensions` (case-insensitive, without the dot)
pub fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Every regular file under `root` accepted by `matches`, in walk order
///
/// Symlinks are not followed. With `prune_ignored` the walk does not descend
/// into hidden or build/cache directories.
pub fn find_files<F>(root: &Path, prune_ignored: bool, matches: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(prune_ignored && is_ignored_dir(e)))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| matches(e.path()))
        .map(|e| e.into_path())
        .collect()
}

/// Whether at least one file under `root` is accepted by `matches`
///
/// Stops at the first hit.
pub fn any_file<F>(root: &Path, prune_ignored: bool, matches: F) -> bool
where
    F: Fn(&Path) -> bool,
{
    WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !(prune_ignored && is_ignored_dir(e)))
        .filter_map(|e| e.ok())
        .any(|e| e.file_type().is_file() && matches(e.path()))
}

/// Regular files directly inside `dir` accepted by `matches`, sorted by name
pub fn files_in_dir<F>(dir: &Path, matches: F) -> Vec<PathBuf>
where
    F: Fn(&Path) -> bool,
{
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| matches(e.path()))
        .map(|e| e.into_path())
        .collect()
}
