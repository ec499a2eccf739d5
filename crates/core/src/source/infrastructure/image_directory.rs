use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::shared::constants::IMAGE_EXTENSIONS;

/// Lists image files under `dir` by extension, sorted by path.
///
/// Subdirectories are walked only when `recursive` is set. Unreadable
/// subdirectories are skipped with a warning; an unreadable `dir` is an error.
pub fn list_images(dir: &Path, recursive: bool) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect(dir, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect(dir: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                if let Err(e) = collect(&path, recursive, files) {
                    log::warn!("Skipping directory {}: {e}", path.display());
                }
            }
        } else if is_image(&path) {
            files.push(path);
        }
    }
    Ok(())
}

pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
