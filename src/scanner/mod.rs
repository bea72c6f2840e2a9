use crate::error::{CarouselOcrError, Result};
use carousel_ocr_common::{is_image_path, Carousel};
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Image files directly inside `folder`, sorted by path.
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(CarouselOcrError::FolderNotFound(folder.display().to_string()));
    }

    let mut images: Vec<PathBuf> = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)  // no recursion
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|path| path.is_file() && is_image_path(path))
        .collect();

    images.sort();

    Ok(images)
}

/// Load folders and image files into the carousel. Each folder is one
/// batch; loose files are loaded together as a final batch.
///
/// Returns the number of records added.
pub fn load_inputs(carousel: &mut Carousel, inputs: &[PathBuf]) -> Result<usize> {
    let mut added = 0;
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            added += carousel.load_folder_entries(scan_folder(input)?, "");
        } else if input.is_file() {
            if is_image_path(input) {
                files.push(input.clone());
            } else {
                warn!("skipping non-image file {}", input.display());
            }
        } else {
            return Err(CarouselOcrError::FileNotFound(input.display().to_string()));
        }
    }

    if !files.is_empty() {
        added += carousel.load_files(files);
    }

    Ok(added)
}
