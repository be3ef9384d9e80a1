use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use crate::app::error::GalleryError;
use crate::app::state::ImageRef;

pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub scanned_files: usize,
    pub images: Vec<ImageRef>,
}

pub fn is_supported_image(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };
    let ext = ext.to_ascii_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext.as_str())
}

/// Lists the images directly inside `folder`, sorted by absolute path.
pub fn scan_images(folder: &Path) -> Result<ScanSummary, GalleryError> {
    if !folder.is_dir() {
        return Err(GalleryError::InvalidInput(format!(
            "folder does not exist or is not a directory: {}",
            folder.display()
        )));
    }

    let entries = WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter();
    let mut summary = collect_images(entries)?;

    summary.images.sort();
    log::info!(
        "scanned {}: {} files, {} images",
        folder.display(),
        summary.scanned_files,
        summary.images.len()
    );
    Ok(summary)
}

/// Errors reading the folder itself abort the scan. Errors on single
/// entries (broken links, vanished files) skip that entry.
fn collect_images(
    entries: impl Iterator<Item = walkdir::Result<DirEntry>>,
) -> Result<ScanSummary, GalleryError> {
    let mut summary = ScanSummary::default();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) if error.depth() == 0 => {
                return Err(GalleryError::Io(format!("failed to read folder: {error}")));
            }
            Err(error) => {
                log::warn!("skipping unreadable entry: {error}");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        summary.scanned_files += 1;
        let file_path = entry.path();
        if !is_supported_image(file_path) {
            continue;
        }

        let canonical = file_path.canonicalize().map_err(|error| {
            GalleryError::Io(format!("failed to resolve {}: {error}", file_path.display()))
        })?;
        match canonical.into_os_string().into_string() {
            Ok(path) => summary.images.push(ImageRef::new(path)),
            Err(raw) => log::warn!("skipping image with non UTF-8 path: {raw:?}"),
        }
    }

    Ok(summary)
}
