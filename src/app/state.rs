use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::path::Path;

use serde::Serialize;

use crate::app::error::GalleryError;

/// Absolute path of an image on disk. Two references are the same image
/// when their path strings are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    pub fn file_name(&self) -> &str {
        self.as_path()
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.0)
    }
}

impl Display for ImageRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct GallerySession {
    images: Vec<ImageRef>,
    selected: BTreeSet<ImageRef>,
    page: usize,
    page_size: usize,
}

impl GallerySession {
    pub fn new(images: Vec<ImageRef>, page_size: usize) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::EmptyInput);
        }
        if page_size == 0 {
            return Err(GalleryError::InvalidInput(
                "page size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            images,
            selected: BTreeSet::new(),
            page: 0,
            page_size,
        })
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.images.len().div_ceil(self.page_size)
    }

    pub fn page_items(&self) -> &[ImageRef] {
        let start = self.page * self.page_size;
        let end = (start + self.page_size).min(self.images.len());
        &self.images[start..end]
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 0
    }

    pub fn has_next_page(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    pub fn advance(&mut self) -> bool {
        if !self.has_next_page() {
            return false;
        }
        self.page += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if !self.has_previous_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    pub fn contains(&self, path: &ImageRef) -> bool {
        self.images.contains(path)
    }

    pub fn is_selected(&self, path: &ImageRef) -> bool {
        self.selected.contains(path)
    }

    /// Flips membership and returns the new state.
    pub fn toggle(&mut self, path: &ImageRef) -> bool {
        if self.selected.remove(path) {
            false
        } else {
            self.selected.insert(path.clone());
            true
        }
    }

    pub fn selected(&self) -> &BTreeSet<ImageRef> {
        &self.selected
    }
}
