use std::path::{Path, PathBuf};

use crate::app::error::GalleryError;
use crate::app::events::{GalleryEffect, GalleryEvent};
use crate::app::grid::{grid_columns, ThumbnailGrid};
use crate::app::state::{GallerySession, ImageRef};
use crate::catalog::selection_store::write_selection;

pub const DEFAULT_OUTPUT_FILE: &str = "selected_images.json";

pub struct GalleryController {
    session: GallerySession,
    grid: ThumbnailGrid,
    output_path: PathBuf,
}

impl GalleryController {
    pub fn initialize(image_paths: Vec<ImageRef>, page_size: usize) -> Result<Self, GalleryError> {
        let session = GallerySession::new(image_paths, page_size)?;
        let mut controller = Self {
            session,
            grid: ThumbnailGrid::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
        };
        controller.rebuild_grid();
        Ok(controller)
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn session(&self) -> &GallerySession {
        &self.session
    }

    pub fn grid(&self) -> &ThumbnailGrid {
        &self.grid
    }

    pub fn current_page_items(&self) -> &[ImageRef] {
        self.session.page_items()
    }

    pub fn page_label(&self) -> String {
        format!(
            "Page {} of {}",
            self.session.page() + 1,
            self.session.total_pages()
        )
    }

    pub fn selection_count(&self) -> usize {
        self.session.selected().len()
    }

    pub fn go_to_next_page(&mut self) -> bool {
        if !self.session.advance() {
            return false;
        }
        self.rebuild_grid();
        true
    }

    pub fn go_to_previous_page(&mut self) -> bool {
        if !self.session.retreat() {
            return false;
        }
        self.rebuild_grid();
        true
    }

    /// Returns the new membership of `path`. Unknown paths are ignored.
    pub fn toggle_selection(&mut self, path: &ImageRef) -> bool {
        if !self.session.contains(path) {
            log::warn!("ignoring toggle for unknown image {path}");
            return false;
        }

        let selected = self.session.toggle(path);
        self.grid.set_selected(path, selected);
        log::debug!("toggled {path}: selected={selected}");
        selected
    }

    pub fn save_selection(&self, destination: &Path) -> Result<usize, GalleryError> {
        let count = write_selection(destination, self.session.selected())?;
        log::info!(
            "Selected images saved to {} ({count} paths)",
            destination.display()
        );
        Ok(count)
    }

    pub fn request_preview(&self, path: &ImageRef) -> GalleryEffect {
        GalleryEffect::OpenPreview(path.clone())
    }

    pub fn dispatch(&mut self, event: GalleryEvent) -> Option<GalleryEffect> {
        match event {
            GalleryEvent::ThumbnailClicked { path } => {
                self.toggle_selection(&path);
                None
            }
            GalleryEvent::ThumbnailRightClicked { path } => Some(self.request_preview(&path)),
            GalleryEvent::NavigatePrev => {
                self.go_to_previous_page();
                None
            }
            GalleryEvent::NavigateNext => {
                self.go_to_next_page();
                None
            }
            GalleryEvent::SaveRequested => {
                let destination = self.output_path.clone();
                match self.save_selection(&destination) {
                    Ok(count) => Some(GalleryEffect::Saved {
                        path: destination.display().to_string(),
                        count,
                    }),
                    Err(error) => {
                        log::error!("save failed: {error}");
                        Some(GalleryEffect::SaveFailed(error.to_string()))
                    }
                }
            }
        }
    }

    fn rebuild_grid(&mut self) {
        self.grid = ThumbnailGrid::default();
        let session = &self.session;
        self.grid = ThumbnailGrid::build(
            session.page_items(),
            grid_columns(session.page_size()),
            |path| session.is_selected(path),
        );
        log::debug!("showing {}", self.page_label());
    }
}
