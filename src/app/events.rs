use crate::app::state::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    ThumbnailClicked { path: ImageRef },
    ThumbnailRightClicked { path: ImageRef },
    NavigatePrev,
    NavigateNext,
    SaveRequested,
}

/// Work the UI shell has to carry out after an event was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEffect {
    OpenPreview(ImageRef),
    Saved { path: String, count: usize },
    SaveFailed(String),
}
