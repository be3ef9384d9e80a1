use std::path::Path;

use eframe::egui;

use crate::app::error::GalleryError;
use crate::app::state::ImageRef;
use crate::cache::thumbs::{decode_scaled, DecodedRgba, Scaling};

/// Preview image for the dialog, or the reason it could not be shown.
pub enum PreviewImage {
    Ready(egui::TextureHandle),
    Failed(String),
}

/// Decodes `path` scaled up or down to fill the viewport, aspect kept.
pub fn decode_preview(
    path: &Path,
    max_width: u32,
    max_height: u32,
) -> Result<DecodedRgba, GalleryError> {
    decode_scaled(path, max_width, max_height, Scaling::Fit)
}

pub fn load_preview(
    ctx: &egui::Context,
    path: &ImageRef,
    max_width: u32,
    max_height: u32,
) -> PreviewImage {
    match decode_preview(path.as_path(), max_width, max_height) {
        Ok(decoded) => PreviewImage::Ready(ctx.load_texture(
            format!("preview_{path}"),
            decoded.to_color_image(),
            egui::TextureOptions::LINEAR,
        )),
        Err(error) => {
            log::warn!("preview unavailable for {path}: {error}");
            PreviewImage::Failed(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    #[test]
    fn small_image_fills_preview_viewport() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("tiny.png");
        let img = ImageBuffer::from_fn(100, 80, |_x, _y| Rgb([200_u8, 10_u8, 10_u8]));
        img.save(&src).expect("save");

        let preview = decode_preview(&src, 800, 600).expect("preview");

        assert_eq!((preview.width, preview.height), (750, 600));
        assert_eq!(preview.pixels.len(), 750 * 600 * 4);
    }

    #[test]
    fn large_image_shrinks_into_preview_viewport() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("wide.png");
        let img = ImageBuffer::from_fn(1600, 400, |_x, _y| Rgb([0_u8, 0_u8, 0_u8]));
        img.save(&src).expect("save");

        let preview = decode_preview(&src, 800, 600).expect("preview");

        assert_eq!((preview.width, preview.height), (800, 200));
    }

    #[test]
    fn unreadable_preview_is_a_decode_error() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("broken.jpg");
        std::fs::write(&src, b"not a jpeg").expect("write");

        assert!(matches!(
            decode_preview(&src, 800, 600),
            Err(GalleryError::Decode(_))
        ));
    }
}
