use std::collections::HashMap;
use std::path::Path;

use eframe::egui;
use image::imageops::FilterType;
use image::ImageReader;

use crate::app::error::GalleryError;
use crate::app::state::ImageRef;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRgba {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl DecodedRgba {
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.pixels,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Shrink to fit the box, leave smaller images untouched.
    ShrinkOnly,
    /// Scale up or down until the image touches the box.
    Fit,
}

/// Largest size with the same aspect ratio that fits the box. Never
/// upscales.
pub fn fit_within(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width.max(1), height.max(1));
    }
    fit_to(width, height, max_width, max_height)
}

/// Size with the same aspect ratio that fills the box along one side.
pub fn fit_to(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    let (width, height) = (width.max(1), height.max(1));
    let scale = f64::min(
        f64::from(max_width) / f64::from(width),
        f64::from(max_height) / f64::from(height),
    );
    let scaled_width = (f64::from(width) * scale).round() as u32;
    let scaled_height = (f64::from(height) * scale).round() as u32;
    (
        scaled_width.clamp(1, max_width.max(1)),
        scaled_height.clamp(1, max_height.max(1)),
    )
}

pub fn decode_scaled(
    path: &Path,
    max_width: u32,
    max_height: u32,
    scaling: Scaling,
) -> Result<DecodedRgba, GalleryError> {
    let image = ImageReader::open(path)
        .map_err(|error| GalleryError::Io(format!("{}: {error}", path.display())))?
        .with_guessed_format()
        .map_err(|error| GalleryError::Decode(format!("{}: {error}", path.display())))?
        .decode()
        .map_err(|error| GalleryError::Decode(format!("{}: {error}", path.display())))?;

    let source = (image.width(), image.height());
    let (width, height) = match scaling {
        Scaling::ShrinkOnly => fit_within(source.0, source.1, max_width, max_height),
        Scaling::Fit => fit_to(source.0, source.1, max_width, max_height),
    };
    let scaled = if (width, height) == source {
        image
    } else if width > source.0 || height > source.1 {
        image.resize_exact(width, height, FilterType::Triangle)
    } else {
        image.thumbnail_exact(width, height)
    };

    let rgba = scaled.to_rgba8();
    Ok(DecodedRgba {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}

pub fn load_thumbnail(path: &Path, size: u32) -> Result<DecodedRgba, GalleryError> {
    decode_scaled(path, size, size, Scaling::ShrinkOnly)
}

pub fn placeholder(size: u32) -> DecodedRgba {
    let side = size.max(1);
    let pixels = [48_u8, 48_u8, 48_u8, 255_u8]
        .iter()
        .copied()
        .cycle()
        .take((side * side * 4) as usize)
        .collect();
    DecodedRgba {
        width: side,
        height: side,
        pixels,
    }
}

/// Thumbnail textures for the session, decoded on first use. Files that
/// fail to decode get a shared placeholder and are not retried.
pub struct ThumbnailCache {
    size: u32,
    textures: HashMap<ImageRef, egui::TextureHandle>,
    failed: HashMap<ImageRef, String>,
    placeholder: Option<egui::TextureHandle>,
}

impl ThumbnailCache {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            textures: HashMap::new(),
            failed: HashMap::new(),
            placeholder: None,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn failure(&self, path: &ImageRef) -> Option<&str> {
        self.failed.get(path).map(String::as_str)
    }

    pub fn texture(&mut self, ctx: &egui::Context, path: &ImageRef) -> egui::TextureHandle {
        if let Some(texture) = self.textures.get(path) {
            return texture.clone();
        }
        if self.failed.contains_key(path) {
            return self.placeholder_texture(ctx);
        }

        match load_thumbnail(path.as_path(), self.size) {
            Ok(decoded) => {
                let texture = ctx.load_texture(
                    format!("thumb_{path}"),
                    decoded.to_color_image(),
                    egui::TextureOptions::LINEAR,
                );
                self.textures.insert(path.clone(), texture.clone());
                texture
            }
            Err(error) => {
                log::warn!("showing placeholder for {path}: {error}");
                self.failed.insert(path.clone(), error.to_string());
                self.placeholder_texture(ctx)
            }
        }
    }

    fn placeholder_texture(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        let size = self.size;
        self.placeholder
            .get_or_insert_with(|| {
                ctx.load_texture(
                    "thumb_placeholder",
                    placeholder(size).to_color_image(),
                    egui::TextureOptions::LINEAR,
                )
            })
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use tempfile::TempDir;

    #[test]
    fn fit_within_keeps_aspect_ratio() {
        assert_eq!(fit_within(500, 300, 100, 100), (100, 60));
        assert_eq!(fit_within(300, 500, 100, 100), (60, 100));
        assert_eq!(fit_within(1600, 1600, 800, 600), (600, 600));
    }

    #[test]
    fn fit_within_never_upscales() {
        assert_eq!(fit_within(40, 20, 100, 100), (40, 20));
    }

    #[test]
    fn fit_to_scales_small_images_up() {
        assert_eq!(fit_to(100, 80, 800, 600), (750, 600));
        assert_eq!(fit_to(1600, 1600, 800, 600), (600, 600));
    }

    #[test]
    fn small_thumbnail_source_is_not_enlarged() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("small.png");
        let img = ImageBuffer::from_fn(40, 20, |_x, _y| Rgb([1_u8, 2_u8, 3_u8]));
        img.save(&src).expect("save");

        let thumb = load_thumbnail(&src, 100).expect("thumbnail");

        assert_eq!((thumb.width, thumb.height), (40, 20));
    }

    #[test]
    fn thumbnail_fits_bounding_box() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("x.png");
        let img = ImageBuffer::from_fn(500, 300, |_x, _y| Rgb([10_u8, 20_u8, 30_u8]));
        img.save(&src).expect("save");

        let thumb = load_thumbnail(&src, 100).expect("thumbnail");

        assert_eq!((thumb.width, thumb.height), (100, 60));
        assert_eq!(thumb.pixels.len(), 100 * 60 * 4);
    }

    #[test]
    fn corrupt_file_is_a_decode_error() {
        let dir = TempDir::new().expect("tempdir");
        let src = dir.path().join("broken.png");
        std::fs::write(&src, b"definitely not a png").expect("write");

        assert!(matches!(
            load_thumbnail(&src, 100),
            Err(GalleryError::Decode(_))
        ));
    }

    #[test]
    fn placeholder_is_opaque_square() {
        let tile = placeholder(4);
        assert_eq!((tile.width, tile.height), (4, 4));
        assert_eq!(tile.pixels.len(), 64);
        assert!(tile.pixels.chunks(4).all(|px| px[3] == 255));
    }
}
