use std::path::PathBuf;

use crate::app::controller::DEFAULT_OUTPUT_FILE;
use crate::app::error::GalleryError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    pub page_size: usize,
    pub thumbnail_size: u32,
    pub preview_size: [u32; 2],
}

impl AppConfig {
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            page_size: 16,
            thumbnail_size: 100,
            preview_size: [800, 600],
        }
    }

    /// `image-selector <source_dir> [output_path]`
    pub fn from_args(args: &[String]) -> Result<Self, GalleryError> {
        let Some(source_dir) = args.get(1) else {
            return Err(GalleryError::InvalidInput(
                "missing image directory".to_string(),
            ));
        };
        if args.len() > 3 {
            return Err(GalleryError::InvalidInput(format!(
                "unexpected argument: {}",
                args[3]
            )));
        }

        let mut config = Self::new(source_dir);
        if let Some(output_path) = args.get(2) {
            config.output_path = PathBuf::from(output_path);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn defaults_match_four_by_four_grid_and_local_output() {
        let config = AppConfig::new("/shots");
        assert_eq!(config.page_size, 16);
        assert_eq!(config.thumbnail_size, 100);
        assert_eq!(config.preview_size, [800, 600]);
        assert_eq!(config.output_path, PathBuf::from("selected_images.json"));
    }

    #[test]
    fn source_dir_is_required() {
        let result = AppConfig::from_args(&args(&["image-selector"]));
        assert!(matches!(result, Err(GalleryError::InvalidInput(_))));
    }

    #[test]
    fn output_path_can_be_overridden() {
        let config = AppConfig::from_args(&args(&["image-selector", "/shots", "/tmp/picked.json"]))
            .expect("config");
        assert_eq!(config.source_dir, PathBuf::from("/shots"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/picked.json"));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let result = AppConfig::from_args(&args(&["image-selector", "a", "b", "c"]));
        assert!(matches!(result, Err(GalleryError::InvalidInput(_))));
    }
}
