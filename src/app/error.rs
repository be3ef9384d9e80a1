use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum GalleryError {
    EmptyInput,
    InvalidInput(String),
    Io(String),
    Decode(String),
}

impl Display for GalleryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "No image files found in the specified directory."),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Decode(msg) => write!(f, "decode error: {msg}"),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<std::io::Error> for GalleryError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for GalleryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<image::ImageError> for GalleryError {
    fn from(value: image::ImageError) -> Self {
        match value {
            image::ImageError::IoError(error) => Self::Io(error.to_string()),
            other => Self::Decode(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_reports_no_images_found() {
        assert_eq!(
            GalleryError::EmptyInput.to_string(),
            "No image files found in the specified directory."
        );
    }

    #[test]
    fn io_errors_convert_into_io_variant() {
        let error: GalleryError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(error, GalleryError::Io(msg) if msg.contains("denied")));
    }
}
