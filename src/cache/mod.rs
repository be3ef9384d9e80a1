pub mod previews;
pub mod thumbs;
