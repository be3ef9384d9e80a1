use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::app::error::GalleryError;
use crate::app::state::ImageRef;

const INDENT: &[u8] = b"    ";

/// Writes `selection` to `destination` as a pretty JSON array of path
/// strings, replacing any existing file.
pub fn write_selection<'a>(
    destination: &Path,
    selection: impl IntoIterator<Item = &'a ImageRef>,
) -> Result<usize, GalleryError> {
    let paths: Vec<&ImageRef> = selection.into_iter().collect();
    let file = File::create(destination).map_err(|error| {
        GalleryError::Io(format!("failed to create {}: {error}", destination.display()))
    })?;

    let mut writer = BufWriter::new(file);
    write_pretty_json(&mut writer, &paths)?;
    writer.flush()?;
    Ok(paths.len())
}

#[cfg(test)]
pub fn read_selection(source: &Path) -> Result<Vec<ImageRef>, GalleryError> {
    let raw = std::fs::read_to_string(source)?;
    let paths: Vec<String> = serde_json::from_str(&raw)?;
    Ok(paths.into_iter().map(ImageRef::new).collect())
}

fn write_pretty_json<W: Write, T: Serialize>(writer: W, value: &T) -> Result<(), GalleryError> {
    let mut serializer =
        serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;
    Ok(())
}
