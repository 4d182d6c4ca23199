use std::fs;
use std::io::Write;

use camino::Utf8Path;

use crate::domain::QuranDocument;
use crate::error::DatagenError;

/// Serializes the document as indented JSON (non-ASCII kept literal) and
/// writes it atomically: the bytes land in a temporary file next to the
/// destination, which is then persisted over the target. A failed run
/// never leaves a truncated output file behind.
pub fn write_document(path: &Utf8Path, document: &QuranDocument) -> Result<(), DatagenError> {
    let json = serde_json::to_string_pretty(document)
        .map_err(|err| DatagenError::OutputEncode(err.to_string()))?;

    let parent = path
        .parent()
        .ok_or_else(|| DatagenError::Filesystem(format!("invalid output path: {path}")))?;
    fs::create_dir_all(parent.as_std_path())
        .map_err(|err| DatagenError::Filesystem(err.to_string()))?;

    let mut temp = tempfile::Builder::new()
        .prefix("quran-json")
        .tempfile_in(parent.as_std_path())
        .map_err(|err| DatagenError::Filesystem(err.to_string()))?;
    temp.write_all(json.as_bytes())
        .map_err(|err| DatagenError::Filesystem(err.to_string()))?;
    if path.as_std_path().exists() {
        fs::remove_file(path.as_std_path())
            .map_err(|err| DatagenError::Filesystem(err.to_string()))?;
    }
    temp.persist(path.as_std_path())
        .map_err(|err| DatagenError::Filesystem(err.to_string()))?;
    Ok(())
}
