use crate::domain::SourceMetadata;

/// Splits raw source text into trimmed, non-empty lines. Order is
/// preserved and nothing is deduplicated.
pub fn split_lines(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Locates the trailing metadata block: the last line starting with `{`
/// opens a JSON object that runs to the end of the sequence.
///
/// The upstream line-by-line files end with such a block describing
/// provenance and license. The heuristic assumes no legitimate verse
/// line ever starts with `{`; keep it in one place so a format change
/// stays localized.
fn trailing_block_start(lines: &[String]) -> Option<usize> {
    lines.iter().rposition(|line| line.starts_with('{'))
}

/// Parses the trailing metadata block of a full line sequence.
///
/// Must run on the full sequence produced by [`split_lines`], before
/// content stripping, since it needs the very lines [`verse_content`]
/// discards. Returns an empty map when no block exists or the block is
/// not valid JSON.
pub fn extract_source_metadata(lines: &[String]) -> SourceMetadata {
    match trailing_block_start(lines) {
        Some(start) => {
            let raw = lines[start..].join("\n");
            serde_json::from_str(&raw).unwrap_or_default()
        }
        None => SourceMetadata::default(),
    }
}

/// Returns the verse lines strictly before the trailing metadata block,
/// or the full sequence when the source has no such block. The block is
/// stripped even when it fails to parse as JSON.
pub fn verse_content(lines: &[String]) -> &[String] {
    match trailing_block_start(lines) {
        Some(start) => &lines[..start],
        None => lines,
    }
}
