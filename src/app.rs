use camino::Utf8Path;
use serde::Serialize;

use crate::assemble::{assemble_surahs, build_document};
use crate::error::DatagenError;
use crate::fetch::{ARABIC_VERSES_URL, SURAH_METADATA_URL, SourceClient, VIETNAMESE_VERSES_URL};
use crate::lines::{extract_source_metadata, split_lines, verse_content};
use crate::writer::write_document;

/// Default output location, relative to the working directory of the
/// invocation, matching where the app bundle expects its resource file.
pub const DEFAULT_OUTPUT_PATH: &str = "Quranvn/Resources/quran.json";

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResult {
    pub output_path: String,
    pub surah_count: usize,
    pub verse_count: usize,
}

pub struct App<C> {
    client: C,
}

impl<C: SourceClient> App<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Runs the whole pipeline once: fetch the three sources, split the
    /// verse files into lines and peel off their trailing metadata
    /// blocks, align verses against the chapter descriptors, and write
    /// the consolidated document. Everything except a malformed trailing
    /// metadata block is fatal; nothing is written on failure.
    pub fn generate(&self, output: &Utf8Path) -> Result<GenerateResult, DatagenError> {
        tracing::info!("fetching Arabic verse lines");
        let arabic_raw = self.client.fetch_verse_lines(ARABIC_VERSES_URL)?;
        tracing::info!("fetching Vietnamese verse lines");
        let vietnamese_raw = self.client.fetch_verse_lines(VIETNAMESE_VERSES_URL)?;

        let arabic_full = split_lines(&arabic_raw);
        let vietnamese_full = split_lines(&vietnamese_raw);

        let arabic_source = extract_source_metadata(&arabic_full);
        let vietnamese_source = extract_source_metadata(&vietnamese_full);

        let arabic = verse_content(&arabic_full);
        let vietnamese = verse_content(&vietnamese_full);

        tracing::info!("fetching surah metadata");
        let descriptors = self.client.fetch_surah_descriptors(SURAH_METADATA_URL)?;
        tracing::info!(
            surahs = descriptors.len(),
            arabic_lines = arabic.len(),
            vietnamese_lines = vietnamese.len(),
            "assembling document"
        );

        let surahs = assemble_surahs(arabic, vietnamese, &descriptors)?;
        let verse_count = surahs.iter().map(|surah| surah.ayahs.len()).sum();
        let document = build_document(surahs, arabic_source, vietnamese_source);

        write_document(output, &document)?;

        Ok(GenerateResult {
            output_path: output.to_string(),
            surah_count: document.surahs.len(),
            verse_count,
        })
    }
}
