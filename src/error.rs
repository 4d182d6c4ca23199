use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DatagenError {
    #[error("source request failed: {0}")]
    SourceHttp(String),

    #[error("source returned status {status}: {url}")]
    SourceStatus { status: u16, url: String },

    #[error("failed to parse surah metadata: {0}")]
    StructureParse(String),

    #[error("Arabic ({arabic}) and Vietnamese ({vietnamese}) verse lines mismatch")]
    LineCountMismatch { arabic: usize, vietnamese: usize },

    #[error("verse count mismatch: metadata {metadata} vs lines {lines}")]
    VerseTotalMismatch { metadata: usize, lines: usize },

    #[error("unexpected verse chunk length for surah {0}")]
    SurahChunkLength(u32),

    #[error("failed to encode output document: {0}")]
    OutputEncode(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),
}
