use chrono::Utc;

use crate::domain::{
    Ayah, DocumentMetadata, QuranDocument, SourceMetadata, StructureSource, Surah, SurahDescriptor,
};
use crate::error::DatagenError;
use crate::fetch::SURAH_METADATA_URL;
use crate::names::vietnamese_name;

/// Aligns the two verse-line sets against the descriptor list and builds
/// one [`Surah`] record per descriptor, in descriptor order.
///
/// Preconditions checked before any record is built: both line sets have
/// the same length, and the descriptor counts sum to exactly that
/// length. A per-surah chunk check guards against truncated input.
/// Descriptor order and contiguity are not validated; the output follows
/// the input order as the upstream source delivers it.
pub fn assemble_surahs(
    arabic: &[String],
    vietnamese: &[String],
    descriptors: &[SurahDescriptor],
) -> Result<Vec<Surah>, DatagenError> {
    if arabic.len() != vietnamese.len() {
        return Err(DatagenError::LineCountMismatch {
            arabic: arabic.len(),
            vietnamese: vietnamese.len(),
        });
    }

    let total: usize = descriptors.iter().map(|entry| entry.count as usize).sum();
    if total != arabic.len() {
        return Err(DatagenError::VerseTotalMismatch {
            metadata: total,
            lines: arabic.len(),
        });
    }

    let mut cursor = 0usize;
    let mut surahs = Vec::with_capacity(descriptors.len());
    for entry in descriptors {
        let count = entry.count as usize;
        let arabic_chunk = arabic
            .get(cursor..cursor + count)
            .ok_or(DatagenError::SurahChunkLength(entry.index))?;
        let vietnamese_chunk = vietnamese
            .get(cursor..cursor + count)
            .ok_or(DatagenError::SurahChunkLength(entry.index))?;
        if arabic_chunk.len() != count || vietnamese_chunk.len() != count {
            return Err(DatagenError::SurahChunkLength(entry.index));
        }

        let ayahs = arabic_chunk
            .iter()
            .zip(vietnamese_chunk)
            .enumerate()
            .map(|(offset, (arabic_text, vietnamese_text))| {
                let number = offset as u32 + 1;
                Ayah {
                    id: format!("{}:{}", entry.index, number),
                    number,
                    arabic: arabic_text.clone(),
                    vietnamese: vietnamese_text.clone(),
                }
            })
            .collect();

        surahs.push(Surah {
            number: entry.index,
            arabic_name: entry.title_ar.clone(),
            transliteration: entry.title.clone(),
            revelation_place: entry.place.clone(),
            revelation_order: entry.order,
            page: entry.pages,
            vietnamese_name: vietnamese_name(entry.index)
                .map(str::to_string)
                .unwrap_or_else(|| entry.title.clone()),
            ayahs,
        });
        cursor += count;
    }

    Ok(surahs)
}

/// Wraps the assembled surahs with the generation metadata block. The
/// date is stamped at build time as the current UTC calendar date.
pub fn build_document(
    surahs: Vec<Surah>,
    arabic_source: SourceMetadata,
    vietnamese_source: SourceMetadata,
) -> QuranDocument {
    QuranDocument {
        metadata: DocumentMetadata {
            generated_at: Utc::now().date_naive().to_string(),
            arabic_source,
            vietnamese_source,
            structure_source: StructureSource {
                name: "semarketir/quranjson".to_string(),
                url: SURAH_METADATA_URL.to_string(),
            },
        },
        surahs,
    }
}
