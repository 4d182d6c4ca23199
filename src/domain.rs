use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Provenance/license mapping parsed from the trailing JSON block of a
/// verse-line source. Empty when the source carries no block or the
/// block fails to parse.
pub type SourceMetadata = BTreeMap<String, String>;

/// One chapter entry from the upstream structural metadata array.
///
/// The upstream source serves some numeric fields as zero-padded strings
/// (`"index": "001"`, `"pages": "1"`), so `index` and `count` accept
/// either a JSON number or a numeric string. `order` and `pages` carry
/// no weight in the alignment and degrade to `None` when unusable.
#[derive(Debug, Clone, Deserialize)]
pub struct SurahDescriptor {
    #[serde(deserialize_with = "lenient_u32")]
    pub index: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub count: u32,
    #[serde(default, rename = "titleAr")]
    pub title_ar: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub place: String,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub order: Option<u32>,
    #[serde(default, deserialize_with = "lenient_opt_u32")]
    pub pages: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(u32),
    Text(String),
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => Ok(value),
        NumberOrText::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn lenient_opt_u32<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<NumberOrText>::deserialize(deserializer)?;
    Ok(match value {
        Some(NumberOrText::Number(value)) => Some(value),
        Some(NumberOrText::Text(text)) => text.trim().parse().ok(),
        None => None,
    })
}

/// One verse with bilingual text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ayah {
    pub id: String,
    pub number: u32,
    pub arabic: String,
    pub vietnamese: String,
}

/// One assembled chapter record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surah {
    pub number: u32,
    pub arabic_name: String,
    pub transliteration: String,
    pub revelation_place: String,
    pub revelation_order: Option<u32>,
    pub page: Option<u32>,
    pub vietnamese_name: String,
    pub ayahs: Vec<Ayah>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureSource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    pub generated_at: String,
    pub arabic_source: SourceMetadata,
    pub vietnamese_source: SourceMetadata,
    pub structure_source: StructureSource,
}

/// Final consolidated document written to the output file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuranDocument {
    pub metadata: DocumentMetadata,
    pub surahs: Vec<Surah>,
}
