use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use quranvn_datagen::app::App;
use quranvn_datagen::domain::SurahDescriptor;
use quranvn_datagen::error::DatagenError;
use quranvn_datagen::fetch::{
    ARABIC_VERSES_URL, SURAH_METADATA_URL, SourceClient, VIETNAMESE_VERSES_URL,
};

struct StaticClient {
    arabic: String,
    vietnamese: String,
    descriptors: String,
}

impl SourceClient for StaticClient {
    fn fetch_verse_lines(&self, url: &str) -> Result<String, DatagenError> {
        match url {
            ARABIC_VERSES_URL => Ok(self.arabic.clone()),
            VIETNAMESE_VERSES_URL => Ok(self.vietnamese.clone()),
            _ => Err(DatagenError::SourceHttp(format!("unexpected url {url}"))),
        }
    }

    fn fetch_surah_descriptors(&self, url: &str) -> Result<Vec<SurahDescriptor>, DatagenError> {
        assert_eq!(url, SURAH_METADATA_URL);
        serde_json::from_str(&self.descriptors)
            .map_err(|err| DatagenError::StructureParse(err.to_string()))
    }
}

struct FailingClient;

impl SourceClient for FailingClient {
    fn fetch_verse_lines(&self, url: &str) -> Result<String, DatagenError> {
        Err(DatagenError::SourceStatus {
            status: 502,
            url: url.to_string(),
        })
    }

    fn fetch_surah_descriptors(&self, _url: &str) -> Result<Vec<SurahDescriptor>, DatagenError> {
        unreachable!("verse fetch fails first")
    }
}

fn output_path(dir: &tempfile::TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join("Resources").join("quran.json")).unwrap()
}

#[test]
fn generate_writes_full_document() {
    let temp = tempfile::tempdir().unwrap();
    let output = output_path(&temp);

    let client = StaticClient {
        arabic: "a1\na2\na3\n\n{\"license\":\"cc0\",\"source\":\"upstream\"}\n".to_string(),
        vietnamese: "v1\nv2\nv3\n".to_string(),
        descriptors: r#"[
            {"index": "001", "count": 2, "title": "Al-Fatiha", "titleAr": "الفاتحة", "place": "Mecca", "pages": "1"},
            {"index": "002", "count": 1, "title": "Al-Baqara", "titleAr": "البقرة", "place": "Madina", "pages": "2"}
        ]"#
        .to_string(),
    };

    let result = App::new(client).generate(&output).unwrap();
    assert_eq!(result.surah_count, 2);
    assert_eq!(result.verse_count, 3);
    assert_eq!(result.output_path, output.as_str());

    let written = std::fs::read_to_string(output.as_std_path()).unwrap();
    let document: serde_json::Value = serde_json::from_str(&written).unwrap();

    assert_eq!(document["metadata"]["arabicSource"]["license"], "cc0");
    assert_eq!(
        document["metadata"]["vietnameseSource"],
        serde_json::json!({})
    );
    assert_eq!(
        document["metadata"]["structureSource"]["name"],
        "semarketir/quranjson"
    );
    assert_eq!(document["metadata"]["structureSource"]["url"], SURAH_METADATA_URL);

    let surahs = document["surahs"].as_array().unwrap();
    assert_eq!(surahs.len(), 2);
    assert_eq!(surahs[0]["number"], 1);
    assert_eq!(surahs[0]["vietnameseName"], "Al-Fātiḥah — Lời Mở Đầu");
    assert_eq!(surahs[0]["ayahs"][0]["id"], "1:1");
    assert_eq!(surahs[0]["ayahs"][1]["id"], "1:2");
    assert_eq!(surahs[1]["ayahs"][0]["id"], "2:1");
    // The trailing metadata line never reaches the verse content.
    assert_eq!(surahs[1]["ayahs"][0]["arabic"], "a3");
    assert_eq!(surahs[1]["ayahs"][0]["vietnamese"], "v3");

    // Non-ASCII stays literal in the written file.
    assert!(written.contains("الفاتحة"));
    assert!(!written.contains("\\u"));
}

#[test]
fn line_count_mismatch_leaves_no_output_file() {
    let temp = tempfile::tempdir().unwrap();
    let output = output_path(&temp);

    let client = StaticClient {
        arabic: "a1\na2\na3\n".to_string(),
        vietnamese: "v1\nv2\n".to_string(),
        descriptors: r#"[{"index": 1, "count": 3, "title": "T"}]"#.to_string(),
    };

    let err = App::new(client).generate(&output).unwrap_err();
    assert_matches!(err, DatagenError::LineCountMismatch { .. });
    assert!(!output.as_std_path().exists());
}

#[test]
fn total_count_mismatch_leaves_no_output_file() {
    let temp = tempfile::tempdir().unwrap();
    let output = output_path(&temp);

    let client = StaticClient {
        arabic: "a1\na2\n".to_string(),
        vietnamese: "v1\nv2\n".to_string(),
        descriptors: r#"[{"index": 1, "count": 3, "title": "T"}]"#.to_string(),
    };

    let err = App::new(client).generate(&output).unwrap_err();
    assert_matches!(
        err,
        DatagenError::VerseTotalMismatch {
            metadata: 3,
            lines: 2
        }
    );
    assert!(!output.as_std_path().exists());
}

#[test]
fn fetch_failure_propagates_and_leaves_no_output_file() {
    let temp = tempfile::tempdir().unwrap();
    let output = output_path(&temp);

    let err = App::new(FailingClient).generate(&output).unwrap_err();
    assert_matches!(err, DatagenError::SourceStatus { status: 502, .. });
    assert!(!output.as_std_path().exists());
}

#[test]
fn generate_overwrites_previous_output() {
    let temp = tempfile::tempdir().unwrap();
    let output = output_path(&temp);

    std::fs::create_dir_all(output.parent().unwrap().as_std_path()).unwrap();
    std::fs::write(output.as_std_path(), "stale").unwrap();

    let client = StaticClient {
        arabic: "a1\n".to_string(),
        vietnamese: "v1\n".to_string(),
        descriptors: r#"[{"index": 1, "count": 1, "title": "T"}]"#.to_string(),
    };

    App::new(client).generate(&output).unwrap();
    let written = std::fs::read_to_string(output.as_std_path()).unwrap();
    assert!(written.starts_with('{'));
    assert!(!written.contains("stale"));
}
