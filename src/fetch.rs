use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::domain::SurahDescriptor;
use crate::error::DatagenError;

pub const ARABIC_VERSES_URL: &str =
    "https://raw.githubusercontent.com/fawazahmed0/quran-api/1/database/linebyline/ara-quranuthmanihaf.txt";
pub const VIETNAMESE_VERSES_URL: &str =
    "https://raw.githubusercontent.com/fawazahmed0/quran-api/1/database/linebyline/vie-hassanabdulkari.txt";
pub const SURAH_METADATA_URL: &str =
    "https://raw.githubusercontent.com/semarketir/quranjson/master/source/surah.json";

pub trait SourceClient: Send + Sync {
    fn fetch_verse_lines(&self, url: &str) -> Result<String, DatagenError>;
    fn fetch_surah_descriptors(&self, url: &str) -> Result<Vec<SurahDescriptor>, DatagenError>;
}

#[derive(Clone)]
pub struct HttpSourceClient {
    client: Client,
}

impl HttpSourceClient {
    pub fn new() -> Result<Self, DatagenError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("quranvn-datagen/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| DatagenError::SourceHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| DatagenError::SourceHttp(err.to_string()))?;
        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, DatagenError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| DatagenError::SourceHttp(err.to_string()))?;
        if !response.status().is_success() {
            return Err(DatagenError::SourceStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

impl SourceClient for HttpSourceClient {
    fn fetch_verse_lines(&self, url: &str) -> Result<String, DatagenError> {
        self.get(url)?
            .text()
            .map_err(|err| DatagenError::SourceHttp(err.to_string()))
    }

    fn fetch_surah_descriptors(&self, url: &str) -> Result<Vec<SurahDescriptor>, DatagenError> {
        self.get(url)?
            .json()
            .map_err(|err| DatagenError::StructureParse(err.to_string()))
    }
}
