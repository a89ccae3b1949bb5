use std::time::Duration;

use thiserror::Error;

mod dictionary;
mod merriam_webster;
mod pipeline;
mod resolver;
mod source;
#[cfg(test)]
mod test_server;
mod unsplash;
mod words_api;

pub use dictionary::{Category, ContentResult, Origin, Resolution, ResolvedWord, SynonymOrder};
pub use pipeline::WordPipeline;
pub use resolver::{resolve, substitute_word, CategoryPolicy, IMAGE_NOT_FOUND_URL};
pub use source::ContentSource;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("malformed response: {0}")]
    Deserialize(reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(serde_json::Error),
    #[error("provider answered {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("'{0}' is not a word")]
    InvalidWord(String),
}

/// Credentials and endpoints of every content provider.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub learners_key: String,
    pub collegiate_key: String,
    pub thesaurus_key: String,
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub unsplash_access_key: String,
    pub dictionary_base: String,
    pub words_api_base: String,
    pub unsplash_base: String,
    /// Applied to every single adapter request.
    pub timeout: Duration,
}

impl DictionaryConfig {
    pub const DICTIONARY_BASE: &'static str = "https://dictionaryapi.com/api/v3/references";
    pub const WORDS_API_BASE: &'static str = "https://wordsapiv1.p.rapidapi.com";
    pub const RAPIDAPI_HOST: &'static str = "wordsapiv1.p.rapidapi.com";
    pub const UNSPLASH_BASE: &'static str = "https://api.unsplash.com";
}

pub struct Dictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DictionaryError::Fetch)?;
        Ok(Self { client, config })
    }

    pub async fn get_definition(&self, word: &str) -> ContentResult {
        merriam_webster::get_definition(&self.client, &self.config, word).await
    }

    pub async fn get_synonyms(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        merriam_webster::get_synonyms(&self.client, &self.config, word).await
    }

    pub async fn get_sentence(&self, word: &str) -> ContentResult {
        words_api::get_sentence(&self.client, &self.config, word).await
    }

    pub async fn get_image(&self, word: &str) -> ContentResult {
        unsplash::get_image(&self.client, &self.config, word).await
    }
}

/// Folds a failed request into the adapter outcome.
impl From<DictionaryError> for ContentResult {
    fn from(error: DictionaryError) -> Self {
        ContentResult::AdapterError(error.to_string())
    }
}

pub(crate) async fn error_for_status(
    res: reqwest::Response,
) -> Result<reqwest::Response, DictionaryError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(DictionaryError::Status { status, body })
}
