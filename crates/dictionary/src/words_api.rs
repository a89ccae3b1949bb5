// https://www.wordsapi.com/docs/#examples - served through rapidapi

use reqwest::StatusCode;
use serde::Deserialize;

use crate::{error_for_status, ContentResult, DictionaryConfig, DictionaryError};

#[derive(Debug, Deserialize)]
pub(crate) struct Examples {
    #[serde(default)]
    examples: Vec<String>,
}

impl Examples {
    pub(crate) fn first(self) -> Option<String> {
        self.examples.into_iter().next()
    }
}

pub(crate) async fn get_sentence(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    word: &str,
) -> ContentResult {
    match get_examples(client, config, word).await {
        Ok(Some(examples)) => ContentResult::found(examples.first()),
        Ok(None) => ContentResult::NotFound,
        Err(error) => error.into(),
    }
}

async fn get_examples(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    word: &str,
) -> Result<Option<Examples>, DictionaryError> {
    let url = format!(
        "{}/words/{}/examples",
        config.words_api_base,
        urlencoding::encode(word)
    );
    let res = client
        .get(url)
        .header("X-RapidAPI-Key", &config.rapidapi_key)
        .header("X-RapidAPI-Host", &config.rapidapi_host)
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    // unknown words are a 404
    if res.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    error_for_status(res)
        .await?
        .json::<Examples>()
        .await
        .map(Some)
        .map_err(DictionaryError::Deserialize)
}
