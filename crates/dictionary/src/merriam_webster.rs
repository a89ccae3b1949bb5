// https://dictionaryapi.com/products/json - learners, collegiate and thesaurus references share one format
// an unknown word is answered with a list of spelling suggestions instead of entries

use serde::de::IgnoredAny;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{error_for_status, ContentResult, DictionaryConfig, DictionaryError};

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Entry {
    Headword(Headword),
    Suggestion(IgnoredAny),
}

#[derive(Debug, Deserialize)]
pub(crate) struct Headword {
    #[serde(default)]
    shortdef: Vec<String>,
    #[serde(default)]
    meta: Meta,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Meta {
    #[serde(default)]
    syns: Vec<Vec<String>>,
}

async fn lookup(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    reference: &str,
    key: &str,
    word: &str,
) -> Result<Vec<Entry>, DictionaryError> {
    let url = format!(
        "{}/{reference}/json/{}",
        config.dictionary_base,
        urlencoding::encode(word)
    );
    let res = client
        .get(url)
        .query(&[("key", key)])
        .send()
        .await
        .map_err(DictionaryError::Fetch)?;
    error_for_status(res)
        .await?
        .json::<Vec<Entry>>()
        .await
        .map_err(DictionaryError::Deserialize)
}

pub(crate) fn short_definition(entries: &[Entry]) -> Option<String> {
    entries.iter().find_map(|entry| match entry {
        Entry::Headword(headword) => headword
            .shortdef
            .iter()
            .find(|definition| !definition.trim().is_empty())
            .cloned(),
        Entry::Suggestion(_) => None,
    })
}

pub(crate) fn first_synonym_group(entries: Vec<Entry>) -> Vec<String> {
    match entries.into_iter().next() {
        Some(Entry::Headword(headword)) => headword.meta.syns.into_iter().next().unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Learner's dictionary first, the collegiate dictionary when it has nothing.
pub(crate) async fn get_definition(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    word: &str,
) -> ContentResult {
    match lookup(client, config, "learners", &config.learners_key, word).await {
        Ok(entries) => {
            if let Some(definition) = short_definition(&entries) {
                return ContentResult::found(Some(definition));
            }
            debug!(word, "no learner's definition, asking the collegiate dictionary");
        }
        Err(error) => warn!(word, %error, "learner's dictionary lookup failed"),
    }
    match lookup(client, config, "collegiate", &config.collegiate_key, word).await {
        Ok(entries) => ContentResult::found(short_definition(&entries)),
        Err(error) => error.into(),
    }
}

pub(crate) async fn get_synonyms(
    client: &reqwest::Client,
    config: &DictionaryConfig,
    word: &str,
) -> Result<Vec<String>, DictionaryError> {
    let entries = lookup(client, config, "thesaurus", &config.thesaurus_key, word).await?;
    Ok(first_synonym_group(entries))
}
