use std::time::Duration;

use anyhow::bail;
use dictionary::DictionaryConfig;

use crate::slides::SLIDES_API_BASE;

#[derive(Debug, Clone)]
pub struct SlidesConfig {
    pub base: String,
    pub access_token: String,
    pub presentation_id: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    /// Absent on dry runs without credentials.
    pub slides: Option<SlidesConfig>,
}

impl Config {
    pub fn from_env(
        presentation_id: Option<&str>,
        timeout: Duration,
        dry_run: bool,
    ) -> anyhow::Result<Self> {
        Self::from_lookup(presentation_id, timeout, dry_run, |name| {
            std::env::var(name).ok()
        })
    }

    /// Missing required variables are reported together.
    pub fn from_lookup<F>(
        presentation_id: Option<&str>,
        timeout: Duration,
        dry_run: bool,
        lookup: F,
    ) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let mut missing = Vec::new();
        let mut required = |name: &'static str| {
            lookup(name).unwrap_or_else(|| {
                missing.push(name);
                String::new()
            })
        };

        let dictionary = DictionaryConfig {
            learners_key: required("LEARNERS_KEY"),
            collegiate_key: required("COLLEGIATE_KEY"),
            thesaurus_key: required("THESAURUS_KEY"),
            rapidapi_key: required("RAPIDAPI_KEY"),
            unsplash_access_key: required("UNSPLASH_ACCESS_KEY"),
            rapidapi_host: lookup("RAPIDAPI_HOST")
                .unwrap_or_else(|| DictionaryConfig::RAPIDAPI_HOST.to_owned()),
            dictionary_base: lookup("DICTIONARY_API_BASE")
                .unwrap_or_else(|| DictionaryConfig::DICTIONARY_BASE.to_owned()),
            words_api_base: lookup("WORDS_API_BASE")
                .unwrap_or_else(|| DictionaryConfig::WORDS_API_BASE.to_owned()),
            unsplash_base: lookup("UNSPLASH_API_BASE")
                .unwrap_or_else(|| DictionaryConfig::UNSPLASH_BASE.to_owned()),
            timeout,
        };

        let access_token = lookup("SLIDES_ACCESS_TOKEN");
        let presentation_id = presentation_id
            .map(str::to_owned)
            .or_else(|| lookup("PRESENTATION_ID"));
        let slides = match (access_token, presentation_id) {
            (Some(access_token), Some(presentation_id)) => Some(SlidesConfig {
                base: lookup("SLIDES_API_BASE").unwrap_or_else(|| SLIDES_API_BASE.to_owned()),
                access_token,
                presentation_id,
            }),
            (access_token, presentation_id) => {
                if !dry_run {
                    if access_token.is_none() {
                        missing.push("SLIDES_ACCESS_TOKEN");
                    }
                    if presentation_id.is_none() {
                        missing.push("PRESENTATION_ID");
                    }
                }
                None
            }
        };

        if !missing.is_empty() {
            bail!("missing configuration: {}", missing.join(", "));
        }
        Ok(Self { dictionary, slides })
    }
}
