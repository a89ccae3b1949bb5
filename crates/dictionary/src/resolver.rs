use regex::{NoExpand, Regex};
use tracing::{debug, info, warn};

use crate::{Category, ContentResult, ContentSource, Origin, Resolution, SynonymOrder};

pub const IMAGE_NOT_FOUND_URL: &str =
    "https://webhostingmedia.net/wp-content/uploads/2018/01/http-error-404-not-found.png";

/// How one category is looked up and what happens when the word itself has nothing.
#[derive(Debug, Clone, Copy)]
pub struct CategoryPolicy {
    pub category: Category,
    /// Order in which synonyms are tried.
    pub order: SynonymOrder,
    /// Applied to a value borrowed from a synonym: `(value, synonym, word)`.
    pub post_process: fn(&str, &str, &str) -> String,
    /// Used once every synonym has been tried.
    pub sentinel: &'static str,
}

impl CategoryPolicy {
    pub fn definition() -> Self {
        Self {
            category: Category::Definition,
            order: SynonymOrder::Forward,
            post_process: keep_value,
            sentinel: "",
        }
    }

    /// Synonyms are tried last one first.
    pub fn sentence() -> Self {
        Self {
            category: Category::Sentence,
            order: SynonymOrder::Reverse,
            post_process: substitute_word,
            sentinel: "",
        }
    }

    pub fn image() -> Self {
        Self {
            category: Category::Image,
            order: SynonymOrder::Forward,
            post_process: keep_value,
            sentinel: IMAGE_NOT_FOUND_URL,
        }
    }

    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Definition => Self::definition(),
            Category::Sentence => Self::sentence(),
            Category::Image => Self::image(),
        }
    }

    pub fn with_order(mut self, order: SynonymOrder) -> Self {
        self.order = order;
        self
    }

    fn sentinel_for(&self, word: &str) -> Resolution {
        Resolution {
            value: self.sentinel.to_owned(),
            source_word: word.to_owned(),
            origin: Origin::Sentinel,
        }
    }
}

fn keep_value(value: &str, _synonym: &str, _word: &str) -> String {
    value.to_owned()
}

/// Replaces every whole-word, case-insensitive occurrence of `synonym` in
/// `text` with `word` in lower case. Everything else is left as it was.
pub fn substitute_word(text: &str, synonym: &str, word: &str) -> String {
    let pattern = format!(r"(?i)\b{}\b", regex::escape(synonym));
    match Regex::new(&pattern) {
        Ok(re) => re
            .replace_all(text, NoExpand(&word.to_lowercase()))
            .into_owned(),
        Err(error) => {
            warn!(synonym, %error, "cannot build substitution pattern");
            text.to_owned()
        }
    }
}

/// Looks `word` up, then each of its synonyms, until something is found.
///
/// Never fails: a category with nothing to show resolves to the policy's
/// sentinel.
pub async fn resolve<S>(source: &S, policy: &CategoryPolicy, word: &str) -> Resolution
where
    S: ContentSource + ?Sized,
{
    let category = policy.category;
    match source.fetch(category, word).await {
        ContentResult::Found(value) if !value.trim().is_empty() => {
            debug!(%category, word, "found");
            return Resolution {
                value,
                source_word: word.to_owned(),
                origin: Origin::Primary,
            };
        }
        ContentResult::AdapterError(cause) => {
            warn!(%category, word, %cause, "lookup failed, trying synonyms")
        }
        _ => info!(%category, word, "nothing found, trying synonyms"),
    }

    let synonyms = match source.synonyms(word).await {
        Ok(synonyms) => synonyms,
        Err(error) => {
            warn!(%category, word, %error, "cannot fetch synonyms, using default");
            return policy.sentinel_for(word);
        }
    };
    let candidates: Vec<&String> = match policy.order {
        SynonymOrder::Forward => synonyms.iter().collect(),
        SynonymOrder::Reverse => synonyms.iter().rev().collect(),
    };

    for synonym in candidates {
        if synonym.trim().is_empty() || synonym.eq_ignore_ascii_case(word) {
            continue;
        }
        match source.fetch(category, synonym).await {
            ContentResult::Found(value) if !value.trim().is_empty() => {
                info!(%category, word, synonym = synonym.as_str(), "using synonym");
                return Resolution {
                    value: (policy.post_process)(&value, synonym, word),
                    source_word: synonym.clone(),
                    origin: Origin::Synonym(synonym.clone()),
                };
            }
            ContentResult::AdapterError(cause) => {
                warn!(%category, synonym = synonym.as_str(), %cause, "synonym lookup failed")
            }
            _ => debug!(%category, synonym = synonym.as_str(), "nothing for synonym"),
        }
    }

    info!(%category, word, tried = synonyms.len(), "synonyms exhausted, using default");
    policy.sentinel_for(word)
}
