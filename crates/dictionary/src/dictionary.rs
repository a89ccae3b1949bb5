use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Definition,
    Sentence,
    Image,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Definition => "definition",
            Category::Sentence => "sentence",
            Category::Image => "image",
        };
        f.write_str(name)
    }
}

/// Outcome of a single adapter lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentResult {
    Found(String),
    NotFound,
    AdapterError(String),
}

impl ContentResult {
    /// Blank values are as good as nothing.
    pub(crate) fn found(value: Option<String>) -> Self {
        match value {
            Some(value) if !value.trim().is_empty() => ContentResult::Found(value),
            _ => ContentResult::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynonymOrder {
    Forward,
    Reverse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Primary,
    Synonym(String),
    Sentinel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: String,
    /// The word or synonym whose lookup produced `value`.
    pub source_word: String,
    pub origin: Origin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedWord {
    pub word: String,
    pub definition: String,
    pub sentence: String,
    pub image_url: String,
}
