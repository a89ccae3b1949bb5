use async_trait::async_trait;

use crate::{Category, ContentResult, Dictionary, DictionaryError};

/// Where the resolver gets its content from.
///
/// Every call is a single lookup; implementations do not retry.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn fetch(&self, category: Category, query: &str) -> ContentResult;

    /// The first synonym group of `word`, empty when the thesaurus has none.
    async fn synonyms(&self, word: &str) -> Result<Vec<String>, DictionaryError>;
}

#[async_trait]
impl ContentSource for Dictionary {
    async fn fetch(&self, category: Category, query: &str) -> ContentResult {
        match category {
            Category::Definition => self.get_definition(query).await,
            Category::Sentence => self.get_sentence(query).await,
            Category::Image => self.get_image(query).await,
        }
    }

    async fn synonyms(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        self.get_synonyms(word).await
    }
}
