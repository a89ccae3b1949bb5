use tracing::{info, warn};

use crate::resolver::resolve;
use crate::{Category, CategoryPolicy, ContentSource, DictionaryError, ResolvedWord, SynonymOrder};

/// Resolves a definition, a sentence and an image for one word at a time.
pub struct WordPipeline<S> {
    source: S,
    definition: CategoryPolicy,
    sentence: CategoryPolicy,
    image: CategoryPolicy,
}

impl<S: ContentSource> WordPipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            definition: CategoryPolicy::for_category(Category::Definition),
            sentence: CategoryPolicy::for_category(Category::Sentence),
            image: CategoryPolicy::for_category(Category::Image),
        }
    }

    pub fn with_order(mut self, category: Category, order: SynonymOrder) -> Self {
        let policy = match category {
            Category::Definition => &mut self.definition,
            Category::Sentence => &mut self.sentence,
            Category::Image => &mut self.image,
        };
        policy.order = order;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn resolve_word(&self, word: &str) -> Result<ResolvedWord, DictionaryError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(DictionaryError::InvalidWord(word.to_owned()));
        }
        info!(word, "fetching content");
        let definition = resolve(&self.source, &self.definition, word).await;
        let sentence = resolve(&self.source, &self.sentence, word).await;
        let image = resolve(&self.source, &self.image, word).await;
        Ok(ResolvedWord {
            word: word.to_owned(),
            definition: definition.value,
            sentence: sentence.value,
            image_url: image.value,
        })
    }

    /// Resolves every word in order, leaving out the ones that fail.
    pub async fn resolve_all<I, W>(&self, words: I) -> Vec<ResolvedWord>
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut resolved = Vec::new();
        for word in words {
            match self.resolve_word(word.as_ref()).await {
                Ok(record) => resolved.push(record),
                Err(error) => warn!(word = word.as_ref(), %error, "skipping word"),
            }
        }
        resolved
    }
}
