use crate::error::NewsletterError;

/// The article text returned by the generator, trimmed of leading and
/// trailing whitespace. A blank response is rejected rather than rendered
/// as an empty document.
#[derive(Debug)]
pub struct GeneratedArticle(String);

impl GeneratedArticle {
    pub fn parse(text: String) -> Result<Self, NewsletterError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(NewsletterError::ArticleIsEmpty);
        }
        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for GeneratedArticle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
