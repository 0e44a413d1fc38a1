use crate::error::NewsletterError;
use crate::utils;

/// The free-text story the article is generated from.
///
/// A non-blank story is the precondition for calling the generator at all,
/// so the constructor enforces it; every other form field may be empty.
#[derive(Debug)]
pub struct StoryContext(String);

impl StoryContext {
    pub fn parse(story: String) -> Result<Self, NewsletterError> {
        if utils::is_blank(&story) {
            return Err(NewsletterError::StoryIsBlank);
        }
        Ok(Self(story))
    }
}

impl AsRef<str> for StoryContext {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
