use crate::domain::{StoryContext, Theme};

/// Everything one submission contributes to a newsletter: the text fields,
/// the raw highlight lines, the decoded image upload, and the theme choice.
/// Only the story is validated; headline, location and author may be empty
/// and still render.
#[derive(Debug)]
pub struct NewsletterDraft {
    headline: String,
    location: String,
    author: String,
    story: StoryContext,
    highlight_lines: Vec<String>,
    image: Option<Vec<u8>>,
    theme: Theme,
}

impl NewsletterDraft {
    pub fn new(
        headline: String,
        location: String,
        author: String,
        story: StoryContext,
        highlight_lines: Vec<String>,
        image: Option<Vec<u8>>,
        theme: Theme,
    ) -> Self {
        Self {
            headline,
            location,
            author,
            story,
            highlight_lines,
            image,
            theme,
        }
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn story(&self) -> &StoryContext {
        &self.story
    }

    pub fn highlight_lines(&self) -> &[String] {
        &self.highlight_lines
    }

    pub fn image(&self) -> Option<&[u8]> {
        self.image.as_deref()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The fixed instruction template sent to the generator. The word range
    /// is a request to the model, not an enforced invariant.
    pub fn article_prompt(&self) -> String {
        format!(
            "Write a professional school newsletter.\n\
             Plain text only.\n\
             180–220 words.\n\
             Formal and friendly tone.\n\
             \n\
             Headline: {}\n\
             Location: {}\n\
             Author: {}\n\
             \n\
             Context:\n\
             {}",
            self.headline,
            self.location,
            self.author,
            self.story.as_ref(),
        )
    }
}
