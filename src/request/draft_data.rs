use crate::domain::{NewsletterDraft, StoryContext, Theme};
use crate::error::NewsletterError;
use base64::engine::general_purpose;
use base64::Engine;
use serde::Deserialize;

/// The raw submission of the newsletter form.
///
/// The file input never reaches us as a file: the form page base64-encodes
/// the chosen image into the hidden `image` field, so the whole submission
/// stays one urlencoded body. An empty `image` value means nothing was
/// uploaded.
#[derive(Deserialize, Debug)]
pub struct DraftData {
    pub headline: String,
    pub location: String,
    pub author: String,
    pub story: String,
    pub highlights: String,
    pub image: String,
    pub theme: Theme,
}

impl TryFrom<DraftData> for NewsletterDraft {
    type Error = NewsletterError;

    fn try_from(form: DraftData) -> Result<Self, Self::Error> {
        let story = StoryContext::parse(form.story)?;
        // Raw lines, order preserved; blank ones are dropped at render time.
        let highlight_lines = form
            .highlights
            .lines()
            .map(|line| line.to_string())
            .collect();
        let image = if form.image.is_empty() {
            None
        } else {
            let bytes = general_purpose::STANDARD
                .decode(form.image.as_bytes())
                .map_err(|e| {
                    tracing::error!("Failed to decode the uploaded image: {:?}", e);
                    NewsletterError::DecodeImageError(e)
                })?;
            Some(bytes)
        };
        Ok(NewsletterDraft::new(
            form.headline,
            form.location,
            form.author,
            story,
            highlight_lines,
            image,
            form.theme,
        ))
    }
}
