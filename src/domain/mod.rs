mod article;
mod draft;
mod story;
mod theme;

pub use article::GeneratedArticle;
pub use draft::NewsletterDraft;
pub use story::StoryContext;
pub use theme::{Theme, ThemeColors};
