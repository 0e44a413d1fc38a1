use crate::constant::{DATE_FORMAT, IMAGE_DATA_URI_PREFIX};
use crate::domain::{GeneratedArticle, NewsletterDraft};
use crate::utils;
use base64::engine::general_purpose;
use base64::Engine;
use chrono::NaiveDate;
use htmlescape::encode_minimal;

/// The assembled newsletter page: one self-contained HTML string.
///
/// Everything is inline, the stylesheet, the theme colors and both images
/// as data URIs, so the document renders identically with or without
/// network access. User-supplied text is HTML-escaped before substitution;
/// the only trusted inline blocks are the static template, the theme
/// colors and the data URIs.
#[derive(Debug)]
pub struct NewsletterDocument(String);

impl NewsletterDocument {
    /// Build the document from one submission.
    ///
    /// Pure over its inputs: the render date is passed in by the caller
    /// rather than read from the clock here.
    pub fn assemble(
        draft: &NewsletterDraft,
        article: &GeneratedArticle,
        logo_data_uri: &str,
        published_on: NaiveDate,
    ) -> Self {
        let colors = draft.theme().colors();

        // Escape first, then turn newlines into paragraph breaks; the break
        // tags themselves must survive the escaping.
        let article_html = encode_minimal(article.as_ref()).replace('\n', "<br><br>");

        // One list item per non-blank line, original order.
        let highlights_html = draft
            .highlight_lines()
            .iter()
            .filter(|line| !utils::is_blank(line))
            .map(|line| format!("<li>{}</li>", encode_minimal(line)))
            .collect::<String>();

        // No image, no block. There is no placeholder.
        let hero_html = match draft.image() {
            None => String::new(),
            Some(bytes) => format!(
                r#"<div class="hero"><img src="{}{}"></div>"#,
                IMAGE_DATA_URI_PREFIX,
                general_purpose::STANDARD.encode(bytes)
            ),
        };

        let html = utils::render_template(
            include_str!("newsletter.html"),
            &[
                ("left_color", colors.left),
                ("right_color", colors.right),
                ("accent_color", colors.accent),
                ("logo_data_uri", logo_data_uri),
                ("author", &encode_minimal(draft.author())),
                (
                    "published_on",
                    &published_on.format(DATE_FORMAT).to_string(),
                ),
                ("hero", &hero_html),
                ("headline", &encode_minimal(draft.headline())),
                ("location", &encode_minimal(draft.location())),
                ("article", &article_html),
                ("highlights", &highlights_html),
            ],
        );
        Self(html)
    }

    pub fn into_html(self) -> String {
        self.0
    }
}
