use crate::document::NewsletterDocument;
use crate::domain::{GeneratedArticle, NewsletterDraft};
use crate::error::NewsletterError;
use crate::generator_client::GeneratorClient;
use crate::request::DraftData;
use crate::startup::LogoAsset;
use crate::utils;
use actix_web::{web, HttpResponse};
use chrono::Local;

/// The whole pipeline of one submission: validate the form, ask the
/// generator for the article, assemble the document, return it inline.
/// Failures the user can act on surface as a flash message back on the
/// form page.
#[tracing::instrument(
    name = "/newsletter: Generate a newsletter",
    skip(form, generator_client, logo),
    fields(headline = %form.headline, theme = ?form.theme)
)]
pub async fn generate_newsletter(
    form: web::Form<DraftData>,
    generator_client: web::Data<GeneratorClient>,
    logo: web::Data<LogoAsset>,
) -> Result<HttpResponse, NewsletterError> {
    let draft: NewsletterDraft = form.into_inner().try_into()?;

    let text = generator_client
        .generate_article(&draft.article_prompt())
        .await?;
    let article = GeneratedArticle::parse(text)?;

    let document = NewsletterDocument::assemble(
        &draft,
        &article,
        logo.data_uri(),
        Local::now().date_naive(),
    );
    Ok(utils::ok_to(document.into_html()))
}
