use crate::constant::HEADER_KEY;
use crate::error::NewsletterError;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the hosted `generateContent` text-generation API.
///
/// One prompt in, one plain-text article out. Single attempt, no retry; the
/// only resilience knob is the client-side timeout from configuration.
#[derive(Debug)]
pub struct GeneratorClient {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: Secret<String>,
}

impl GeneratorClient {
    pub fn new(base_url: String, model: String, api_key: Secret<String>, timeout: Duration) -> Self {
        let http_client = Client::builder()
            // timeout is a MUST option for client
            .timeout(timeout)
            .build()
            .unwrap();
        GeneratorClient {
            http_client,
            base_url,
            model,
            api_key,
        }
    }

    /// Ask the model to draft an article for the given prompt.
    ///
    /// Returns the raw text of the first candidate (part texts concatenated,
    /// exactly what the provider SDKs expose as `response.text`); trimming
    /// and blankness checks are the caller's concern.
    pub async fn generate_article(&self, prompt: &str) -> Result<String, NewsletterError> {
        let path = format!("/v1beta/models/{}:generateContent", self.model);
        let url = Url::parse(&self.base_url)
            .map_err(|e| {
                tracing::error!("Failed to parse url: url={}, e={:?}", &self.base_url, e);
                NewsletterError::ParseUrlError
            })?
            .join(&path)
            .map_err(|e| {
                tracing::error!("Url failed to join {}: {:?}", path, e);
                NewsletterError::JoinUrlError
            })?;

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };
        let response = self
            .http_client
            .post(url)
            .header(HEADER_KEY, self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to call the generator API: {:?}", e);
                NewsletterError::GenerateArticleError(e)
            })?
            .error_for_status()?;

        let response_body: GenerateContentResponse = response.json().await?;
        let text = response_body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        if text.is_empty() {
            tracing::error!("Generator response carried no text parts.");
            return Err(NewsletterError::GeneratorResponseMissingText);
        }
        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}
