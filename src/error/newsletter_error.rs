use crate::utils;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use actix_web_flash_messages::FlashMessage;
use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum NewsletterError {
    // VALIDATE THE SUBMITTED FORM
    #[error("Story context is blank, nothing to generate from.")]
    StoryIsBlank,

    #[error("The uploaded image could not be decoded.")]
    DecodeImageError(#[source] base64::DecodeError),

    // GENERATOR API
    #[error("Failed to call the article generator API.")]
    GenerateArticleError(#[from] reqwest::Error),

    #[error("The generator response contained no article text.")]
    GeneratorResponseMissingText,

    #[error("The generated article is empty.")]
    ArticleIsEmpty,

    #[error("Url is incorrect.")]
    ParseUrlError,

    #[error("Url join path error.")]
    JoinUrlError,

    // STARTUP
    #[error("Failed to read the logo asset.")]
    ReadLogoAssetError(#[source] std::io::Error),

    #[error("Failed to bind TcpListener.")]
    BindTcpListenerError(#[source] std::io::Error),

    #[error("Failed to listen TcpListener.")]
    ListenTcpListenerError(#[source] std::io::Error),

    #[error("Failed to run server.")]
    RunServerError(#[source] std::io::Error),

    // CONFIGURATION
    #[error("Failed to determine the current directory.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse environment variable.")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),
}

impl Debug for NewsletterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for NewsletterError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            // Submission-level failures go back to the form with a visible
            // message instead of a bare error page.
            NewsletterError::StoryIsBlank
            | NewsletterError::DecodeImageError(_)
            | NewsletterError::GenerateArticleError(_)
            | NewsletterError::GeneratorResponseMissingText
            | NewsletterError::ArticleIsEmpty => {
                FlashMessage::error(self.to_string()).send();
                utils::redirect_to("/")
            }

            _ => HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
