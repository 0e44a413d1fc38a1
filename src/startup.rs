use crate::configuration::Settings;
use crate::constant::{FORM_PAYLOAD_LIMIT_BYTES, IMAGE_DATA_URI_PREFIX};
use crate::error::NewsletterError;
use crate::generator_client::GeneratorClient;
use crate::routes;
use actix_web::cookie::Key;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use actix_web_flash_messages::storage::CookieMessageStore;
use actix_web_flash_messages::FlashMessagesFramework;
use base64::engine::general_purpose;
use base64::Engine;
use secrecy::{ExposeSecret, Secret};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

// A new type to hold the newly built server and its port
pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(config: Settings) -> Result<Self, NewsletterError> {
        // Build a `GeneratorClient` using `configuration`
        let timeout = config.generator.timeout();
        let generator_client = GeneratorClient::new(
            config.generator.base_url,
            config.generator.model,
            config.generator.api_key,
            timeout,
        );

        // Read and encode the brand image once; every render reuses it.
        // A missing asset is fatal here, before the server comes up.
        let logo = LogoAsset::load(&config.application.logo_path)?;

        let address = format!("{}:{}", config.application.host, config.application.port);
        let listener = TcpListener::bind(address).map_err(|e| {
            tracing::error!("Failed to bind to TcpListener");
            NewsletterError::BindTcpListenerError(e)
        })?;
        let port = listener.local_addr().unwrap().port();

        let server = run(
            listener,
            generator_client,
            logo,
            config.application.hmac_secret,
        )?;

        // We "save" the bound port in one of `Application`'s fields
        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    // A more expressive name that makes it clear that
    // this function only returns when the application is stopped.
    pub async fn run_until_stopped(self) -> Result<(), NewsletterError> {
        self.server.await.map_err(|e| {
            tracing::error!("Failed to run server.");
            NewsletterError::RunServerError(e)
        })
    }
}

/// The startup-loaded brand image, pre-encoded as a data URI.
#[derive(Debug, Clone)]
pub struct LogoAsset {
    data_uri: String,
}

impl LogoAsset {
    pub fn load(path: &str) -> Result<Self, NewsletterError> {
        let bytes = std::fs::read(path).map_err(|e| {
            tracing::error!("Failed to read the logo asset: path={}, e={:?}", path, e);
            NewsletterError::ReadLogoAssetError(e)
        })?;
        Ok(Self::from_bytes(&bytes))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let data_uri = format!(
            "{}{}",
            IMAGE_DATA_URI_PREFIX,
            general_purpose::STANDARD.encode(bytes)
        );
        Self { data_uri }
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

fn run(
    listener: TcpListener,
    generator_client: GeneratorClient,
    logo: LogoAsset,
    hmac_secret: Secret<String>,
) -> Result<Server, NewsletterError> {
    // Re-use the same HTTP client across multiple requests
    let generator_client = web::Data::new(generator_client);
    let logo = web::Data::new(logo);

    // Flash message, CookieMessageStore enforces that the cookie used as storage is signed
    let secret_key = Key::from(hmac_secret.expose_secret().as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let server = HttpServer::new(move || {
        App::new()
            // Middlewares are added using the `wrap` method on `App`
            .wrap(message_framework.clone())
            .wrap(TracingLogger::default())
            // The uploaded image rides base64-encoded inside the urlencoded
            // body, so the default form payload limit is far too small.
            .app_data(web::FormConfig::default().limit(FORM_PAYLOAD_LIMIT_BYTES))
            .app_data(generator_client.clone())
            .app_data(logo.clone())
            .route("/", web::get().to(routes::home))
            .route("/newsletter", web::post().to(routes::generate_newsletter))
            .route("/health_check", web::get().to(routes::health_check))
    })
    .listen(listener)
    .map_err(|e| {
        tracing::error!("Failed to listen to TcpListener");
        NewsletterError::ListenTcpListenerError(e)
    })?
    .run();

    // No .await here!
    Ok(server)
}
