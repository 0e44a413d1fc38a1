use newsletter_studio::configuration;
use newsletter_studio::error::NewsletterError;
use newsletter_studio::startup::Application;
use newsletter_studio::telemetry;

#[tokio::main]
async fn main() -> Result<(), NewsletterError> {
    let subscriber =
        telemetry::get_subscriber("newsletter-studio".into(), "info".into(), std::io::stdout);
    telemetry::init_subscriber(subscriber)?;

    let config = configuration::get_configuration()?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;

    Ok(())
}
