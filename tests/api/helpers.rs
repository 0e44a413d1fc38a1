use newsletter_studio::configuration;
use newsletter_studio::startup::Application;
use newsletter_studio::telemetry;
use once_cell::sync::Lazy;
use wiremock::MockServer;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // `stdout` and `sink` have different types, hence the two branches
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        telemetry::init_subscriber(subscriber).expect("Failed to init subscriber");
    }
});

pub struct TestApp {
    pub address: String,
    pub generator_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spin up an instance of our application against a mock generator API
    /// and return everything a test needs to drive it.
    ///
    /// We are running tests, so it is not worth it to propagate errors:
    /// if we fail to perform the required setup we can just panic and crash
    /// all the things.
    pub async fn spawn_app() -> TestApp {
        Lazy::force(&TRACING);

        // Stand-in for the hosted generator API
        let generator_server = MockServer::start().await;

        let config = {
            let mut c =
                configuration::get_configuration().expect("Failed to read configuration");
            // Use a random OS port
            c.application.port = 0;
            // Point the client at the mock server
            c.generator.base_url = generator_server.uri();
            c
        };

        let application = Application::build(config)
            .await
            .expect("Failed to build application");
        let address = format!("http://127.0.0.1:{}", application.port());
        // Launch the server as a background task
        let _ = tokio::spawn(application.run_until_stopped());

        // Redirects are asserted on rather than followed, and the flash
        // cookie has to survive from one request to the next.
        let api_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .cookie_store(true)
            .build()
            .unwrap();

        TestApp {
            address,
            generator_server,
            api_client,
        }
    }

    pub async fn get_home(&self) -> reqwest::Response {
        self.api_client
            .get(&format!("{}/", self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_home_html(&self) -> String {
        self.get_home().await.text().await.unwrap()
    }

    pub async fn post_newsletter<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: serde::Serialize,
    {
        self.api_client
            .post(&format!("{}/newsletter", self.address))
            .form(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// The body the generator API answers with when it succeeds.
pub fn article_response_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{ "text": text }],
                "role": "model"
            }
        }]
    })
}

/// A complete, valid submission; tests override the fields they care about.
pub fn valid_form(story: &str) -> serde_json::Value {
    serde_json::json!({
        "headline": "Welcome Back to a New School Year!",
        "location": "Sangli, Maharashtra",
        "author": "Sadaf Mujawar",
        "story": story,
        "highlights": "School reopens\nNew teachers appointed",
        "image": "",
        "theme": "light_blue"
    })
}

pub fn assert_is_redirect_to(response: &reqwest::Response, location: &str) {
    assert_eq!(response.status().as_u16(), 303);
    assert_eq!(response.headers().get("Location").unwrap(), location);
}
