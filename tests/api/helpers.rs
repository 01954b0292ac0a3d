use once_cell::sync::Lazy;
use service_center::{
    configuration::get_configuration,
    database::get_connection_pool,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use sqlx::PgPool;

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub port: u16,
    pub api_client: reqwest::Client,
}

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    let test_log = std::env::var("TEST_LOG")
        .map(|value| value == "true")
        .unwrap_or(false);
    // A second global subscriber in the same process is refused; that is fine here.
    if test_log {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        let _ = init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        let _ = init_subscriber(subscriber);
    }
});

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let mut configuration = get_configuration().expect("Failed to read configuration.");
    configuration.application.port = 0;
    let db_pool = get_connection_pool(&configuration.database);

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application.");
    let application_port = application.port();
    let address = format!("http://127.0.0.1:{}", application_port);
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        db_pool,
        port: application_port,
        api_client: reqwest::Client::new(),
    }
}

#[allow(dead_code)]
impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.api_client
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn put_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .put(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}
