use std::sync::Arc;

use skill_tutor::ai::GeminiClient;
use skill_tutor::api::{handler, helpers};
use skill_tutor::core::config::AppConfig;
use tracing::{error, warn};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    skill_tutor::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        lambda_runtime::Error::from(e)
    })?;
    if config.api_key().is_none() {
        warn!("GEMINI_API_KEY is not set; lesson requests will fail until it is configured");
    }
    let config = Arc::new(config);

    lambda_runtime::run(lambda_runtime::service_fn(move |event| {
        let config = Arc::clone(&config);
        async move {
            // Fresh client per invocation; nothing is shared between requests.
            let client = match GeminiClient::new(&config) {
                Ok(client) => client,
                Err(e) => {
                    return Ok(helpers::err_response(&config, e.status_code(), &e.to_string()));
                }
            };
            handler(&config, &client, event).await
        }
    }))
    .await
}
