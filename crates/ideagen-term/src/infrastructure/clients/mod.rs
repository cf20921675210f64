use anyhow::bail;
use anyhow::Result;
use ideagen_client::GenerationClientFactory;
use ideagen_client::GenerationClientRef;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub struct GenerationClientManager {}

impl GenerationClientManager {
    /// HTTP client for the configured service base URL.
    pub fn get() -> Result<GenerationClientRef> {
        let api_url = Config::get(ConfigKey::ApiURL);
        if api_url.is_empty() {
            bail!("The generation service URL is not defined. Set --api-url or api-url in config.toml.");
        }

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            bail!(format!(
                "The generation service URL must start with http:// or https://, got '{api_url}'"
            ));
        }

        return Ok(GenerationClientFactory::create_http_client(api_url));
    }
}
