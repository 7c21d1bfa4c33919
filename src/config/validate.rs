// src/config/validate.rs
use tracing::info;
use url::Url;

use crate::config::{ArmyConfig, ConfigError};

/// Strict post-assembly gate over the whole roster. Opposite policy from
/// assembly: the first malformed record aborts the entire load, and later
/// records are not examined.
///
/// Assembler output satisfies the field checks by construction; the webhook
/// URL well-formedness check is the one that can still fire, since assembly
/// never parses URLs. Externally supplied lists get the full treatment.
pub fn validate_configs(configs: &[ArmyConfig]) -> Result<(), ConfigError> {
    if configs.is_empty() {
        return Err(ConfigError::EmptyDataset(
            "configuration must contain at least one army".into(),
        ));
    }

    for (index, config) in configs.iter().enumerate() {
        let fields: [(&'static str, &str); 5] = [
            ("name", &config.name),
            ("sheet_id", &config.sheet_id),
            ("webhook_url", &config.webhook_url),
            ("current_supplies_cell", &config.current_supplies_cell),
            ("daily_consumption_cell", &config.daily_consumption_cell),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { index, field });
            }
        }

        // Must be an absolute URL with a host, not just any parseable string.
        let parsed = Url::parse(&config.webhook_url).ok().filter(Url::has_host);
        if parsed.is_none() {
            return Err(ConfigError::InvalidWebhookUrl {
                index,
                url: config.webhook_url.clone(),
            });
        }
    }

    info!(count = configs.len(), "configuration validation passed");
    Ok(())
}
