use serde_json::json;

use noctis_core::config::{AppConfig, LogFormat};

use crate::commands::CommandResult;

/// Dumps the effective configuration after file, env, and flag overrides.
pub fn run(config: &AppConfig) -> CommandResult {
    let format = match config.logging.format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    };

    CommandResult::success_with(
        "config",
        "effective configuration",
        Some(json!({
            "pricing": {
                "free_shipping_threshold": config.pricing.free_shipping_threshold,
                "standard_shipping_fee": config.pricing.standard_shipping_fee,
                "express_shipping_fee": config.pricing.express_shipping_fee,
                "tax_rate_pct": config.pricing.tax_rate_pct,
            },
            "storage": {
                "data_path": config.storage.data_path,
                "cart_key": config.storage.cart_key,
                "session_key": config.storage.session_key,
            },
            "logging": {
                "level": config.logging.level,
                "format": format,
            },
        })),
    )
}
