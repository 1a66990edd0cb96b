pub mod auth;
pub mod browse;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod orders;

use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use noctis_core::cart::CartLedger;
use noctis_core::config::AppConfig;
use noctis_core::domain::cart::UuidLineIds;
use noctis_core::session::SessionManager;
use noctis_store::FileStore;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::success_with(command, message, None)
    }

    pub fn success_with(
        command: &str,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

/// Opens the shared data file; a failure becomes a ready-made error payload.
fn open_store(command: &str, config: &AppConfig) -> Result<Box<FileStore>, CommandResult> {
    FileStore::open(&config.storage.data_path).map(Box::new).map_err(|error| {
        CommandResult::failure(command, "storage", format!("storage issue: {error}"), 3)
    })
}

fn restore_cart(command: &str, config: &AppConfig) -> Result<CartLedger, CommandResult> {
    let store = open_store(command, config)?;
    Ok(CartLedger::restore(
        store,
        config.storage.cart_key.clone(),
        Vec::new(),
        Box::new(UuidLineIds),
    ))
}

fn restore_session(command: &str, config: &AppConfig) -> Result<SessionManager, CommandResult> {
    let store = open_store(command, config)?;
    Ok(SessionManager::restore(store, config.storage.session_key.clone()))
}

/// Mock processing pause; there is no real backend to wait on.
fn simulate_processing(delay: Duration) {
    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build();
    match runtime {
        Ok(runtime) => runtime.block_on(async { tokio::time::sleep(delay).await }),
        Err(_) => std::thread::sleep(delay),
    }
}
