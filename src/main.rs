use chat_web::{config::AppConfig, App};
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    let (config, warnings) = AppConfig::load();

    // Initialize tracing for logging
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config.log_level)
            .build(),
    );
    for warning in &warnings {
        tracing::warn!(error = %warning, "configuration value ignored");
    }
    tracing::info!(token_key = %config.token_key, "starting chat-web");

    // Mount the app
    mount_to_body(move || view! { <App config=config.clone() /> });
}
