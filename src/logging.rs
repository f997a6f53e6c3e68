//! Browser logging setup

use std::sync::Once;

use tracing_wasm::WASMLayerConfigBuilder;

static INIT: Once = Once::new();

/// Install the panic hook and the console tracing subscriber.
///
/// Safe to call more than once; only the first call has an effect.
pub fn init() {
    INIT.call_once(|| {
        // Initialize panic hook for better error messages
        console_error_panic_hook::set_once();

        let level = if cfg!(debug_assertions) {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        tracing_wasm::set_as_global_default_with_config(
            WASMLayerConfigBuilder::new().set_max_level(level).build(),
        );
    });
}
