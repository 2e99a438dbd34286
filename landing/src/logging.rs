//! Browser console logging via `tracing-wasm`.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

fn max_level(debug_build: bool) -> Level {
    if debug_build { Level::DEBUG } else { Level::INFO }
}

/// Install the console subscriber. Call once, before mounting.
pub fn init() {
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(max_level(cfg!(debug_assertions)))
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_builds_drop_debug_events() {
        assert_eq!(max_level(true), Level::DEBUG);
        assert_eq!(max_level(false), Level::INFO);
    }
}
