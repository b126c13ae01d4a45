//! Nexus UI Showcase Entry Point
//!
//! Initializes logging and mounts the component showcase to the DOM.

use leptos::*;
use tracing_wasm::WASMLayerConfigBuilder;

mod components;
mod format;
mod showcase;

use showcase::Showcase;

fn main() {
    // Initialize WASM tracing
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(tracing::Level::DEBUG)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting Nexus UI showcase");

    mount_to_body(|| view! { <Showcase /> });
}
