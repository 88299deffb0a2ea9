mod app;
mod components;
mod config;
mod error;
mod utils;

use app::App;
use config::{DEFAULT_LOG_LEVEL, SITE_CONFIG, SiteConfig};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_toml(SITE_CONFIG);
    utils::logging::init(
        config
            .as_ref()
            .map(|c| c.log_level.as_str())
            .unwrap_or(DEFAULT_LOG_LEVEL),
    );
    let config = config.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "using default site configuration");
        SiteConfig::default()
    });

    let Some(root) = document().get_element_by_id("app") else {
        tracing::error!("missing #app mount element");
        return;
    };
    let root = root.unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App config=config /> }).forget();
}
