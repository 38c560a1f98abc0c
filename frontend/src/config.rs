//! Loads the form settings bundled into the wasm binary.
//!
//! `form.config.json` is embedded at compile time. A malformed document is not
//! fatal: the defaults are used and a warning goes to the browser console.

use common::config::FormConfig;

const EMBEDDED_CONFIG: &str = include_str!("../form.config.json");

pub fn load() -> FormConfig {
    match FormConfig::from_json(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("{err}; usando configuração padrão"));
            FormConfig::default()
        }
    }
}
