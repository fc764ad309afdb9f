//! Access to the browser location
//!
//! Everything that reads or changes `window.location` goes through the
//! [`Location`] trait so view models can be tested without a browser.

use std::collections::BTreeMap;
use wasm_bindgen::JsValue;

/// Stands in for `#` while a URL travels through the login redirect
pub const HASH_PLACEHOLDER: &str = "__dwHash__";

pub trait Location: Send + Sync {
    /// Full current URL
    fn href(&self) -> String;
    /// Navigate the current browsing context to `url`
    fn assign(&self, url: &str);
    /// Query string without the leading `?`
    fn search(&self) -> String;
    /// Replace the query string in place, without a history entry
    fn replace_search(&self, search: &str);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserLocation;

impl Location for BrowserLocation {
    fn href(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn assign(&self, url: &str) {
        // Plain assignment; window.open(url, "_self") crashes Chrome here.
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::error!("Failed to navigate to {}: {:?}", url, err);
        }
    }

    fn search(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().search().ok())
            .map(|s| s.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn replace_search(&self, search: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        let url = if search.is_empty() {
            format!("{}{}", path, hash)
        } else {
            format!("{}?{}{}", path, search, hash)
        };

        if let Ok(history) = window.history() {
            if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::warn!("Failed to update URL to {}: {:?}", url, err);
            }
        }
    }
}

/// Escape the fragment marker so the URL survives the login redirect
pub fn escape_hash(url: &str) -> String {
    url.replacen('#', HASH_PLACEHOLDER, 1)
}

fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

pub fn query_param(search: &str, key: &str) -> Option<String> {
    parse_query(search).remove(key)
}

/// Set (or with `None`, remove) one query parameter, keeping the others
pub fn with_query_param(search: &str, key: &str, value: Option<&str>) -> String {
    let mut params = parse_query(search);
    match value {
        Some(value) => {
            params.insert(key.to_string(), value.to_string());
        }
        None => {
            params.remove(key);
        }
    }
    serde_qs::to_string(&params).unwrap_or_default()
}
