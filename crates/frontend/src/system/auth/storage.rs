use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "forum_access_token";
const REFRESH_TOKEN_KEY: &str = "forum_refresh_token";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if storage.set_item(key, value).is_err() {
            log::warn!("Failed to write {} to localStorage", key);
        }
    }
}

/// Session tokens persisted in localStorage between page loads
#[derive(Debug, Clone, Default)]
pub struct StoredTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl StoredTokens {
    pub fn load() -> Self {
        Self {
            access_token: read(ACCESS_TOKEN_KEY),
            refresh_token: read(REFRESH_TOKEN_KEY),
        }
    }

    pub fn save_access_token(token: &str) {
        write(ACCESS_TOKEN_KEY, token);
    }

    pub fn save(access_token: &str, refresh_token: &str) {
        write(ACCESS_TOKEN_KEY, access_token);
        write(REFRESH_TOKEN_KEY, refresh_token);
    }

    pub fn clear() {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ACCESS_TOKEN_KEY);
            let _ = storage.remove_item(REFRESH_TOKEN_KEY);
        }
    }
}
