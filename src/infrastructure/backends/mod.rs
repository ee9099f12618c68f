pub mod http;
pub mod offline;

use std::sync::Arc;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendHandle;

pub struct BackendManager {}

impl BackendManager {
    /// Picks the backend from configuration. An empty `api-url`, or the
    /// literal value `offline`, selects the offline backend.
    pub fn get() -> BackendHandle {
        let url = Config::get(ConfigKey::ApiURL);
        if url.is_empty() || url == "offline" {
            return Arc::new(offline::OfflineBackend::default());
        }

        return Arc::new(http::HttpBackend::default());
    }
}
