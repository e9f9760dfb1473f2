// src/config/mod.rs
use std::env;

/// Where the analysis service lives. The endpoint is fixed for the lifetime
/// of the app; nothing else is configurable and nothing is persisted.
#[derive(Debug, Clone)]
pub struct Settings {
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl Settings {
    /// Reads settings from the environment, falling back to the default
    /// local endpoint.
    pub fn from_env() -> Self {
        let endpoint = env::var("LEXVIEW_ENDPOINT").unwrap_or_else(|_| default_endpoint());
        Self { endpoint }
    }
}

fn default_endpoint() -> String {
    "http://localhost:5000/analyze".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, "http://localhost:5000/analyze");
    }
}
