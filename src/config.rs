use crate::constants::{
    GEOCODING_API_BASE, GEOCODING_API_BASE_ENV, NWS_API_BASE, NWS_API_BASE_ENV, USER_AGENT,
};

/// Upstream endpoints and identity, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherConfig {
    pub nws_api_base: String,
    pub geocoding_base: String,
    pub user_agent: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            nws_api_base: NWS_API_BASE.to_string(),
            geocoding_base: GEOCODING_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl WeatherConfig {
    /// Defaults, with base URLs overridden from the environment when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(base) = lookup(NWS_API_BASE_ENV).filter(|v| !v.trim().is_empty()) {
            config.nws_api_base = normalize_base(&base);
        }
        if let Some(base) = lookup(GEOCODING_API_BASE_ENV).filter(|v| !v.trim().is_empty()) {
            config.geocoding_base = normalize_base(&base);
        }
        config
    }
}

fn normalize_base(base: &str) -> String {
    base.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_public_services() {
        let config = WeatherConfig::default();
        assert_eq!(config.nws_api_base, "https://api.weather.gov");
        assert_eq!(config.geocoding_base, "https://nominatim.openstreetmap.org");
        assert_eq!(config.user_agent, "weather-mcp/1.0");
    }

    #[test]
    fn lookup_overrides_bases_and_trims_slashes() {
        let config = WeatherConfig::from_lookup(|key| match key {
            NWS_API_BASE_ENV => Some("http://localhost:9000/".to_string()),
            GEOCODING_API_BASE_ENV => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(config.nws_api_base, "http://localhost:9000");
        assert_eq!(config.geocoding_base, GEOCODING_API_BASE);
    }
}
