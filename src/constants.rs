/// User agent string sent to both upstream services
pub const USER_AGENT: &str = "weather-mcp/1.0";

/// National Weather Service API base URL
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Nominatim geocoding service base URL
pub const GEOCODING_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Accept header value for weather API requests
pub const GEO_JSON: &str = "application/geo+json";

/// Name and version reported to MCP clients
pub const SERVER_NAME: &str = "weather-mcp";
pub const SERVER_VERSION: &str = "1.0";

/// Environment overrides for the upstream base URLs
pub const NWS_API_BASE_ENV: &str = "WEATHER_MCP_NWS_API_BASE";
pub const GEOCODING_API_BASE_ENV: &str = "WEATHER_MCP_GEOCODING_BASE";
