use anyhow::Result;
use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::config::WeatherConfig;
use crate::constants::{SERVER_NAME, SERVER_VERSION};
use crate::geocoding::GeocodingClient;
use crate::handlers;
use crate::http::HttpClient;
use crate::models::{GetAlertsRequest, LocationRequest};
use crate::nws::NwsClient;

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    nws: NwsClient,
    geocoder: GeocodingClient,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance. Both clients share one HTTP connection pool.
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let http = HttpClient::new(&config.user_agent)?;

        Ok(Self {
            nws: NwsClient::new(http.clone(), &config.nws_api_base),
            geocoder: GeocodingClient::new(http, &config.geocoding_base),
            tool_router: Self::tool_router(),
        })
    }

    fn text(text: String) -> CallToolResult {
        CallToolResult::success(vec![Content::text(text)])
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the National Weather Service API. \
                Provides weather alerts for US states, forecasts for named US locations, \
                and approximate sunrise/sunset times."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets active weather alerts for a US state
    #[tool(description = "Get weather alerts for a state")]
    async fn get_alerts(
        &self,
        Parameters(request): Parameters<GetAlertsRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting alerts for state: {}", request.state);

        if request.state.chars().count() != 2 {
            return Err(McpError::invalid_params(
                "state must be a two-letter state code (e.g. 'CA', 'NY')",
                None,
            ));
        }

        let text = handlers::get_alerts(&self.nws, &request.state).await;
        Ok(Self::text(text))
    }

    /// Gets the NWS forecast for a free-text location
    #[tool(description = "Get weather forecast for a location")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting forecast for location: {}", request.location);

        let text = handlers::get_forecast(&self.nws, &self.geocoder, &request.location).await;
        Ok(Self::text(text))
    }

    /// Gets estimated sunrise and sunset times for today
    #[tool(description = "Get sunrise and sunset times for a location")]
    async fn get_sunrise_sunset(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting sunrise/sunset for location: {}", request.location);

        let today = chrono::Utc::now().date_naive();
        let text = handlers::get_sunrise_sunset(&self.geocoder, &request.location, today).await;
        Ok(Self::text(text))
    }
}
