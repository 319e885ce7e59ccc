//! HTTP transport and request drivers.

use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::options::{MatchingOptions, RouteOptions, Waypoint};
use crate::route::{Match, Route, parse_matching_response, parse_route_response};
use crate::tracepoint::Tracepoint;
use crate::traits::{DirectionsOptions, Transport};

/// Where and how to reach the service.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// Service root; request paths are appended to it.
    pub base_url: String,
    /// Sent as the `access_token` query parameter, never logged.
    pub access_token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.mapbox.com".to_string(),
            access_token: None,
            timeout_secs: 10,
        }
    }
}

/// Blocking HTTP transport. Error responses whose JSON body carries a
/// service `code` are handed to the decoder so that code is reported;
/// any other error status is a transport error.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: DirectionsConfig,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Builds the underlying client; fails only if TLS or the client
    /// builder cannot be initialised.
    pub fn new(config: DirectionsConfig) -> std::result::Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str, params: &[(String, String)]) -> Result<Value> {
        let url = self.url(path);
        debug!(%url, "requesting");

        let mut request = self.client.get(&url).query(params);
        if let Some(token) = &self.config.access_token {
            request = request.query(&[("access_token", token)]);
        }

        let response = request.send()?;
        let status_error = response.error_for_status_ref().err();
        let bytes = response.bytes()?;
        match (serde_json::from_slice::<Value>(&bytes), status_error) {
            (Ok(body), None) => Ok(body),
            (Ok(body), Some(_)) if has_service_code(&body) => Ok(body),
            (_, Some(status_error)) => Err(status_error.into()),
            (Err(err), None) => Err(err.into()),
        }
    }
}

fn has_service_code(body: &Value) -> bool {
    body.get("code").is_some_and(Value::is_string)
}

/// Requests routes between the options' waypoints.
pub fn calculate<T: Transport>(
    transport: &T,
    options: &RouteOptions,
) -> Result<(Vec<Waypoint>, Vec<Route>)> {
    let path = options.path()?;
    let body = transport.get_json(&path, &options.params())?;
    parse_route_response(&body, options)
}

/// Matches the options' trace to the road network.
pub fn match_trace<T: Transport>(
    transport: &T,
    options: &MatchingOptions,
) -> Result<(Vec<Option<Tracepoint>>, Vec<Match>)> {
    let path = options.path()?;
    let body = transport.get_json(&path, &options.params())?;
    parse_matching_response(&body, options)
}
