use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use crate::{
    error::SolarError,
    model::{Location, SolarTimes},
    transport::{HttpTransport, Transport},
};

/// Endpoint of the public sunrise-sunset.org JSON API.
pub const BASE_URL: &str = "https://api.sunrise-sunset.org/json";

const STATUS_OK: &str = "OK";

/// Outer JSON object of every API answer.
///
/// `results` is kept untyped until `status` has been checked: on failures the
/// service sends `"results": ""` alongside the status.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    results: Option<serde_json::Value>,
    #[serde(default)]
    status: String,
}

/// Looks up today's solar events for a coordinate pair.
///
/// Every call performs exactly one request; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SolarTimeClient<T = HttpTransport> {
    base_url: String,
    transport: T,
}

impl SolarTimeClient<HttpTransport> {
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::new())
    }
}

impl Default for SolarTimeClient<HttpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transport> SolarTimeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            transport,
        }
    }

    /// Send requests to `base_url` instead of [`BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch today's events for `latitude`, `longitude` (decimal degrees).
    ///
    /// Coordinates are passed through unchecked; out-of-range values are
    /// rejected by the service and surface as [`SolarError::ApiStatus`].
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<SolarTimes<Utc>, SolarError> {
        let query = query_params(latitude, longitude);
        debug!(url = %self.base_url, ?query, "requesting solar times");

        let body = self
            .transport
            .get(&self.base_url, &query)
            .await
            .map_err(SolarError::Transport)?;

        decode_response(&body)
    }

    pub async fn fetch_location(&self, location: &Location) -> Result<SolarTimes<Utc>, SolarError> {
        self.fetch(location.latitude, location.longitude).await
    }
}

/// `formatted=0` makes the service return ISO 8601 timestamps and the day
/// length in seconds, which is what [`SolarTimes`] decodes.
fn query_params(latitude: f64, longitude: f64) -> [(&'static str, String); 3] {
    [
        ("lat", format!("{latitude:.7}")),
        ("lng", format!("{longitude:.7}")),
        ("formatted", "0".to_string()),
    ]
}

fn decode_response(body: &str) -> Result<SolarTimes<Utc>, SolarError> {
    if body.trim().is_empty() {
        return Err(SolarError::EmptyResponse);
    }

    let envelope: Envelope = serde_json::from_str(body)?;

    if envelope.status != STATUS_OK {
        return Err(SolarError::ApiStatus(envelope.status));
    }

    match envelope.results {
        None | Some(serde_json::Value::Null) => Err(SolarError::MissingResult),
        Some(results) => Ok(serde_json::from_value(results)?),
    }
}
