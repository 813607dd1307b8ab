use thiserror::Error;

/// Boxed cause of a transport failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures of [`SolarTimeClient::fetch`](crate::SolarTimeClient::fetch).
///
/// None of these are retried by the client.
#[derive(Error, Debug)]
pub enum SolarError {
    /// The request could not be sent or the response could not be read.
    #[error("Error retrieving API: {0}")]
    Transport(#[source] BoxError),

    /// The service answered without a body.
    #[error("Response body is empty")]
    EmptyResponse,

    /// The body is not the expected JSON envelope.
    #[error("Unable to parse API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service reported a status other than `OK`, e.g. `INVALID_REQUEST`.
    #[error("Error in API response. Status: {0}")]
    ApiStatus(String),

    /// Status was `OK` but no results were included.
    #[error("No results returned by API")]
    MissingResult,
}
