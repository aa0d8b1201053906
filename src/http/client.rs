use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::error::catalog::Result;
use crate::http::json_middleware::JsonOnlyMiddleware;
use crate::http::logging_middleware::LoggingMiddleware;

pub fn user_agent() -> String {
    format!("edulearn/{} (+course catalog demo)", env!("CARGO_PKG_VERSION"))
}

/// Shared client for the public course APIs: fixed headers, request
/// logging, and JSON-only responses.
pub fn build_client() -> Result<ClientWithMiddleware> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Ok(agent) = HeaderValue::from_str(&user_agent()) {
        headers.insert(USER_AGENT, agent);
    }

    let client = Client::builder().default_headers(headers).build()?;

    Ok(ClientBuilder::new(client)
        .with(LoggingMiddleware)
        .with(JsonOnlyMiddleware)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_is_a_valid_header() {
        assert!(HeaderValue::from_str(&user_agent()).is_ok());
    }

    #[test]
    fn client_builds() {
        assert!(build_client().is_ok());
    }
}
