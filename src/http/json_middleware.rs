use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

pub(crate) fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        let ct = ct.trim_start().to_ascii_lowercase();
        ct.starts_with("application/json") || ct.starts_with("text/json")
    })
}

/// Turns error statuses and non-JSON bodies into request errors, so a
/// feed never tries to decode an HTML error page.
pub struct JsonOnlyMiddleware;

#[async_trait::async_trait]
impl Middleware for JsonOnlyMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let response = next.run(req, extensions).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!(
                "{} returned {}",
                response.url(),
                status
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok());
        if !is_json_content_type(content_type) {
            return Err(reqwest_middleware::Error::Middleware(anyhow::anyhow!(
                "{} answered with {:?} instead of JSON",
                response.url(),
                content_type.unwrap_or("no content type")
            )));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_json_content_types() {
        assert!(is_json_content_type(Some("application/json")));
        assert!(is_json_content_type(Some("application/json; charset=utf-8")));
        assert!(is_json_content_type(Some("Application/JSON")));
        assert!(!is_json_content_type(Some("text/html; charset=utf-8")));
        assert!(!is_json_content_type(None));
    }
}
