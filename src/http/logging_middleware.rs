use std::time::Instant;

use http::Extensions;
use log::{debug, warn};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

pub struct LoggingMiddleware;

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();
        debug!("--> {} {}", method, url);

        let result = next.run(req, extensions).await;
        let elapsed = started.elapsed().as_millis();
        match &result {
            Ok(response) => debug!("<-- {} {} {} ({} ms)", response.status(), method, url, elapsed),
            Err(err) => warn!("<-- {} {} failed after {} ms: {}", method, url, elapsed, err),
        }
        result
    }
}
