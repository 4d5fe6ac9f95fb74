use crate::error::{ApiError, Error};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware which turns every response not carrying a `200 OK` status
/// into an [`Error::ApiError`](crate::error::Error) holding the raw response body.
///
/// The Business API answers `200` on every successful call, so other `2xx` codes are
/// treated as failures too.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let response = next.run(req, extensions).await?;

        if response.status() != StatusCode::OK {
            tracing::debug!("Failed HTTP request. Status code: {}", response.status());

            let status = response.status().as_u16();
            let bytes = response.bytes().await?;
            return Err(Error::ApiError(ApiError {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            })
            .into());
        }

        Ok(response)
    }
}
