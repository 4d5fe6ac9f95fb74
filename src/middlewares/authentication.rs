use crate::{apis::auth::Token, Error};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, AUTHORIZATION},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

/// Reqwest middleware to inject a fixed bearer access token into outgoing HTTP requests.
///
/// The header value is validated once, when the middleware is created.
pub struct AuthenticationMiddleware {
    header_value: HeaderValue,
}

impl AuthenticationMiddleware {
    /// Prepares the `Authorization` header for the given access token.
    ///
    /// Fails if the token is empty or contains characters not allowed in a header.
    pub fn new(access_token: &Token) -> Result<Self, Error> {
        if access_token.expose_secret().trim().is_empty() {
            return Err(Error::InvalidConfiguration(
                "access token must not be empty".to_string(),
            ));
        }

        let mut header_value =
            HeaderValue::from_str(&format!("Bearer {}", access_token.expose_secret())).map_err(
                |_| {
                    Error::InvalidConfiguration(
                        "access token contains invalid header characters".to_string(),
                    )
                },
            )?;
        header_value.set_sensitive(true);

        Ok(Self { header_value })
    }
}

#[async_trait]
impl Middleware for AuthenticationMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        req.headers_mut()
            .insert(AUTHORIZATION, self.header_value.clone());

        next.run(req, extensions).await
    }
}
