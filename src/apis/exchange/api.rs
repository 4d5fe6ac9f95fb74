use crate::{
    apis::{
        auth::Token,
        decode_json,
        exchange::{ExchangeRate, ExchangeRateRequest, ExchangeRequest, ExchangeResponse},
        RevolutClientInner,
    },
    client::{build_client_with_middleware, Environment},
    common::{EXCHANGE_PATH, RATE_PATH},
    middlewares::authentication::AuthenticationMiddleware,
    Error,
};
use std::sync::Arc;

/// Revolut Business exchange APIs client.
///
/// Every request is authenticated with the access token the client was created with.
/// The token is not refreshed: once it expires, create a new `ExchangeApi`.
#[derive(Clone, Debug)]
pub struct ExchangeApi {
    inner: Arc<RevolutClientInner>,
}

impl ExchangeApi {
    /// Creates a new exchange APIs client using the given access token.
    ///
    /// Fails without contacting the server if the token is empty or cannot be sent as a header.
    pub fn new(access_token: &Token, environment: Environment) -> Result<Self, Error> {
        Self::from_http_client(reqwest::Client::new(), access_token, environment)
    }

    pub(crate) fn from_http_client(
        client: reqwest::Client,
        access_token: &Token,
        environment: Environment,
    ) -> Result<Self, Error> {
        let auth_middleware = AuthenticationMiddleware::new(access_token)?;

        Ok(Self {
            inner: Arc::new(RevolutClientInner {
                client: build_client_with_middleware(client, Some(auth_middleware)),
                environment,
            }),
        })
    }

    /// Gets the exchange rate and fee for the given currency pair and amount.
    ///
    /// Currency codes are validated by the server.
    #[tracing::instrument(
        name = "Get Exchange Rate",
        skip(self, req),
        fields(from = %req.from, to = %req.to)
    )]
    pub async fn rate(&self, req: &ExchangeRateRequest) -> Result<ExchangeRate, Error> {
        let amount = format_amount(req.amount);

        let res = self
            .inner
            .client
            .get(self.inner.environment.api_endpoint(RATE_PATH)?)
            .query(&[
                ("from", req.from.as_str()),
                ("to", req.to.as_str()),
                ("amount", amount.as_str()),
            ])
            .send()
            .await?;

        decode_json(res).await
    }

    /// Exchanges money between two accounts of the business.
    ///
    /// To check the exchange rate and fees for the operation, use [`rate`](ExchangeApi::rate) first.
    /// The request is sent once: retrying is left to the caller, using the same `request_id`.
    #[tracing::instrument(
        name = "Exchange Currency",
        skip(self, req),
        fields(request_id = %req.request_id)
    )]
    pub async fn exchange(&self, req: &ExchangeRequest) -> Result<ExchangeResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.environment.api_endpoint(EXCHANGE_PATH)?)
            .json(req)
            .send()
            .await?;

        decode_json(res).await
    }
}

/// Formats an amount with exactly two decimal digits.
pub(crate) fn format_amount(amount: f64) -> String {
    format!("{:.2}", amount)
}
