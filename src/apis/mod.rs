//! Clients for the Revolut Business APIs.

use crate::{client::Environment, Error};
use reqwest_middleware::ClientWithMiddleware;
use serde::de::DeserializeOwned;
use std::fmt::{Debug, Formatter};

pub mod auth;
pub mod exchange;

pub(crate) struct RevolutClientInner {
    pub(crate) client: ClientWithMiddleware,
    pub(crate) environment: Environment,
}

impl Debug for RevolutClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevolutClientInner")
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

/// Reads the whole response body and decodes it as JSON.
///
/// Decoding failures are reported as [`Error::DecodeError`](crate::Error::DecodeError)
/// rather than being folded into HTTP errors.
pub(crate) async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
