//! Module containing the main Revolut Business API client.

use crate::{
    apis::{
        auth::{Credentials, OAuthApi, Token},
        exchange::ExchangeApi,
        RevolutClientInner,
    },
    authenticator::Authenticator,
    common::{
        DEFAULT_API_URL, DEFAULT_BUSINESS_URL, DEFAULT_SANDBOX_API_URL,
        DEFAULT_SANDBOX_BUSINESS_URL,
    },
    error::Error,
    middlewares::{
        authentication::AuthenticationMiddleware, error_handling::ErrorHandlingMiddleware,
    },
};
use reqwest::Url;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::{DefaultSpanBackend, TracingMiddleware};
use std::sync::Arc;

/// Client for the Revolut Business APIs.
///
/// Holds the long-lived application credentials. Access tokens are obtained through
/// [`oauth`](RevolutClient::oauth) and turned into an [`ExchangeApi`] with
/// [`exchange`](RevolutClient::exchange). Tokens are never cached nor refreshed
/// automatically.
#[derive(Debug, Clone)]
pub struct RevolutClient {
    /// OAuth APIs client.
    pub oauth: OAuthApi,
    http_client: reqwest::Client,
    environment: Environment,
}

impl RevolutClient {
    /// Builds a new [`RevolutClient`](crate::client::RevolutClient) with the default configuration.
    pub fn new(credentials: Credentials) -> Result<RevolutClient, Error> {
        RevolutClientBuilder::new(credentials).build()
    }

    /// Returns a new builder to configure a new [`RevolutClient`](crate::client::RevolutClient).
    pub fn builder(credentials: Credentials) -> RevolutClientBuilder {
        RevolutClientBuilder::new(credentials)
    }

    /// Creates an exchange APIs client authenticated with the given access token.
    ///
    /// Fails without contacting the server if the token is empty or cannot be sent as a header.
    pub fn exchange(&self, access_token: &Token) -> Result<ExchangeApi, Error> {
        ExchangeApi::from_http_client(
            self.http_client.clone(),
            access_token,
            self.environment.clone(),
        )
    }

    /// Environment this client is connected to.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}

/// Builder for a [`RevolutClient`](crate::client::RevolutClient).
#[derive(Debug)]
pub struct RevolutClientBuilder {
    client: reqwest::Client,
    credentials: Credentials,
    environment: Environment,
}

impl RevolutClientBuilder {
    /// Creates a new builder to configure a [`RevolutClient`](crate::client::RevolutClient).
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            environment: Environment::Production,
        }
    }

    /// Consumes the builder and builds a new [`RevolutClient`](crate::client::RevolutClient).
    ///
    /// Fails if the configured private key is not a valid PEM encoded RSA key.
    pub fn build(self) -> Result<RevolutClient, Error> {
        let authenticator = Authenticator::new(&self.credentials)?;

        tracing::debug!(environment = ?self.environment, "Building Revolut Business client");

        let inner = Arc::new(RevolutClientInner {
            client: build_client_with_middleware(self.client.clone(), None),
            environment: self.environment.clone(),
        });

        Ok(RevolutClient {
            oauth: OAuthApi::new(inner, authenticator),
            http_client: self.client,
            environment: self.environment,
        })
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    ///
    /// Timeouts and proxies are configured on this client.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Sets the environment to which this client should connect.
    ///
    /// Defaults to [`Environment::Production`].
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }
}

/// Revolut Business environment to which a client should connect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment.
    Production,
    /// Sandbox environment.
    Sandbox,
    /// Custom environment, mostly used for testing.
    Custom {
        /// Host of the `/api/1.0` endpoints.
        api_url: Url,
        /// Host of the business web app, where users confirm an authorisation.
        business_url: Url,
    },
}

impl Environment {
    /// Builds a custom environment where every host points to the same URL.
    pub fn from_single_url(url: &Url) -> Environment {
        Environment::Custom {
            api_url: url.clone(),
            business_url: url.clone(),
        }
    }

    /// Returns `Production` or `Sandbox` depending on the flag.
    pub fn from_sandbox_flag(sandbox: bool) -> Environment {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    pub(crate) fn api_endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = match self {
            Environment::Production => parse_url(DEFAULT_API_URL)?,
            Environment::Sandbox => parse_url(DEFAULT_SANDBOX_API_URL)?,
            Environment::Custom { api_url, .. } => api_url.clone(),
        };

        join_url(&base, path)
    }

    pub(crate) fn business_endpoint(&self, path: &str) -> Result<Url, Error> {
        let base = match self {
            Environment::Production => parse_url(DEFAULT_BUSINESS_URL)?,
            Environment::Sandbox => parse_url(DEFAULT_SANDBOX_BUSINESS_URL)?,
            Environment::Custom { business_url, .. } => business_url.clone(),
        };

        join_url(&base, path)
    }
}

fn parse_url(url: &str) -> Result<Url, Error> {
    Url::parse(url).map_err(|e| Error::InvalidConfiguration(format!("invalid URL {}: {}", url, e)))
}

fn join_url(base: &Url, path: &str) -> Result<Url, Error> {
    base.join(path).map_err(|e| {
        Error::InvalidConfiguration(format!("cannot join {} to {}: {}", path, base, e))
    })
}

pub(crate) fn build_client_with_middleware(
    client: reqwest::Client,
    auth_middleware: Option<AuthenticationMiddleware>,
) -> ClientWithMiddleware {
    let mut builder = reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::<DefaultSpanBackend>::default())
        .with(ErrorHandlingMiddleware);

    if let Some(auth_middleware) = auth_middleware {
        builder = builder.with(auth_middleware);
    }

    builder.build()
}
