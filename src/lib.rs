//! Rust client for the [Revolut Business API](https://developer.revolut.com/docs/business/business-api).
//!
//! It covers OAuth authentication through signed client assertions, and the currency
//! exchange endpoints.
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Generate an RSA key pair and upload the public key (as an X509 certificate) in the
//! Business API settings page of your Revolut Business account:
//!
//! ```sh
//! openssl genrsa -out privatecert.pem 2048
//! openssl req -new -x509 -key privatecert.pem -out publiccert.cer -days 1825
//! ```
//!
//! Take note of the client ID assigned to your application, and of the domain of its
//! redirect URI: it is the issuer of the client assertions.
//!
//! ## Initialize a new `RevolutClient`
//!
//! ```rust,no_run
//! # use revolut_business::{RevolutClient, Error, apis::auth::Credentials, client::Environment};
//! # fn main() -> Result<(), Error> {
//! # let private_key_pem = String::new();
//! let client = RevolutClient::builder(Credentials::new(
//!     "my-client-id",
//!     "example.com",
//!     private_key_pem,
//! ))
//! .with_environment(Environment::Sandbox)
//! .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! By default, a `RevolutClient` connects to the Production environment.
//!
//! ## Obtain an access token
//!
//! Send the user to [`authorisation_url`](crate::apis::auth::OAuthApi::authorisation_url).
//! After consent, they are redirected back with a `code` to exchange for an access token:
//!
//! ```rust,no_run
//! # use revolut_business::{RevolutClient, Error};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: RevolutClient = unreachable!();
//! let token = client.oauth.exchange_authorisation_code("code-from-redirect").await?;
//!
//! // Later, once the access token expired
//! let refreshed = client
//!     .oauth
//!     .refresh_access_token(token.refresh_token.as_ref().unwrap())
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Exchange currencies
//!
//! ```rust,no_run
//! # use revolut_business::{RevolutClient, Error, apis::{auth::Token, exchange::*}};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let client: RevolutClient = unreachable!();
//! # let access_token: Token = unreachable!();
//! let exchange = client.exchange(&access_token)?;
//!
//! let quote = exchange.rate(&ExchangeRateRequest::new("GBP", "EUR")).await?;
//! println!("1 GBP = {} EUR (fee {} {})", quote.rate, quote.fee.amount, quote.fee.currency);
//!
//! let res = exchange
//!     .exchange(
//!         &ExchangeRequestBuilder::default()
//!             .from(
//!                 ExchangeAmountBuilder::default()
//!                     .account_id("gbp-account-id")
//!                     .currency("GBP")
//!                     .amount(100.0)
//!                     .build()
//!                     .unwrap(),
//!             )
//!             .to(ExchangeAmountBuilder::default()
//!                 .account_id("eur-account-id")
//!                 .currency("EUR")
//!                 .build()
//!                 .unwrap())
//!             .reference("Monthly rebalance")
//!             .build()
//!             .unwrap(),
//!     )
//!     .await?;
//!
//! println!("Exchange {} is {:?}", res.id, res.state);
//! # Ok(())
//! # }
//! ```
//!
//! Look into the [`demos`](../demos) for a runnable example:
//!
//! ```shell
//! cargo run --example exchange_currency
//! ```

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub(crate) mod authenticator;
pub mod client;
mod common;
pub mod error;
mod middlewares;

pub use client::RevolutClient;
pub use error::Error;
