use crate::common::MAX_REQUEST_ID_LEN;
use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Parameters of an exchange rate quote.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct ExchangeRateRequest {
    /// The currency you would like to exchange from.
    #[builder(setter(into))]
    pub from: String,
    /// The currency you would like to exchange to.
    #[builder(setter(into))]
    pub to: String,
    /// Exchange amount, in major units of the `from` currency. Defaults to `1.00`.
    #[builder(default = "1.0")]
    pub amount: f64,
}

impl ExchangeRateRequest {
    /// Quote for exchanging `1.00` of `from` into `to`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount: 1.0,
        }
    }
}

/// Proposed exchange rate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeRate {
    /// Information about the currency to exchange from.
    pub from: Amount,
    /// Information about the currency to exchange to.
    pub to: Amount,
    /// Exchange rate.
    pub rate: f64,
    /// Fee for the operation.
    pub fee: Amount,
    /// Date of the proposed exchange rate.
    pub rate_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Amount {
    pub amount: f64,
    pub currency: String,
}

/// Currency exchange order between two accounts.
///
/// The amount must be set on exactly one side, either the one to sell or the one to buy.
///
/// `request_id` is the only deduplication mechanism: resubmitting a request with the same
/// id returns the original transaction. The builder fills it with a random UUID when not set.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct ExchangeRequest {
    /// Information about the account you want to exchange from.
    pub from: ExchangeAmount,
    /// Information about the account you want to exchange to.
    pub to: ExchangeAmount,
    /// A user-provided exchange reference.
    #[builder(setter(into), default)]
    pub reference: String,
    /// A unique value used to handle duplicates submitted as a result of a lost connection
    /// or another client error (40 characters max).
    #[builder(setter(into), default = "Uuid::new_v4().to_string()")]
    pub request_id: String,
}

impl ExchangeRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.request_id {
            Some(ref request_id) if request_id.is_empty() => {
                Err("request_id must not be empty".to_string())
            }
            Some(ref request_id) if request_id.chars().count() > MAX_REQUEST_ID_LEN => Err(format!(
                "request_id must be at most {} characters long",
                MAX_REQUEST_ID_LEN
            )),
            _ => Ok(()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Builder)]
pub struct ExchangeAmount {
    /// The account ID.
    #[builder(setter(into))]
    pub account_id: String,
    #[builder(setter(strip_option), default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[builder(setter(into))]
    pub currency: String,
}

/// Outcome of an exchange order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeResponse {
    /// The ID of the transaction.
    pub id: String,
    pub state: TransactionState,
    /// Reason code for declined or failed transactions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
    /// The instant when the transaction was created.
    pub created_at: DateTime<Utc>,
    /// The instant when the transaction was completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// State of a transaction, as reported by the server.
///
/// States unknown to this client are kept verbatim in [`Other`](TransactionState::Other).
#[derive(Serialize, Deserialize, Debug, Clone, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum TransactionState {
    Created,
    Pending,
    Completed,
    Declined,
    Failed,
    Reverted,
    #[serde(untagged)]
    Other(String),
}
