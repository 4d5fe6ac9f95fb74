use crate::common::mock_server::{MockServerConfiguration, MockServerStorage};
use actix_web::{http::header, web, HttpRequest, HttpResponse};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use revolut_business::apis::exchange::{
    Amount, ExchangeRate, ExchangeRequest, ExchangeResponse, TransactionState,
};
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use uuid::Uuid;

static CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// POST /api/1.0/auth/token
pub(super) async fn post_token(
    configuration: web::Data<MockServerConfiguration>,
    form: web::Form<HashMap<String, String>>,
) -> HttpResponse {
    let field = |name: &str| form.get(name).map(String::as_str).unwrap_or_default();

    if field("client_id") != configuration.client_id
        || field("client_assertion_type") != CLIENT_ASSERTION_TYPE
        || !is_valid_client_assertion(&configuration, field("client_assertion"))
    {
        return HttpResponse::Unauthorized().json(json!({
            "error": "invalid_client",
            "error_description": "Invalid client assertion"
        }));
    }

    match field("grant_type") {
        "authorization_code" if field("code") == configuration.authorisation_code => {
            HttpResponse::Ok().json(json!({
                "access_token": configuration.access_token,
                "token_type": "bearer",
                "expires_in": 2399,
                "refresh_token": configuration.refresh_token
            }))
        }
        "refresh_token" if field("refresh_token") == configuration.refresh_token => {
            HttpResponse::Ok().json(json!({
                "access_token": configuration.access_token,
                "token_type": "bearer",
                "expires_in": 2399
            }))
        }
        _ => HttpResponse::BadRequest().json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorisation code or refresh token"
        })),
    }
}

#[derive(Deserialize)]
pub(super) struct RateQuery {
    from: String,
    to: String,
    amount: String,
}

/// GET /api/1.0/rate
pub(super) async fn get_rate(
    configuration: web::Data<MockServerConfiguration>,
    req: HttpRequest,
    query: web::Query<RateQuery>,
) -> HttpResponse {
    if !is_authorized(&configuration, &req) {
        return HttpResponse::Unauthorized().body("The request should be authorized.");
    }

    // The client must always send two decimal digits
    let amount = match query.amount.split_once('.') {
        Some((_, decimals)) if decimals.len() == 2 => query.amount.parse::<f64>().ok(),
        _ => None,
    };
    let amount = match amount {
        Some(amount) => amount,
        None => return HttpResponse::BadRequest().body("Invalid amount"),
    };

    let rate = match configuration
        .rates
        .get(&(query.from.clone(), query.to.clone()))
    {
        Some(rate) => *rate,
        None => {
            return HttpResponse::UnprocessableEntity()
                .body(format!("Unsupported currency pair: {}/{}", query.from, query.to))
        }
    };

    HttpResponse::Ok().json(ExchangeRate {
        from: Amount {
            amount,
            currency: query.from.clone(),
        },
        to: Amount {
            amount: (amount * rate * 100.0).round() / 100.0,
            currency: query.to.clone(),
        },
        rate,
        fee: Amount {
            amount: 0.0,
            currency: query.from.clone(),
        },
        rate_date: Utc::now(),
    })
}

/// POST /api/1.0/exchange
pub(super) async fn post_exchange(
    configuration: web::Data<MockServerConfiguration>,
    storage: web::Data<MockServerStorage>,
    req: HttpRequest,
    exchange_request: web::Json<ExchangeRequest>,
) -> HttpResponse {
    if !is_authorized(&configuration, &req) {
        return HttpResponse::Unauthorized().body("The request should be authorized.");
    }

    if exchange_request.from.amount.is_some() == exchange_request.to.amount.is_some() {
        return HttpResponse::BadRequest()
            .body("Exactly one of from.amount and to.amount must be provided");
    }

    let known_account = |account_id: &str, currency: &str| {
        configuration.accounts.get(currency).map(String::as_str) == Some(account_id)
    };
    if !known_account(
        &exchange_request.from.account_id,
        &exchange_request.from.currency,
    ) || !known_account(&exchange_request.to.account_id, &exchange_request.to.currency)
    {
        return HttpResponse::NotFound().body("Account not found");
    }

    // Requests with an already seen request id return the original transaction
    let mut storage = storage.write().unwrap();
    let res = storage
        .exchanges
        .entry(exchange_request.request_id.clone())
        .or_insert_with(|| {
            let now = Utc::now();
            ExchangeResponse {
                id: Uuid::new_v4().to_string(),
                state: TransactionState::Completed,
                reason_code: None,
                created_at: now,
                completed_at: Some(now),
            }
        });

    HttpResponse::Ok().json(res.clone())
}

#[derive(Deserialize)]
pub(super) struct AppConfirmQuery {
    client_id: String,
    redirect_uri: String,
}

/// GET /app-confirm
pub(super) async fn app_confirm(
    configuration: web::Data<MockServerConfiguration>,
    query: web::Query<AppConfirmQuery>,
) -> HttpResponse {
    if query.client_id != configuration.client_id || query.redirect_uri.is_empty() {
        return HttpResponse::BadRequest().body("Unknown application");
    }

    HttpResponse::Ok().json(
        configuration
            .accounts
            .values()
            .map(|account_id| {
                json!({
                    "id": account_id,
                    "code": configuration.authorisation_code
                })
            })
            .collect::<Vec<_>>(),
    )
}

fn is_authorized(configuration: &MockServerConfiguration, req: &HttpRequest) -> bool {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        == Some(configuration.access_token.as_str())
}

fn is_valid_client_assertion(configuration: &MockServerConfiguration, assertion: &str) -> bool {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;
    validation.set_audience(&["https://revolut.com"]);
    validation.set_issuer(&[&configuration.issuer]);
    validation.sub = Some(configuration.client_id.clone());

    DecodingKey::from_rsa_pem(&configuration.public_key_pem)
        .and_then(|key| jsonwebtoken::decode::<serde_json::Value>(assertion, &key, &validation))
        .is_ok()
}
