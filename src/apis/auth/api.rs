use crate::{
    apis::{
        auth::{AuthorisationCode, OAuthResponse, Token},
        decode_json, RevolutClientInner,
    },
    authenticator::Authenticator,
    common::{
        APP_CONFIRM_PATH, AUTH_TOKEN_PATH, CLIENT_ASSERTION_TYPE, GRANT_TYPE_AUTHORIZATION_CODE,
        GRANT_TYPE_REFRESH_TOKEN,
    },
    Error,
};
use reqwest::Url;
use serde::Serialize;
use std::sync::Arc;

/// Revolut Business OAuth APIs client.
#[derive(Debug, Clone)]
pub struct OAuthApi {
    inner: Arc<RevolutClientInner>,
    authenticator: Arc<Authenticator>,
}

impl OAuthApi {
    pub(crate) fn new(inner: Arc<RevolutClientInner>, authenticator: Authenticator) -> Self {
        Self {
            inner,
            authenticator: Arc::new(authenticator),
        }
    }

    /// Exchanges an authorisation code for an access token.
    ///
    /// The returned response includes a refresh token to be used with
    /// [`refresh_access_token`](OAuthApi::refresh_access_token).
    #[tracing::instrument(name = "Exchange Authorisation Code", skip_all)]
    pub async fn exchange_authorisation_code(&self, code: &str) -> Result<OAuthResponse, Error> {
        let client_assertion = self.authenticator.client_assertion()?;

        self.request_token(&TokenRequest {
            grant_type: GRANT_TYPE_AUTHORIZATION_CODE,
            code: Some(code),
            refresh_token: None,
            client_id: self.authenticator.client_id(),
            client_assertion_type: CLIENT_ASSERTION_TYPE,
            client_assertion: &client_assertion,
        })
        .await
    }

    /// Requests a new access token after the previous one expired.
    #[tracing::instrument(name = "Refresh Access Token", skip_all)]
    pub async fn refresh_access_token(&self, refresh_token: &Token) -> Result<OAuthResponse, Error> {
        let client_assertion = self.authenticator.client_assertion()?;

        self.request_token(&TokenRequest {
            grant_type: GRANT_TYPE_REFRESH_TOKEN,
            code: None,
            refresh_token: Some(refresh_token.expose_secret()),
            client_id: self.authenticator.client_id(),
            client_assertion_type: CLIENT_ASSERTION_TYPE,
            client_assertion: &client_assertion,
        })
        .await
    }

    /// Fetches the authorisation codes granted to `client_id` from the app confirmation endpoint.
    ///
    /// This endpoint is meant to be opened by a user in a browser (see
    /// [`authorisation_url`](OAuthApi::authorisation_url)). This call decodes its
    /// answer as a JSON list of authorisation codes, which has not been verified
    /// against the provider's actual behaviour.
    #[tracing::instrument(name = "Get Authorisation Code", skip(self))]
    pub async fn get_authorisation_code(
        &self,
        client_id: &str,
        redirect_uri: &str,
    ) -> Result<Vec<AuthorisationCode>, Error> {
        let res = self
            .inner
            .client
            .get(self.inner.environment.business_endpoint(APP_CONFIRM_PATH)?)
            .query(&[("client_id", client_id), ("redirect_uri", redirect_uri)])
            .send()
            .await?;

        decode_json(res).await
    }

    /// Builds the link a user must be redirected to in order to grant this application
    /// access to their business account.
    ///
    /// After consent the user is sent back to `redirect_uri` with a `code` query parameter,
    /// to be passed to [`exchange_authorisation_code`](OAuthApi::exchange_authorisation_code).
    pub fn authorisation_url(&self, redirect_uri: &str) -> Result<Url, Error> {
        let mut url = self.inner.environment.business_endpoint(APP_CONFIRM_PATH)?;

        url.query_pairs_mut()
            .append_pair("client_id", self.authenticator.client_id())
            .append_pair("redirect_uri", redirect_uri);

        Ok(url)
    }

    async fn request_token(&self, req: &TokenRequest<'_>) -> Result<OAuthResponse, Error> {
        let res = self
            .inner
            .client
            .post(self.inner.environment.api_endpoint(AUTH_TOKEN_PATH)?)
            .form(req)
            .send()
            .await?;

        let token: OAuthResponse = decode_json(res).await?;

        tracing::debug!(expires_in = token.expires_in, "Got new access token");

        Ok(token)
    }
}

/// Form body of a token request.
#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
    client_id: &'a str,
    client_assertion_type: &'static str,
    client_assertion: &'a str,
}
