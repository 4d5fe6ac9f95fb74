use crate::{apis::auth::Credentials, common::CLIENT_ASSERTION_AUDIENCE, error::Error};
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use std::fmt::{Debug, Formatter};

/// Signer of the client assertions sent to the token endpoint in place of a client secret.
///
/// The RSA key is parsed once, when the client is built, so that a malformed key is
/// reported before any request is attempted.
pub(crate) struct Authenticator {
    client_id: String,
    issuer: String,
    encoding_key: EncodingKey,
}

impl Authenticator {
    pub fn new(credentials: &Credentials) -> Result<Self, Error> {
        let encoding_key =
            EncodingKey::from_rsa_pem(credentials.private_key.expose_secret().as_bytes())?;

        Ok(Self {
            client_id: credentials.client_id.clone(),
            issuer: credentials.issuer.clone(),
            encoding_key,
        })
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Builds a freshly signed RS256 JWT with the `iss`, `aud` and `sub` claims.
    ///
    /// No `exp` or `iat` claim is set: the assertion is consumed by a single token request.
    #[tracing::instrument(name = "Generate Client Assertion", level = "debug", skip(self))]
    pub fn client_assertion(&self) -> Result<String, Error> {
        let claims = ClientAssertionClaims {
            iss: &self.issuer,
            aud: CLIENT_ASSERTION_AUDIENCE,
            sub: &self.client_id,
        };

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &self.encoding_key,
        )?)
    }
}

impl Debug for Authenticator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("client_id", &self.client_id)
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct ClientAssertionClaims<'a> {
    iss: &'a str,
    aud: &'a str,
    sub: &'a str,
}
