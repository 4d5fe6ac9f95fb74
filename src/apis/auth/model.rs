use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

/// Long-lived credentials of a Revolut Business API application.
///
/// The private key must be the PEM encoded RSA key whose public half has been uploaded
/// to the Business API settings page. It is used to sign the client assertion sent
/// to the token endpoint.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub(crate) client_id: String,
    pub(crate) issuer: String,
    pub(crate) private_key: Token,
}

impl Credentials {
    /// Creates a new set of credentials.
    ///
    /// `issuer` is the domain of the redirect URI configured for the application,
    /// without the scheme (e.g. `example.com`).
    pub fn new(
        client_id: impl Into<String>,
        issuer: impl Into<String>,
        private_key_pem: impl Into<Token>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            issuer: issuer.into(),
            private_key: private_key_pem.into(),
        }
    }

    /// Returns a reference to the client id stored in these [`Credentials`](crate::apis::auth::Credentials).
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns a reference to the issuer stored in these [`Credentials`](crate::apis::auth::Credentials).
    pub fn issuer(&self) -> &str {
        &self.issuer
    }
}

/// Successful response of the token endpoint.
///
/// No expiry tracking is done by the client: callers decide when to refresh.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OAuthResponse {
    /// The access token.
    pub access_token: Token,
    /// `bearer` means that this token is valid to access the API.
    pub token_type: String,
    /// Token expiration time, in seconds.
    pub expires_in: i64,
    /// Token to be used to request a new access token.
    ///
    /// Only returned when exchanging an authorisation code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<Token>,
}

/// Authorisation code granted by a user for one of their business accounts.
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct AuthorisationCode {
    /// The account ID.
    pub id: String,
    /// The user authorisation code, if granted.
    pub code: String,
}

/// Wrapper for a secret string that makes it harder to accidentally expose secrets
/// and ensures the backing memory is wiped on drop.
///
/// It is a wrapper around a [`secrecy::Secret`](secrecy::Secret).
///
/// ```rust
/// # use revolut_business::apis::auth::Token;
/// let token = Token::new("supersecret");
///
/// // The secret is redacted when printed with Debug
/// assert!(!format!("{:?}", token).contains("supersecret"));
///
/// // But can be manually exposed calling `expose_secret()`...
/// assert_eq!(token.expose_secret(), "supersecret");
///
/// // ... Or if serialized with Serde
/// let serialized = serde_json::to_string(&token).unwrap();
/// assert!(serialized.contains("supersecret"));
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_secret")] Secret<String>);

impl Token {
    /// Wraps a secret string in a new `Token`.
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// Exposes a reference to the underlying secret string.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

fn serialize_secret<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
