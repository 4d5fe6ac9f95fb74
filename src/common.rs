// Default URLs
pub static DEFAULT_API_URL: &str = "https://b2b.revolut.com";
pub static DEFAULT_BUSINESS_URL: &str = "https://business.revolut.com";
pub static DEFAULT_SANDBOX_API_URL: &str = "https://sandbox-b2b.revolut.com";
pub static DEFAULT_SANDBOX_BUSINESS_URL: &str = "https://sandbox-business.revolut.com";

// API paths
pub static AUTH_TOKEN_PATH: &str = "/api/1.0/auth/token";
pub static APP_CONFIRM_PATH: &str = "/app-confirm";
pub static RATE_PATH: &str = "/api/1.0/rate";
pub static EXCHANGE_PATH: &str = "/api/1.0/exchange";

// OAuth client assertion
pub static CLIENT_ASSERTION_AUDIENCE: &str = "https://revolut.com";
pub static CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

// Grant types
pub static GRANT_TYPE_AUTHORIZATION_CODE: &str = "authorization_code";
pub static GRANT_TYPE_REFRESH_TOKEN: &str = "refresh_token";

/// Maximum length accepted by the server for an exchange `request_id`.
pub const MAX_REQUEST_ID_LEN: usize = 40;
