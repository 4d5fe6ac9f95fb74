mod routes;

use actix_web::{web, App, HttpServer};
use reqwest::Url;
use revolut_business::apis::exchange::ExchangeResponse;
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tokio::sync::oneshot;
use uuid::Uuid;

#[derive(Clone)]
struct MockServerConfiguration {
    client_id: String,
    issuer: String,
    public_key_pem: Vec<u8>,
    authorisation_code: String,
    access_token: String,
    refresh_token: String,
    /// Business accounts, keyed by currency.
    accounts: HashMap<String, String>,
    /// Units of the second currency bought with one unit of the first one.
    rates: HashMap<(String, String), f64>,
}

#[derive(Clone, Default)]
struct MockServerStorageInner {
    /// Executed exchanges, keyed by request id.
    exchanges: HashMap<String, ExchangeResponse>,
}

/// In-memory storage for exchanges executed on the mock server.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Simple mock server for the Revolut Business APIs used in local integration tests.
pub struct RevolutMockServer {
    url: Url,
    shutdown: Option<oneshot::Sender<()>>,
    configuration: MockServerConfiguration,
    storage: MockServerStorage,
}

impl RevolutMockServer {
    pub async fn start(client_id: &str, issuer: &str, public_key_pem: Vec<u8>) -> Self {
        // Prepare the mock server configuration
        let configuration = MockServerConfiguration {
            client_id: client_id.to_string(),
            issuer: issuer.to_string(),
            public_key_pem,
            authorisation_code: Uuid::new_v4().to_string(),
            access_token: Uuid::new_v4().to_string(),
            refresh_token: Uuid::new_v4().to_string(),
            accounts: [
                ("GBP".to_string(), Uuid::new_v4().to_string()),
                ("EUR".to_string(), Uuid::new_v4().to_string()),
                ("USD".to_string(), Uuid::new_v4().to_string()),
            ]
            .into_iter()
            .collect(),
            rates: [
                (("GBP".to_string(), "EUR".to_string()), 1.15),
                (("EUR".to_string(), "GBP".to_string()), 0.87),
                (("USD".to_string(), "GBP".to_string()), 0.79),
            ]
            .into_iter()
            .collect(),
        };
        let configuration_clone = configuration.clone();

        // Setup the in-memory storage
        let storage = MockServerStorage::default();
        let storage_clone = storage.clone();

        // Setup the mock HTTP server and bind it to a random port
        let http_server_factory = HttpServer::new(move || {
            App::new()
                .app_data(web::Data::new(configuration.clone()))
                .app_data(web::Data::new(storage.clone()))
                .service(
                    web::resource("/api/1.0/auth/token").route(web::post().to(routes::post_token)),
                )
                .service(web::resource("/api/1.0/rate").route(web::get().to(routes::get_rate)))
                .service(
                    web::resource("/api/1.0/exchange").route(web::post().to(routes::post_exchange)),
                )
                .service(web::resource("/app-confirm").route(web::get().to(routes::app_confirm)))
        })
        .workers(1)
        .bind("127.0.0.1:0")
        .unwrap();

        // Retrieve the address and port the server was bound to
        let addr = http_server_factory.addrs().first().cloned().unwrap();

        // Prepare a oneshot channel to kill the HTTP server when this struct is dropped
        let (shutdown_sender, shutdown_recv) = oneshot::channel();

        // Start the server in another task
        let http_server = http_server_factory.run();
        tokio::spawn(async move {
            tokio::select! {
                _ = http_server => panic!("HTTP server crashed"),
                _ = shutdown_recv => { /* Intentional shutdown */ }
            }
        });

        Self {
            url: Url::parse(&format!("http://{}", addr)).unwrap(),
            shutdown: Some(shutdown_sender),
            configuration: configuration_clone,
            storage: storage_clone,
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn authorisation_code(&self) -> &str {
        &self.configuration.authorisation_code
    }

    pub fn account_id(&self, currency: &str) -> Option<&str> {
        self.configuration.accounts.get(currency).map(String::as_str)
    }

    pub fn executed_exchanges(&self) -> usize {
        self.storage.read().unwrap().exchanges.len()
    }
}

impl Drop for RevolutMockServer {
    fn drop(&mut self) {
        // Send a shutdown signal to the actix server on drop
        let _ = self.shutdown.take().unwrap().send(());
    }
}
