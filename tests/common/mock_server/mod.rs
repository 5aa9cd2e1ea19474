mod routes;

use chrono::Utc;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use wiremock::{
    matchers::{header_exists, method, path, path_regex},
    Mock, MockServer,
};

pub static MOCK_BUSINESS_ID: &str = "18f071cc-5ed4-4b33-80c1-305056d42bfb";

#[derive(Clone)]
struct MockServerConfiguration {
    application_id: String,
    public_key_pem: Vec<u8>,
    url: String,
}

#[derive(Default)]
struct MockServerStorageInner {
    /// Transactions by id, in creation order.
    transactions: Vec<Value>,
    issued_tokens: u32,
}

impl MockServerStorageInner {
    fn transaction(&self, id: &str) -> Option<&Value> {
        self.transactions.iter().find(|t| t["id"] == id)
    }

    fn transaction_mut(&mut self, id: &str) -> Option<&mut Value> {
        self.transactions.iter_mut().find(|t| t["id"] == id)
    }
}

/// In-memory storage for resources created on the mock server.
type MockServerStorage = Arc<RwLock<MockServerStorageInner>>;

/// Simple mock server for Poynt APIs used in local integration tests.
///
/// Access tokens are only issued for assertions signed with the registered key.
pub struct PoyntMockServer {
    server: MockServer,
    storage: MockServerStorage,
}

impl PoyntMockServer {
    pub async fn start(application_id: &str, public_key_pem: Vec<u8>) -> Self {
        let server = MockServer::start().await;
        let configuration = MockServerConfiguration {
            application_id: application_id.to_string(),
            public_key_pem,
            url: server.uri(),
        };
        let storage = MockServerStorage::default();

        Mock::given(method("POST"))
            .and(path("/token"))
            .respond_with(routes::Token {
                configuration: configuration.clone(),
                storage: storage.clone(),
            })
            .mount(&server)
            .await;

        let business_path = format!("^/businesses/{}", MOCK_BUSINESS_ID);
        Mock::given(method("GET"))
            .and(path_regex(format!("{}$", business_path)))
            .and(header_exists("Authorization"))
            .respond_with(routes::business())
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(format!("{}/transactions$", business_path)))
            .and(header_exists("Authorization"))
            .respond_with(routes::ListTransactions {
                configuration: configuration.clone(),
                storage: storage.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(format!("{}/transactions$", business_path)))
            .and(header_exists("Authorization"))
            .respond_with(routes::CreateTransaction {
                storage: storage.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path_regex(format!("{}/transactions/[^/]+$", business_path)))
            .and(header_exists("Authorization"))
            .respond_with(routes::GetTransaction {
                storage: storage.clone(),
            })
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path_regex(format!("{}/transactions/[^/]+/void$", business_path)))
            .and(header_exists("Authorization"))
            .respond_with(routes::VoidTransaction {
                storage: storage.clone(),
            })
            .mount(&server)
            .await;

        Self { server, storage }
    }

    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Number of access tokens handed out so far.
    pub fn issued_tokens(&self) -> u32 {
        self.storage.read().unwrap().issued_tokens
    }

    /// Stores a captured transaction, as if it had been processed on a terminal.
    pub fn insert_captured_transaction(&self, amount: u64, currency: &str) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.storage.write().unwrap().transactions.push(serde_json::json!({
            "id": id,
            "action": "SALE",
            "status": "CAPTURED",
            "createdAt": Utc::now(),
            "amounts": {
                "transactionAmount": amount,
                "orderAmount": amount,
                "currency": currency
            }
        }));
        id
    }
}
