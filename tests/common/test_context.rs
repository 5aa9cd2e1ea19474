use crate::common::mock_server::{PoyntMockServer, MOCK_BUSINESS_ID};
use openssl::rsa::Rsa;
use poynt_rust::PoyntClient;

pub static MOCK_APPLICATION_ID: &str = "urn:aid:08e1b2a8-e6f2-4c3c-bd21-7f5b3d5e2c11";

pub struct TestContext {
    pub client: PoyntClient,
    pub business_id: String,
    pub mock_server: PoyntMockServer,
    private_key_pem: String,
}

impl TestContext {
    pub async fn start() -> Self {
        let rsa = Rsa::generate(2048).unwrap();
        let private_key_pem = String::from_utf8(rsa.private_key_to_pem().unwrap()).unwrap();
        let mock_server =
            PoyntMockServer::start(MOCK_APPLICATION_ID, rsa.public_key_to_pem().unwrap()).await;

        let client = PoyntClient::builder(MOCK_APPLICATION_ID, &private_key_pem)
            .with_base_url(&mock_server.url())
            .build();

        Self {
            client,
            business_id: MOCK_BUSINESS_ID.to_string(),
            mock_server,
            private_key_pem,
        }
    }

    /// A client pointing at the same mock server but signing with another key.
    pub fn client_with_unknown_key(&self) -> PoyntClient {
        let rsa = Rsa::generate(2048).unwrap();
        let other_key_pem = String::from_utf8(rsa.private_key_to_pem().unwrap()).unwrap();
        assert_ne!(other_key_pem, self.private_key_pem);

        PoyntClient::builder(MOCK_APPLICATION_ID, &other_key_pem)
            .with_base_url(&self.mock_server.url())
            .build()
    }
}
