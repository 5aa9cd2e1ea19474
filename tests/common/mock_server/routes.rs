use crate::common::mock_server::{MockServerConfiguration, MockServerStorage, MOCK_BUSINESS_ID};
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde_json::{json, Value};
use std::collections::HashMap;
use uuid::Uuid;
use wiremock::{Request, Respond, ResponseTemplate};

static JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
static DEFAULT_PAGE_SIZE: usize = 10;

fn error(status: u16, code: &str, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "code": code,
        "httpStatus": status,
        "message": message,
        "developerMessage": format!("{} ({})", message, code)
    }))
}

fn transaction_not_found() -> ResponseTemplate {
    error(404, "RESOURCE_NOT_FOUND", "Transaction not found")
}

fn parse_form(body: &[u8]) -> HashMap<String, String> {
    String::from_utf8_lossy(body)
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .map(|(k, v)| {
            (
                urlencoding::decode(k).unwrap().into_owned(),
                urlencoding::decode(v).unwrap().into_owned(),
            )
        })
        .collect()
}

/// Path segment `n` positions from the end.
fn segment_from_end(request: &Request, n: usize) -> String {
    let segments = request.url.path().split('/').collect::<Vec<_>>();
    segments[segments.len() - 1 - n].to_string()
}

/// POST /token
pub(super) struct Token {
    pub(super) configuration: MockServerConfiguration,
    pub(super) storage: MockServerStorage,
}

impl Respond for Token {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let form = parse_form(&request.body);
        if form.get("grantType").map(String::as_str) != Some(JWT_BEARER_GRANT_TYPE) {
            return error(400, "INVALID_GRANT_TYPE", "Unsupported grant type");
        }
        let assertion = match form.get("assertion") {
            Some(assertion) => assertion,
            None => return error(400, "MISSING_ASSERTION", "Missing assertion"),
        };

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[&self.configuration.url]);
        validation.set_issuer(&[&self.configuration.application_id]);
        let key = DecodingKey::from_rsa_pem(&self.configuration.public_key_pem).unwrap();
        let claims = match jsonwebtoken::decode::<Value>(assertion, &key, &validation) {
            Ok(data) => data.claims,
            Err(_) => return error(401, "INVALID_ASSERTION", "Invalid assertion"),
        };

        self.storage.write().unwrap().issued_tokens += 1;

        let access_token = jsonwebtoken::encode(
            &Header::default(),
            &json!({
                "sub": claims["sub"],
                "iat": Utc::now().timestamp(),
                "exp": Utc::now().timestamp() + 3600,
                "jti": Uuid::new_v4().to_string()
            }),
            &EncodingKey::from_secret(b"mock-server-secret"),
        )
        .unwrap();

        ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": access_token,
            "expiresIn": 3600,
            "tokenType": "BEARER",
            "scope": "ALL"
        }))
    }
}

/// GET /businesses/{businessId}
pub(super) fn business() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "id": MOCK_BUSINESS_ID,
        "legalName": "Mock Coffee LLC",
        "doingBusinessAs": "Mock Coffee",
        "status": "ACTIVATED",
        "stores": [{ "id": "c394627f-4f68-47fb-90a5-684ea801a352", "displayName": "Main St" }]
    }))
}

/// GET /businesses/{businessId}/transactions
///
/// Paginated with `startOffset` and `limit`, linking to the next page while more
/// transactions remain.
pub(super) struct ListTransactions {
    pub(super) configuration: MockServerConfiguration,
    pub(super) storage: MockServerStorage,
}

impl Respond for ListTransactions {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let query = request.url.query_pairs().into_owned().collect::<HashMap<_, _>>();
        let start_offset = query
            .get("startOffset")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0usize);
        let limit = query
            .get("limit")
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let storage = self.storage.read().unwrap();
        let page = storage
            .transactions
            .iter()
            .skip(start_offset)
            .take(limit)
            .cloned()
            .collect::<Vec<_>>();

        let mut links = Vec::new();
        if start_offset + limit < storage.transactions.len() {
            links.push(json!({
                "rel": "next",
                "method": "GET",
                "href": format!(
                    "{}{}?startOffset={}&limit={}",
                    self.configuration.url,
                    request.url.path(),
                    start_offset + limit,
                    limit
                )
            }));
        }

        ResponseTemplate::new(200).set_body_json(json!({
            "transactions": page,
            "links": links
        }))
    }
}

/// POST /businesses/{businessId}/transactions
///
/// `SALE`s are captured and `AUTHORIZE`s authorized, unless their amount is zero.
/// `REFUND`s are only accepted for captured parents and up to their amount.
pub(super) struct CreateTransaction {
    pub(super) storage: MockServerStorage,
}

impl Respond for CreateTransaction {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body: Value = match serde_json::from_slice(&request.body) {
            Ok(body) => body,
            Err(_) => return error(400, "INVALID_REQUEST", "Malformed transaction"),
        };
        let mut storage = self.storage.write().unwrap();

        let mut transaction = match body["action"].as_str() {
            Some("REFUND") => {
                let parent_id = body["parentId"].as_str().unwrap_or_default();
                let parent = match storage.transaction(parent_id) {
                    Some(parent) => parent.clone(),
                    None => return transaction_not_found(),
                };
                let amount = body["amounts"]["transactionAmount"]
                    .as_u64()
                    .or_else(|| parent["amounts"]["transactionAmount"].as_u64())
                    .unwrap_or_default();
                let refundable = parent["status"] == "CAPTURED"
                    && amount <= parent["amounts"]["transactionAmount"].as_u64().unwrap_or(0);
                json!({
                    "action": "REFUND",
                    "parentId": parent_id,
                    "status": if refundable { "REFUNDED" } else { "DECLINED" },
                    "amounts": {
                        "transactionAmount": amount,
                        "orderAmount": amount,
                        "currency": body["amounts"]["currency"]
                            .as_str()
                            .unwrap_or_else(|| parent["amounts"]["currency"].as_str().unwrap_or("USD"))
                    }
                })
            }
            Some(action @ ("SALE" | "AUTHORIZE")) => {
                let amount = body["amounts"]["transactionAmount"].as_u64().unwrap_or(0);
                let status = match (action, amount) {
                    (_, 0) => "DECLINED",
                    ("SALE", _) => "CAPTURED",
                    _ => "AUTHORIZED",
                };
                let mut transaction = body.clone();
                transaction["status"] = json!(status);
                transaction
            }
            _ => return error(400, "INVALID_REQUEST", "Unsupported action"),
        };

        transaction["id"] = json!(Uuid::new_v4().to_string());
        transaction["createdAt"] = json!(Utc::now());
        storage.transactions.push(transaction.clone());

        ResponseTemplate::new(201).set_body_json(transaction)
    }
}

/// GET /businesses/{businessId}/transactions/{transactionId}
pub(super) struct GetTransaction {
    pub(super) storage: MockServerStorage,
}

impl Respond for GetTransaction {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = segment_from_end(request, 0);
        match self.storage.read().unwrap().transaction(&id) {
            Some(transaction) => ResponseTemplate::new(200).set_body_json(transaction),
            None => transaction_not_found(),
        }
    }
}

/// POST /businesses/{businessId}/transactions/{transactionId}/void
///
/// Only authorized transactions can be voided, any other one is returned as it is.
pub(super) struct VoidTransaction {
    pub(super) storage: MockServerStorage,
}

impl Respond for VoidTransaction {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id = segment_from_end(request, 1);
        let mut storage = self.storage.write().unwrap();
        match storage.transaction_mut(&id) {
            Some(transaction) => {
                if transaction["status"] == "AUTHORIZED" {
                    transaction["status"] = json!("VOIDED");
                }
                ResponseTemplate::new(200).set_body_json(transaction.clone())
            }
            None => transaction_not_found(),
        }
    }
}
