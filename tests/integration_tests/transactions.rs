use crate::common::test_context::TestContext;
use poynt_rust::{apis::transactions::RefundRequestBuilder, Error};
use serde_json::json;
use test_case::test_case;

fn sale(action: &str, amount: u64) -> serde_json::Value {
    json!({
        "action": action,
        "amounts": {
            "transactionAmount": amount,
            "orderAmount": amount,
            "currency": "EUR"
        },
        "fundingSource": { "type": "CREDIT_DEBIT" }
    })
}

#[test_case("SALE", "CAPTURED" ; "sale")]
#[test_case("AUTHORIZE", "AUTHORIZED" ; "authorization")]
#[tokio::test]
async fn create_transaction(action: &str, expected_status: &str) {
    let ctx = TestContext::start().await;

    let created = ctx
        .client
        .transactions
        .create_transaction(&ctx.business_id, &sale(action, 1000), None)
        .await
        .unwrap();
    let fetched = ctx
        .client
        .transactions
        .get_transaction(&ctx.business_id, created["id"].as_str().unwrap())
        .await
        .unwrap();

    assert_eq!(created["status"], expected_status);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn declined_transaction_is_rejected() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .transactions
        .create_transaction(&ctx.business_id, &sale("SALE", 0), None)
        .await
        .expect_err("Call succeeded");

    match err {
        Error::Rejected { message, resource } => {
            assert_eq!(message, "Authorization failed");
            assert_eq!(resource["status"], "DECLINED");
        }
        e => panic!("Unexpected error: {:?}", e),
    }
}

#[tokio::test]
async fn authorized_transaction_is_voided() {
    let ctx = TestContext::start().await;
    let authorized = ctx
        .client
        .transactions
        .create_transaction(&ctx.business_id, &sale("AUTHORIZE", 500), None)
        .await
        .unwrap();

    let voided = ctx
        .client
        .transactions
        .void_transaction(&ctx.business_id, authorized["id"].as_str().unwrap(), None)
        .await
        .unwrap();

    assert_eq!(voided["status"], "VOIDED");
}

#[tokio::test]
async fn captured_transaction_cannot_be_voided() {
    let ctx = TestContext::start().await;
    let id = ctx.mock_server.insert_captured_transaction(500, "USD");

    let err = ctx
        .client
        .transactions
        .void_transaction(&ctx.business_id, &id, None)
        .await
        .expect_err("Call succeeded");

    assert!(matches!(err, Error::Rejected { ref message, .. } if message == "Void failed"));
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn full_refund() {
    let ctx = TestContext::start().await;
    let id = ctx.mock_server.insert_captured_transaction(1250, "GBP");

    let refund = ctx
        .client
        .transactions
        .refund_transaction(&ctx.business_id, &id, &RefundRequestBuilder::default().build().unwrap())
        .await
        .unwrap();

    assert_eq!(refund["status"], "REFUNDED");
    assert_eq!(refund["parentId"], id.as_str());
    assert_eq!(refund["amounts"]["transactionAmount"], 1250);
}

#[tokio::test]
async fn partial_refund_uses_the_currency_of_the_original_transaction() {
    let ctx = TestContext::start().await;
    let id = ctx.mock_server.insert_captured_transaction(1250, "GBP");

    let refund = ctx
        .client
        .transactions
        .refund_transaction(
            &ctx.business_id,
            &id,
            &RefundRequestBuilder::default().amount(250u64).build().unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(refund["amounts"]["transactionAmount"], 250);
    assert_eq!(refund["amounts"]["currency"], "GBP");
}

#[tokio::test]
async fn refund_of_a_refund_is_rejected() {
    let ctx = TestContext::start().await;
    let id = ctx.mock_server.insert_captured_transaction(1250, "USD");
    let refund = ctx
        .client
        .transactions
        .refund_transaction(&ctx.business_id, &id, &Default::default())
        .await
        .unwrap();

    let err = ctx
        .client
        .transactions
        .refund_transaction(
            &ctx.business_id,
            refund["id"].as_str().unwrap(),
            &Default::default(),
        )
        .await
        .expect_err("Call succeeded");

    assert!(matches!(err, Error::Rejected { ref message, .. } if message == "Refund failed"));
}

#[tokio::test]
async fn missing_transaction_is_not_found() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .transactions
        .get_transaction(&ctx.business_id, "6d0a5a3e-2a63-4a8e-9b2f-0f3e0f1c4b5a")
        .await
        .expect_err("Call succeeded");

    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.status_code, 404);
    assert_eq!(api_error.message, "Transaction not found");
    assert_eq!(api_error.code.as_deref(), Some("RESOURCE_NOT_FOUND"));
}
