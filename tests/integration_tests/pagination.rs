use crate::common::test_context::TestContext;
use poynt_rust::{apis::transactions::TransactionsQueryBuilder, PageOptions, RequestSpec};
use serde_json::Value;

#[tokio::test]
async fn single_page_links_to_the_next_one() {
    let ctx = TestContext::start().await;
    for amount in 1..=3 {
        ctx.mock_server.insert_captured_transaction(amount * 100, "USD");
    }

    let page = ctx
        .client
        .transactions
        .get_transactions(
            &ctx.business_id,
            &TransactionsQueryBuilder::default().limit(2u32).build().unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(page["transactions"].as_array().unwrap().len(), 2);
    assert_eq!(page["links"][0]["rel"], "next");
}

#[tokio::test]
async fn every_page_is_collected() {
    let ctx = TestContext::start().await;
    let ids = (1..=5)
        .map(|amount| ctx.mock_server.insert_captured_transaction(amount * 100, "USD"))
        .collect::<Vec<_>>();

    let transactions = ctx
        .client
        .paged_request(
            RequestSpec::get(format!("/businesses/{}/transactions?limit=2", ctx.business_id)),
            &PageOptions::new("transactions"),
        )
        .await
        .unwrap();

    let collected = transactions
        .iter()
        .map(|t| t["id"].as_str().unwrap().to_string())
        .collect::<Vec<_>>();
    assert_eq!(collected, ids);
}

#[tokio::test]
async fn collected_pages_can_be_sorted() {
    let ctx = TestContext::start().await;
    for amount in [300, 100, 200] {
        ctx.mock_server.insert_captured_transaction(amount, "USD");
    }

    let options = PageOptions::new("transactions").with_sort(|a, b| {
        let amount = |t: &Value| t["amounts"]["transactionAmount"].as_u64();
        amount(a).cmp(&amount(b))
    });
    let transactions = ctx
        .client
        .paged_request(
            RequestSpec::get(format!("/businesses/{}/transactions?limit=1", ctx.business_id)),
            &options,
        )
        .await
        .unwrap();

    let amounts = transactions
        .iter()
        .map(|t| t["amounts"]["transactionAmount"].as_u64().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(amounts, vec![100, 200, 300]);
}
