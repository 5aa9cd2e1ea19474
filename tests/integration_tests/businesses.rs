use crate::common::test_context::TestContext;

#[tokio::test]
async fn get_business() {
    let ctx = TestContext::start().await;

    let business = ctx.client.businesses.get_business(&ctx.business_id).await.unwrap();

    assert_eq!(business["id"], ctx.business_id.as_str());
    assert_eq!(business["doingBusinessAs"], "Mock Coffee");
}

#[tokio::test]
async fn unknown_route_is_normalized() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .businesses
        .get_business("00000000-0000-0000-0000-000000000000")
        .await
        .expect_err("Call succeeded");

    assert_eq!(err.status_code(), 404);
}
