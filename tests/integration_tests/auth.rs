use crate::common::test_context::TestContext;
use futures::future::try_join_all;

#[tokio::test]
async fn access_token_is_issued_for_signed_assertion() {
    let ctx = TestContext::start().await;

    let token = ctx.client.auth.get_access_token().await.unwrap();

    assert!(!token.expose_secret().is_empty());
    assert!(token.expires_at().is_some());
    assert_eq!(ctx.mock_server.issued_tokens(), 1);
}

#[tokio::test]
async fn access_token_is_cached_across_requests() {
    let ctx = TestContext::start().await;

    ctx.client.businesses.get_business(&ctx.business_id).await.unwrap();
    ctx.client.businesses.get_business(&ctx.business_id).await.unwrap();
    let token1 = ctx.client.auth.get_access_token().await.unwrap();
    let token2 = ctx.client.auth.refresh_access_token().await.unwrap();

    assert_ne!(token1.expose_secret(), token2.expose_secret());
    assert_eq!(ctx.mock_server.issued_tokens(), 2);
}

#[tokio::test]
async fn concurrent_requests_share_the_cached_token() {
    let ctx = TestContext::start().await;
    ctx.client.auth.get_access_token().await.unwrap();

    let businesses = try_join_all(
        (0..5).map(|_| ctx.client.businesses.get_business(&ctx.business_id)),
    )
    .await
    .unwrap();

    assert_eq!(businesses.len(), 5);
    assert_eq!(ctx.mock_server.issued_tokens(), 1);
}

#[tokio::test]
async fn assertion_signed_with_unknown_key_is_rejected() {
    let ctx = TestContext::start().await;
    let client = ctx.client_with_unknown_key();

    let err = client
        .businesses
        .get_business(&ctx.business_id)
        .await
        .expect_err("Call succeeded");

    let api_error = err.as_api_error().unwrap();
    assert_eq!(api_error.status_code, 401);
    assert_eq!(api_error.code.as_deref(), Some("INVALID_ASSERTION"));
    assert_eq!(ctx.mock_server.issued_tokens(), 0);
}
