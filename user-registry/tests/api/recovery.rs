use crate::helpers::{get_random_email, TestContext};
use user_registry::errors::RecoveryError;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_confirm_recovery_for_registered_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    app.signup_with_email("ana@example.com").await.unwrap();

    let response = app.recover(" ANA@example.com ").await.unwrap();
    assert_eq!(
        response.message,
        "A recovery link has been sent to ANA@example.com"
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_report_unknown_account(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let err = app.recover(&get_random_email()).await.unwrap_err();
    assert_eq!(err, RecoveryError::AccountNotFound);
    assert_eq!(err.field(), None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_validate_email_first(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    assert_eq!(app.recover("").await, Err(RecoveryError::EmailRequired));
    assert_eq!(app.recover("nope").await, Err(RecoveryError::InvalidEmail));
}
