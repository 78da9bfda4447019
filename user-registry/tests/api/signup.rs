use crate::helpers::{get_random_email, signup_body, TestContext};
use user_registry::domain::{FormField, SignupRequestBody, SignupResponse};
use user_registry::errors::SignupError;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn should_register_valid_form(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let response = app.signup_with_email(&get_random_email()).await;

    let expected_response = SignupResponse {
        message: "User registered successfully (1/5)".to_owned(),
        registered: 1,
        capacity: 5,
    };
    assert_eq!(response, Ok(expected_response));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_blank_name(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let body = SignupRequestBody {
        name: "  ".to_string(),
        ..signup_body(&get_random_email())
    };

    let err = app.signup(body).await.unwrap_err();
    assert_eq!(err, SignupError::NameRequired);
    assert_eq!(err.field(), Some(FormField::Name));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_malformed_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    let err = app.signup_with_email("not-an-email").await.unwrap_err();
    assert_eq!(err, SignupError::InvalidEmail);
    assert_eq!(err.to_string(), "Invalid email format");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_short_password(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let body = SignupRequestBody {
        password: "12345".to_string(),
        confirm_password: "12345".to_string(),
        ..signup_body(&get_random_email())
    };

    let err = app.signup(body).await.unwrap_err();
    assert_eq!(err, SignupError::PasswordTooShort(6));
    assert_eq!(err.field(), Some(FormField::Password));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_mismatched_confirmation(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let body = SignupRequestBody {
        confirm_password: "secret124".to_string(),
        ..signup_body(&get_random_email())
    };

    assert_eq!(app.signup(body).await, Err(SignupError::PasswordMismatch));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_unaccepted_terms(ctx: &mut TestContext) {
    let app = &ctx.test_app;
    let body = SignupRequestBody {
        accept_terms: false,
        ..signup_body(&get_random_email())
    };

    assert_eq!(app.signup(body).await, Err(SignupError::TermsNotAccepted));
    assert_eq!(app.registrants().await.count, 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_reject_email_differing_only_in_case(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    assert!(app.signup_with_email("a@a.com").await.is_ok());
    let err = app.signup_with_email("A@A.com").await.unwrap_err();

    assert_eq!(err, SignupError::UserAlreadyExists("A@A.com".to_string()));
    assert_eq!(err.field(), Some(FormField::Email));
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_report_capacity_before_duplicate(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    for idx in 0..5 {
        let response = app
            .signup_with_email(&format!("user{}@example.com", idx))
            .await
            .expect("registration under capacity should succeed");
        assert_eq!(response.registered, idx + 1);
    }

    let err = app.signup_with_email("user0@example.com").await.unwrap_err();
    assert_eq!(err, SignupError::CapacityExceeded(5));
    assert_eq!(err.field(), None);
    assert_eq!(err.to_string(), "Maximum capacity reached (5 users)");
}

#[test_context(TestContext)]
#[tokio::test]
async fn should_store_trimmed_email(ctx: &mut TestContext) {
    let app = &ctx.test_app;

    app.signup_with_email("  padded@example.com ").await.unwrap();

    let registrants = app.registrants().await;
    assert_eq!(registrants.registrants[0].email, "padded@example.com");
}

#[test]
fn signup_body_accepts_camel_case_aliases() {
    let body: SignupRequestBody = serde_json::from_str(
        r#"{
            "name": "Ana",
            "email": "ana@example.com",
            "password": "secret123",
            "confirmPassword": "secret123",
            "acceptTerms": true
        }"#,
    )
    .unwrap();

    assert_eq!(body.confirm_password, "secret123");
    assert!(body.accept_terms);
    assert_eq!(body.preference, user_registry::domain::Preference::High);
    assert_eq!(body.gender, user_registry::domain::Gender::PreferNotToSay);
}
