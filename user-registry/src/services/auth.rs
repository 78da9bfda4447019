use log::{info, warn};

use crate::app_state::AppState;
use crate::domain::{
    Email, LoginRequestBody, LoginResponse, Password, RecoveryRequestBody, RecoveryResponse,
    Registrant, RegistrantsResponse, SignupRequestBody, SignupResponse, User, UserStoreError,
};
use crate::errors::{LoginError, RecoveryError, SignupError};
use crate::utils::{MIN_NAME_LENGTH, MIN_PASSWORD_LENGTH};
use crate::validation::{
    is_non_blank, is_valid_email_shape, name_meets_min_length, password_meets_min_length,
    passwords_match, terms_accepted,
};

/// Form flows on top of the user store: validate input, call the store,
/// turn the outcome into a message.
pub struct AuthService {}

impl AuthService {
    pub async fn signup(
        state: AppState,
        request: SignupRequestBody,
    ) -> Result<SignupResponse, SignupError> {
        let user = Self::candidate(request)?;
        let email = user.email().as_ref().to_string();

        // Held across the whole check-then-insert.
        let mut store = state.user_store.write().await;
        store.register(user).map_err(|e| match e {
            UserStoreError::CapacityExceeded { capacity } => SignupError::CapacityExceeded(capacity),
            UserStoreError::DuplicateEmail(_) => SignupError::UserAlreadyExists(email),
        })?;

        let registered = store.count();
        let capacity = store.capacity();
        Ok(SignupResponse {
            message: format!(
                "User registered successfully ({}/{})",
                registered, capacity
            ),
            registered,
            capacity,
        })
    }

    pub async fn login(
        state: AppState,
        request: LoginRequestBody,
    ) -> Result<LoginResponse, LoginError> {
        let email = request.email.trim();
        if !is_non_blank(email) {
            return Err(LoginError::EmailRequired);
        }
        if !is_valid_email_shape(email) {
            return Err(LoginError::InvalidEmail);
        }
        if !is_non_blank(&request.password) {
            return Err(LoginError::PasswordRequired);
        }
        if !password_meets_min_length(&request.password) {
            return Err(LoginError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }

        let store = state.user_store.read().await;
        if !store.authenticate(email, &request.password) {
            warn!("failed login for {}", email);
            return Err(LoginError::InvalidCredentials);
        }
        let name = store
            .find_by_email(email)
            .map(|user| user.name().to_string())
            .unwrap_or_default();

        info!("{} signed in", email);
        Ok(LoginResponse {
            message: format!("Welcome {}! Signed in successfully", name),
            name,
        })
    }

    pub async fn request_password_recovery(
        state: AppState,
        request: RecoveryRequestBody,
    ) -> Result<RecoveryResponse, RecoveryError> {
        let email = request.email.trim();
        if !is_non_blank(email) {
            return Err(RecoveryError::EmailRequired);
        }
        if !is_valid_email_shape(email) {
            return Err(RecoveryError::InvalidEmail);
        }

        match state.user_store.read().await.find_by_email(email) {
            Some(_) => {
                info!("recovery requested for {}", email);
                Ok(RecoveryResponse {
                    message: format!("A recovery link has been sent to {}", email),
                })
            }
            None => Err(RecoveryError::AccountNotFound),
        }
    }

    pub async fn registrants(state: AppState) -> RegistrantsResponse {
        let store = state.user_store.read().await;
        RegistrantsResponse {
            registrants: store.list().iter().map(Registrant::from).collect(),
            count: store.count(),
            capacity: store.capacity(),
            has_capacity: store.has_capacity(),
        }
    }

    // Checks run in the order the registration form reports them.
    fn candidate(request: SignupRequestBody) -> Result<User, SignupError> {
        if !is_non_blank(&request.name) {
            return Err(SignupError::NameRequired);
        }
        if !name_meets_min_length(&request.name) {
            return Err(SignupError::NameTooShort(MIN_NAME_LENGTH));
        }
        let email = request.email.trim();
        if !is_valid_email_shape(email) {
            return Err(SignupError::InvalidEmail);
        }
        if !password_meets_min_length(&request.password) {
            return Err(SignupError::PasswordTooShort(MIN_PASSWORD_LENGTH));
        }
        if !passwords_match(&request.password, &request.confirm_password) {
            return Err(SignupError::PasswordMismatch);
        }
        if !terms_accepted(request.accept_terms) {
            return Err(SignupError::TermsNotAccepted);
        }

        let email = Email::parse(email.to_string())?;
        let password = Password::parse(request.password)?;
        Ok(User::new(
            request.name.trim().to_string(),
            email,
            password,
            request.preference,
            request.accept_terms,
            request.gender,
        )?)
    }
}
