//! Authentication service - registration, login and token verification.
//!
//! Uses the domain Password value object for hashing.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::directory::CustomerDirectory;
use common::{AppError, AppResult, JwtConfig};
use domain::{
    Customer, CustomerRole, NewCustomer, Password, ROLE_ADMIN, SECONDS_PER_HOUR,
    TOKEN_TYPE_BEARER,
};

/// Verification target for unknown emails, so a miss costs the same as a hit.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$2wWZXbNJ4r7yQ/Ng2JgYbJQ3mFtG4xRr3Wm3bBqfJ0k";

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn customer_id(&self) -> Uuid {
        self.sub
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn customer_role(&self) -> CustomerRole {
        CustomerRole::from(self.role.as_str())
    }
}

/// Token response returned after successful login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    pub access_token: String,
    /// Token type (always "Bearer")
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
    pub customer_id: Uuid,
    /// `customer` or `admin`
    pub role: String,
}

/// Sign-up form, password in plain text.
#[derive(Debug, Clone)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new customer account
    async fn register(&self, registration: Registration) -> AppResult<Customer>;

    /// Check credentials and issue a token
    async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse>;

    /// Verify a token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// [`AuthService`] over a [`CustomerDirectory`].
pub struct Authenticator {
    directory: Arc<dyn CustomerDirectory>,
    jwt: JwtConfig,
}

impl Authenticator {
    pub fn new(directory: Arc<dyn CustomerDirectory>, jwt: JwtConfig) -> Self {
        Self { directory, jwt }
    }

    fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt.secret.as_bytes()
    }

    /// Generate a JWT for a customer
    fn generate_token(&self, customer: &Customer) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.jwt.expiration_hours);

        let claims = Claims {
            sub: customer.id,
            email: customer.email.clone(),
            role: customer.role.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: self.jwt.expiration_hours * SECONDS_PER_HOUR,
            customer_id: customer.id,
            role: claims.role,
        })
    }
}

/// Emails are matched case-insensitively.
fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, registration: Registration) -> AppResult<Customer> {
        let email = normalize_email(&registration.email);
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("A valid email is required"));
        }

        // Deactivated accounts still own their email
        if self
            .directory
            .find_by_email_with_deactivated(&email)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request("User already exists"));
        }

        let password = Password::new(&registration.password)?;

        let customer = self
            .directory
            .create(NewCustomer {
                first_name: registration.first_name.trim().to_string(),
                last_name: registration.last_name.trim().to_string(),
                email,
                phone: registration.phone.trim().to_string(),
                password,
            })
            .await?;

        info!(customer_id = %customer.id, "Customer registered");
        Ok(customer)
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<TokenResponse> {
        let customer = self.directory.find_by_email(&normalize_email(email)).await?;

        let stored = match &customer {
            Some(customer) => Password::from_hash(customer.password_hash.as_str()),
            None => Password::from_hash(DUMMY_HASH),
        };
        let password_valid = stored.verify(password);

        match customer {
            Some(customer) if password_valid => self.generate_token(&customer),
            _ => {
                warn!("Failed login attempt");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
