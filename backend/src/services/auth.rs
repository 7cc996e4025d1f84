//! Authentication service for user registration and login

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::UserRole;
use shared::validation::is_valid_password;

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    jwt_secret: String,
    token_expiry: i64,
}

/// Input for registering a new user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub role: UserRole,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub password: String,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // User ID
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// User fields returned alongside the session token
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub email: String,
}

/// Successful login result
#[derive(Debug, Serialize)]
pub struct LoginResult {
    pub token: String,
    pub user: UserSummary,
}

/// User info from database
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    role: String,
    email: String,
    password_hash: String,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt.secret.clone(),
            token_expiry: config.jwt.token_expiry,
        }
    }

    /// Register a new user account
    pub async fn register(&self, input: RegisterInput) -> AppResult<Uuid> {
        input
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !is_valid_password(&input.password) {
            return Err(AppError::Validation(
                "Password must be at least 6 characters and contain only letters or digits"
                    .to_string(),
            ));
        }

        // Check if email already registered
        let existing = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&input.email)
            .fetch_one(&self.db)
            .await?;

        if existing > 0 {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        // Hash password; the plaintext is never retained
        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (name, role, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&input.name)
        .bind(input.role.as_str())
        .bind(&input.email)
        .bind(&password_hash)
        .fetch_one(&self.db)
        .await?;

        Ok(user_id)
    }

    /// Authenticate a user with email and password
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResult> {
        // Unknown email and failed hash comparison yield the same error so
        // responses cannot be used to enumerate accounts
        let user = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, role, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.generate_token(&user)?;

        Ok(LoginResult {
            token,
            user: UserSummary {
                id: user.id,
                name: user.name,
                role: user.role,
                email: user.email,
            },
        })
    }

    /// Generate a signed, time-boxed session token
    fn generate_token(&self, user: &UserRow) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.to_string(),
            email: user.email.clone(),
            role: user.role.clone(),
            exp: (now + Duration::seconds(self.token_expiry)).timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }
}
