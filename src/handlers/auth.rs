use crate::models::auth::{Claims, ErrorResponse, LoginRequest, LoginResponse, User, UserResponse};
use crate::AppState;
use axum::{
    extract::Extension,
    http::StatusCode,
    response::Json,
    routing::{post, Router},
};
use bcrypt::verify;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;

pub fn auth_routes() -> Router {
    Router::new().route("/api/auth/login", post(login))
}

async fn login(
    Extension(state): Extension<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password_hash, created_at, updated_at
         FROM users
         WHERE username = $1",
    )
    .bind(&payload.username)
    .fetch_optional(&state.db_pool)
    .await
    .map_err(|e| {
        tracing::error!("Database error during login: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                success: false,
                message: "Internal server error".to_string(),
            }),
        )
    })?;

    let user = match user {
        Some(user) => user,
        None => return Err(invalid_credentials()),
    };

    if !verify(&payload.password, &user.password_hash).unwrap_or(false) {
        return Err(invalid_credentials());
    }

    let token = generate_jwt_token(&user).map_err(|e| {
        tracing::error!("Failed to generate JWT: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                success: false,
                message: "Internal server error".to_string(),
            }),
        )
    })?;

    tracing::info!("User logged in: {}", user.username);

    Ok(Json(LoginResponse {
        access_token: token,
        user: UserResponse::from(user),
    }))
}

fn invalid_credentials() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            success: false,
            message: "Invalid credentials".to_string(),
        }),
    )
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| "your-secret-key-here".to_string())
}

pub fn generate_jwt_token(user: &User) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: user.id.to_string(),
        username: user.username.clone(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(24)).timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_secret().as_bytes()),
    )
}

pub fn verify_jwt_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_secret().as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_jwt_round_trip() {
        let token = generate_jwt_token(&sample_user()).unwrap();
        let claims = verify_jwt_token(&token).unwrap();

        assert_eq!(claims.sub, "1");
        assert_eq!(claims.username, "admin");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let token = generate_jwt_token(&sample_user()).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');

        assert!(verify_jwt_token(&tampered).is_err());
        assert!(verify_jwt_token("not.a.token").is_err());
    }
}
