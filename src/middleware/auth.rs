use crate::handlers::auth::verify_jwt_token;
use crate::models::auth::{Claims, ErrorResponse};
use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

fn unauthorized(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse {
            success: false,
            message: message.to_string(),
        }),
    )
}

/// Requires a valid `Authorization: Bearer <token>` header and attaches the
/// decoded claims to the request for downstream handlers.
pub async fn auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, impl IntoResponse> {
    let auth_str = headers
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .ok_or_else(|| unauthorized("Invalid Authorization header format. Expected 'Bearer <token>'"))?;

    let claims: Claims = verify_jwt_token(token).map_err(|e| {
        tracing::warn!("JWT verification failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(claims);
    Ok::<_, (StatusCode, Json<ErrorResponse>)>(next.run(request).await)
}
