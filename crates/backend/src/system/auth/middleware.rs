use axum::{body::Body, extract::Request, http::StatusCode, middleware::Next, response::Response};
use contracts::system::auth::TokenClaims;

/// Middleware that requires valid JWT authentication
pub async fn require_auth(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let (req, _claims) = authenticate(req).await?;
    Ok(next.run(req).await)
}

/// Middleware that requires admin privileges
pub async fn require_admin(req: Request<Body>, next: Next) -> Result<Response, StatusCode> {
    let (req, claims) = authenticate(req).await?;

    if !claims.is_admin {
        return Err(StatusCode::FORBIDDEN);
    }

    Ok(next.run(req).await)
}

/// Validate the bearer token and stash the claims in request extensions for
/// the `CurrentUser` extractor.
async fn authenticate(mut req: Request<Body>) -> Result<(Request<Body>, TokenClaims), StatusCode> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let claims = super::jwt::validate_token(token)
        .await
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    req.extensions_mut().insert(claims.clone());
    Ok((req, claims))
}
