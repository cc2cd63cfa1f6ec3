//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::api::AppState;
use crate::config::{BEARER_TOKEN_PREFIX, ROLE_ADMIN};
use crate::errors::AppError;

/// Authenticated user extracted from JWT token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub email: String,
    pub role: String,
}

impl CurrentUser {
    /// Check if user has admin role.
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }
}

/// JWT authentication middleware.
///
/// Validates the bearer token, confirms the account still exists (tokens
/// of deleted accounts are rejected even before expiry) and injects the
/// `CurrentUser` into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state.auth_service.verify_token(token)?;

    let user = state
        .user_service
        .get_user(claims.sub)
        .await
        .map_err(|_| AppError::Unauthorized)?;

    let current_user = CurrentUser {
        id: user.id,
        email: user.email,
        role: user.role.to_string(),
    };

    request.extensions_mut().insert(current_user);

    Ok(next.run(request).await)
}

/// Require admin role. Layered after `auth_middleware` on admin route groups.
pub async fn admin_middleware(request: Request, next: Next) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_admin() {
        return Err(AppError::Forbidden);
    }

    Ok(next.run(request).await)
}

/// Users act on their own account; admins on any.
pub fn require_self_or_admin(user: &CurrentUser, target: Uuid) -> Result<(), AppError> {
    if user.id == target || user.is_admin() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current(role: &str) -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            email: "user@example.com".into(),
            role: role.into(),
        }
    }

    #[test]
    fn self_or_admin_rules() {
        let user = current("user");
        assert!(require_self_or_admin(&user, user.id).is_ok());
        assert!(matches!(
            require_self_or_admin(&user, Uuid::new_v4()),
            Err(AppError::Forbidden)
        ));

        let admin = current("admin");
        assert!(require_self_or_admin(&admin, Uuid::new_v4()).is_ok());
    }
}
