use crate::api::errors::APIErrors;
use crate::api::state::AppState;
use crate::security::auth::admin_token_matches;
use crate::security::jwt::{AccessClaims, JwtService};
use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

pub const SESSION_COOKIE: &str = "sessionid";

/// Proof that the request carried the admin bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminGuard;

impl FromRequestParts<AppState> for AdminGuard {
    type Rejection = APIErrors;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::warn!("Missing or malformed admin authorization header");
                APIErrors::Unauthorized
            })?;

        admin_token_matches(&state.config.admin_token, bearer.token()).map_err(|_| {
            tracing::warn!("Rejected admin token");
            APIErrors::Unauthorized
        })?;

        Ok(AdminGuard)
    }
}

/// The signed-in customer, taken from a bearer token issued at login.
impl FromRequestParts<AppState> for AccessClaims {
    type Rejection = APIErrors;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| {
                tracing::warn!("Missing or malformed authorization header");
                APIErrors::Unauthorized
            })?;

        JwtService::from_config(&state.config)
            .decode_token::<AccessClaims>(bearer.token())
            .map_err(|e| {
                tracing::warn!("Token rejected: {}", e);
                APIErrors::Unauthorized
            })
    }
}

/// Returns the cart session key, minting a new cookie when the request has
/// none. The returned jar must be sent back with the response.
pub fn cart_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(key) = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| is_session_key(value))
    {
        return (jar, key);
    }

    let key = uuid::Uuid::new_v4().simple().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, key.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    (jar.add(cookie), key)
}

/// Session keys are 32 lowercase hex characters.
fn is_session_key(value: &str) -> bool {
    value.len() == 32 && value.chars().all(|c| c.is_ascii_hexdigit())
}
