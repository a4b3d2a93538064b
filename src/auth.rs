//! Bearer-token authentication against the identity provider.
//!
//! Every `/api` request carries `Authorization: Bearer <token>`. The token is
//! opaque to this server; it is forwarded to the provider's accounts:lookup
//! endpoint, which answers with the stable user id and (optionally) an email.
//! The header is checked before any store access.

use crate::app_state::AppState;
use crate::error::ApiError;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const DEFAULT_LOOKUP_URL: &str = "https://identitytoolkit.googleapis.com/v1/accounts:lookup";

/// The verified caller, inserted as a request extension by [`require_auth`].
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
}

#[derive(Clone)]
pub struct IdentityVerifier {
    client: reqwest::Client,
    lookup_url: String,
}

impl IdentityVerifier {
    /// `None` when no API key is configured; the server still starts and
    /// answers every API request with 503.
    pub fn from_env() -> Option<Self> {
        if let Ok(url) = dotenv::var("IDENTITY_ENDPOINT") {
            return Some(Self::with_lookup_url(url));
        }
        let key = dotenv::var("IDENTITY_API_KEY").ok()?;
        Some(Self::with_lookup_url(format!(
            "{DEFAULT_LOOKUP_URL}?key={key}"
        )))
    }

    pub fn with_lookup_url(lookup_url: String) -> Self {
        IdentityVerifier {
            client: reqwest::Client::new(),
            lookup_url,
        }
    }

    pub async fn verify(&self, id_token: &str) -> Result<AuthUser, ApiError> {
        debug!("Verifying token against identity provider");

        let resp = self
            .client
            .post(&self.lookup_url)
            .json(&json!({ "idToken": id_token }))
            .send()
            .await
            .map_err(|e| {
                ApiError::ServiceUnavailable(format!("Identity service unreachable: {e}"))
            })?;

        if !resp.status().is_success() {
            return Err(ApiError::Unauthenticated(
                "Unauthorized: invalid token".to_string(),
            ));
        }

        let lookup: LookupResponse = resp.json().await.map_err(|e| {
            ApiError::ServiceUnavailable(format!("Identity service returned bad payload: {e}"))
        })?;

        let user = lookup.users.into_iter().next().ok_or_else(|| {
            ApiError::Unauthenticated("Unauthorized: invalid token".to_string())
        })?;

        Ok(AuthUser {
            uid: user.local_id,
            email: user.email,
        })
    }
}

/// Middleware guarding the whole `/api` router.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(&req).ok_or_else(|| {
        ApiError::Unauthenticated(
            "Unauthorized: missing or invalid Authorization header".to_string(),
        )
    })?;

    let verifier = state
        .identity
        .as_ref()
        .ok_or_else(|| ApiError::ServiceUnavailable("Auth not configured".to_string()))?;

    let user = verifier.verify(&token).await?;
    req.extensions_mut().insert(user);
    Ok(next.run(req).await)
}

fn bearer_token(req: &Request) -> Option<String> {
    let header = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?;
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with_auth(value: Option<&str>) -> Request {
        let mut builder = axum::http::Request::builder().uri("/api/members");
        if let Some(v) = value {
            builder = builder.header(AUTHORIZATION, v);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn bearer_token_requires_scheme_prefix() {
        assert_eq!(
            bearer_token(&request_with_auth(Some("Bearer abc123"))),
            Some("abc123".to_string())
        );
        assert_eq!(bearer_token(&request_with_auth(Some("abc123"))), None);
        assert_eq!(bearer_token(&request_with_auth(Some("Bearer "))), None);
        assert_eq!(bearer_token(&request_with_auth(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&request_with_auth(None)), None);
    }
}
