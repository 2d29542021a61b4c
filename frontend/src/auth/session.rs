use gloo_net::http::Request;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use web_sys::{window, Storage};

use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The identity provider answered with an error of its own.
    #[error("{message}")]
    Provider { message: String },
    /// Anything else: network failures, missing browser APIs, bad payloads.
    #[error("unexpected session failure: {0}")]
    Unexpected(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
}

/// The "retrieve current session" capability the callback gate depends on.
pub trait SessionProvider {
    async fn get_session(&self) -> Result<Option<Session>, SessionError>;
}

/// What gets persisted in local storage between page loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// Unix seconds
    #[serde(default)]
    pub expires_at: Option<i64>,
}

impl StoredSession {
    pub fn is_expired(&self, now: i64) -> bool {
        self.expires_at.map_or(false, |expires_at| expires_at <= now)
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).map(|c| c.into_owned());
    decoded.unwrap_or(spaced)
}

/// Reads the fragment an OAuth provider appends to the callback URL, e.g.
/// `#access_token=...&expires_in=3600&refresh_token=...` or
/// `#error=access_denied&error_description=...`.
pub fn parse_callback_fragment(fragment: &str, now: i64) -> Result<Option<StoredSession>, SessionError> {
    let fragment = fragment.trim_start_matches('#');
    if fragment.is_empty() {
        return Ok(None);
    }

    let mut access_token = None;
    let mut refresh_token = None;
    let mut expires_in = None;
    let mut expires_at = None;
    let mut error = None;
    let mut error_description = None;

    for pair in fragment.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        let value = decode_component(value);
        match key {
            "access_token" => access_token = Some(value),
            "refresh_token" => refresh_token = Some(value),
            "expires_in" => expires_in = value.parse::<i64>().ok(),
            "expires_at" => expires_at = value.parse::<i64>().ok(),
            "error" => error = Some(value),
            "error_description" => error_description = Some(value),
            _ => {}
        }
    }

    if let Some(message) = error_description.or(error) {
        return Err(SessionError::Provider { message });
    }

    Ok(access_token
        .filter(|token| !token.is_empty())
        .map(|access_token| StoredSession {
            access_token,
            refresh_token,
            expires_at: expires_at.or_else(|| expires_in.map(|secs| now + secs)),
        }))
}

/// Picks the human readable message out of an auth API error body.
pub fn provider_error_message(body: &Value) -> Option<String> {
    ["error_description", "msg", "message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

fn local_storage() -> Result<Storage, SessionError> {
    window()
        .ok_or_else(|| SessionError::Unexpected("no window".to_string()))?
        .local_storage()
        .map_err(|_| SessionError::Unexpected("local storage is not accessible".to_string()))?
        .ok_or_else(|| SessionError::Unexpected("local storage is not available".to_string()))
}

fn now_unix() -> i64 {
    chrono::Utc::now().timestamp()
}

/// The stored session, if there is one that has not expired yet.
pub fn stored_session() -> Option<StoredSession> {
    let storage = local_storage().ok()?;
    let raw = storage.get_item(config::SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str::<StoredSession>(&raw) {
        Ok(session) if !session.is_expired(now_unix()) => Some(session),
        Ok(_) => {
            info!("Stored session expired");
            clear_stored_session();
            None
        }
        Err(e) => {
            warn!("Discarding malformed stored session: {}", e);
            clear_stored_session();
            None
        }
    }
}

pub fn is_logged_in() -> bool {
    stored_session().is_some()
}

fn store_session(session: &StoredSession) -> Result<(), SessionError> {
    let raw = serde_json::to_string(session).map_err(|e| SessionError::Unexpected(e.to_string()))?;
    local_storage()?
        .set_item(config::SESSION_STORAGE_KEY, &raw)
        .map_err(|_| SessionError::Unexpected("failed to persist session".to_string()))
}

pub fn clear_stored_session() {
    match local_storage() {
        Ok(storage) => {
            let _ = storage.remove_item(config::SESSION_STORAGE_KEY);
        }
        Err(e) => warn!("Could not clear session: {}", e),
    }
}

/// Session lookup against a Supabase style auth API.
#[derive(Debug, Clone)]
pub struct SupabaseSessionProvider {
    auth_url: String,
    anon_key: String,
}

impl Default for SupabaseSessionProvider {
    fn default() -> Self {
        Self::new(config::get_auth_url(), config::get_auth_anon_key())
    }
}

impl SupabaseSessionProvider {
    pub fn new(auth_url: &str, anon_key: &str) -> Self {
        Self {
            auth_url: auth_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        }
    }

    /// Where the login button sends the browser.
    pub fn authorize_url(&self, provider: &str, redirect_to: &str) -> String {
        format!(
            "{}/auth/v1/authorize?provider={}&redirect_to={}",
            self.auth_url,
            urlencoding::encode(provider),
            urlencoding::encode(redirect_to)
        )
    }

    fn callback_fragment(&self) -> Result<String, SessionError> {
        window()
            .ok_or_else(|| SessionError::Unexpected("no window".to_string()))?
            .location()
            .hash()
            .map_err(|_| SessionError::Unexpected("cannot read location".to_string()))
    }

    async fn fetch_user(&self, stored: &StoredSession) -> Result<Option<AuthUser>, SessionError> {
        let response = Request::get(&format!("{}/auth/v1/user", self.auth_url))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", stored.access_token))
            .send()
            .await
            .map_err(|e| SessionError::Unexpected(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await.ok();
        let user = classify_user_response(status, body)?;
        if user.is_none() {
            info!("Stored session was rejected by the auth server");
            clear_stored_session();
        }
        Ok(user)
    }
}

/// Maps the `/auth/v1/user` answer onto the session outcome. 401 means the
/// token is no good any more, every other non 2xx status is a provider error.
pub fn classify_user_response(status: u16, body: Option<Value>) -> Result<Option<AuthUser>, SessionError> {
    match status {
        200..=299 => {
            let body = body.ok_or_else(|| SessionError::Unexpected("user response was not JSON".to_string()))?;
            serde_json::from_value::<AuthUser>(body)
                .map(Some)
                .map_err(|e| SessionError::Unexpected(e.to_string()))
        }
        401 => Ok(None),
        _ => Err(SessionError::Provider {
            message: body
                .as_ref()
                .and_then(provider_error_message)
                .unwrap_or_else(|| format!("Authentication failed ({})", status)),
        }),
    }
}

impl SessionProvider for SupabaseSessionProvider {
    async fn get_session(&self) -> Result<Option<Session>, SessionError> {
        let fragment = self.callback_fragment()?;
        if let Some(fresh) = parse_callback_fragment(&fragment, now_unix())? {
            store_session(&fresh)?;
        }

        let Some(stored) = stored_session() else {
            return Ok(None);
        };

        Ok(self.fetch_user(&stored).await?.map(|user| Session {
            access_token: stored.access_token,
            user,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fragment_has_no_session() {
        assert_eq!(parse_callback_fragment("", 0), Ok(None));
        assert_eq!(parse_callback_fragment("#", 0), Ok(None));
        assert_eq!(parse_callback_fragment("#type=recovery", 0), Ok(None));
    }

    #[test]
    fn token_fragment_becomes_stored_session() {
        let parsed = parse_callback_fragment(
            "#access_token=abc.def&expires_in=3600&refresh_token=r1&token_type=bearer",
            1_000,
        );
        assert_eq!(
            parsed,
            Ok(Some(StoredSession {
                access_token: "abc.def".to_string(),
                refresh_token: Some("r1".to_string()),
                expires_at: Some(4_600),
            }))
        );
    }

    #[test]
    fn explicit_expires_at_wins_over_expires_in() {
        let parsed = parse_callback_fragment("access_token=t&expires_in=10&expires_at=99", 50)
            .unwrap()
            .unwrap();
        assert_eq!(parsed.expires_at, Some(99));
    }

    #[test]
    fn error_fragment_is_a_provider_error() {
        let parsed = parse_callback_fragment(
            "#error=access_denied&error_code=403&error_description=Email+link+is+invalid%21",
            0,
        );
        assert_eq!(
            parsed,
            Err(SessionError::Provider {
                message: "Email link is invalid!".to_string()
            })
        );

        let bare = parse_callback_fragment("#error=server_error", 0);
        assert_eq!(
            bare,
            Err(SessionError::Provider {
                message: "server_error".to_string()
            })
        );
    }

    #[test]
    fn expiry_is_inclusive() {
        let session = StoredSession {
            access_token: "t".to_string(),
            refresh_token: None,
            expires_at: Some(100),
        };
        assert!(!session.is_expired(99));
        assert!(session.is_expired(100));

        let forever = StoredSession { expires_at: None, ..session };
        assert!(!forever.is_expired(i64::MAX));
    }

    #[test]
    fn stored_session_tolerates_missing_optional_fields() {
        let session: StoredSession = serde_json::from_str(r#"{"access_token":"x"}"#).unwrap();
        assert_eq!(session.refresh_token, None);
        assert_eq!(session.expires_at, None);
    }

    #[test]
    fn error_message_prefers_description() {
        let body = json!({ "error": "invalid_grant", "error_description": "Refresh Token Not Found" });
        assert_eq!(provider_error_message(&body).as_deref(), Some("Refresh Token Not Found"));
        assert_eq!(provider_error_message(&json!({ "msg": "Bad JWT" })).as_deref(), Some("Bad JWT"));
        assert_eq!(provider_error_message(&json!({ "code": 500 })), None);
    }

    #[test]
    fn successful_user_response_is_a_session() {
        let user = classify_user_response(200, Some(json!({ "id": "u-1", "email": "a@b.c", "aud": "authenticated" })));
        assert_eq!(
            user,
            Ok(Some(AuthUser {
                id: "u-1".to_string(),
                email: Some("a@b.c".to_string()),
            }))
        );
    }

    #[test]
    fn successful_status_with_unusable_body_is_unexpected() {
        assert!(matches!(classify_user_response(200, None), Err(SessionError::Unexpected(_))));
        assert!(matches!(
            classify_user_response(204, Some(json!({ "email": "no id" }))),
            Err(SessionError::Unexpected(_))
        ));
    }

    #[test]
    fn unauthorized_means_no_session() {
        assert_eq!(classify_user_response(401, Some(json!({ "msg": "JWT expired" }))), Ok(None));
        assert_eq!(classify_user_response(401, None), Ok(None));
    }

    #[test]
    fn other_statuses_are_provider_errors() {
        assert_eq!(
            classify_user_response(403, Some(json!({ "msg": "User banned" }))),
            Err(SessionError::Provider { message: "User banned".to_string() })
        );
        assert_eq!(
            classify_user_response(500, Some(json!({ "code": 500 }))),
            Err(SessionError::Provider { message: "Authentication failed (500)".to_string() })
        );
        assert_eq!(
            classify_user_response(502, None),
            Err(SessionError::Provider { message: "Authentication failed (502)".to_string() })
        );
    }

    #[test]
    fn error_fragment_wins_over_a_token() {
        let parsed = parse_callback_fragment("#access_token=t&error=access_denied", 0);
        assert_eq!(parsed, Err(SessionError::Provider { message: "access_denied".to_string() }));
    }

    #[test]
    fn authorize_url_encodes_redirect() {
        let provider = SupabaseSessionProvider::new("https://auth.example.com/", "key");
        assert_eq!(
            provider.authorize_url("discord", "https://centra.world/auth/callback"),
            "https://auth.example.com/auth/v1/authorize?provider=discord&redirect_to=https%3A%2F%2Fcentra.world%2Fauth%2Fcallback"
        );
    }

    #[test]
    fn session_error_messages() {
        let provider = SessionError::Provider { message: "Invalid login".to_string() };
        assert_eq!(provider.to_string(), "Invalid login");
        assert_eq!(
            SessionError::Unexpected("boom".to_string()).to_string(),
            "unexpected session failure: boom"
        );
    }
}
