//! Profile state and the local token fallback
//!
//! When the profile endpoint fails, the display name can still be recovered
//! from the locally stored auth token: the payload segment is base64url
//! JSON carrying a `username` claim. The token is never verified here; this
//! is a display fallback, not authentication.

use crate::error::SyncError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use docket_record::{TokenClaims, UserProfile};

/// Displayable profile state
///
/// Starts at the placeholder; `loading` clears once a load settles, whatever
/// the outcome, so the header never shows a spinner forever.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileState {
    /// Current profile fields (placeholder until loaded)
    pub profile: UserProfile,
    /// Whether the initial load is still in flight
    pub loading: bool,
}

impl ProfileState {
    /// State before any load has settled
    #[inline]
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            profile: UserProfile::placeholder(),
            loading: true,
        }
    }
}

impl Default for ProfileState {
    fn default() -> Self {
        Self::placeholder()
    }
}

/// Decode the claims from a JWT-shaped auth token
///
/// # Errors
/// `SyncError::DecodeFailed` when the token has no payload segment, the
/// segment is not base64url, or the claims JSON is missing `username`.
pub fn decode_token_claims(token: &str) -> Result<TokenClaims, SyncError> {
    let payload = token
        .split('.')
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .ok_or_else(|| SyncError::DecodeFailed("token has no payload segment".to_owned()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| SyncError::DecodeFailed(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| SyncError::DecodeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(claims: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        format!("{header}.{payload}.signature")
    }

    #[test]
    fn decode_valid_token() {
        let token = token_with_payload(r#"{"username":"jdoe","exp":1767225600}"#);
        let claims = decode_token_claims(&token).unwrap();
        assert_eq!(claims.username, "jdoe");
    }

    #[test]
    fn decode_rejects_tokens_without_payload() {
        assert!(matches!(
            decode_token_claims("not-a-token"),
            Err(SyncError::DecodeFailed(_))
        ));
        assert!(matches!(
            decode_token_claims(""),
            Err(SyncError::DecodeFailed(_))
        ));
    }

    #[test]
    fn decode_rejects_garbage_payload() {
        assert!(matches!(
            decode_token_claims("header.!!!.signature"),
            Err(SyncError::DecodeFailed(_))
        ));
    }

    #[test]
    fn decode_rejects_claims_without_username() {
        let token = token_with_payload(r#"{"exp":1767225600}"#);
        assert!(matches!(
            decode_token_claims(&token),
            Err(SyncError::DecodeFailed(_))
        ));
    }

    #[test]
    fn profile_state_starts_loading() {
        let state = ProfileState::placeholder();
        assert!(state.loading);
        assert_eq!(state.profile.full_name, "Loading...");
    }
}
