//! User profile as served by the profile endpoint, plus the token claims
//! used for the local fallback when that endpoint fails

use serde::{Deserialize, Serialize};

/// Profile of the authenticated requester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub full_name: String,
    /// Academic program
    #[serde(default)]
    pub program: String,
    /// Student identifier
    #[serde(default)]
    pub student_id: String,
}

impl UserProfile {
    /// Placeholder shown until a profile load settles
    #[inline]
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            full_name: "Loading...".to_owned(),
            program: String::new(),
            student_id: String::new(),
        }
    }
}

/// Claims decoded from the locally stored auth token
///
/// Used only as a display fallback; the token is never verified client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject username
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_placeholder() {
        let profile = UserProfile::placeholder();
        assert_eq!(profile.full_name, "Loading...");
        assert!(profile.program.is_empty());
        assert!(profile.student_id.is_empty());
    }

    #[test]
    fn claims_deserialize_with_extra_fields() {
        let claims: TokenClaims =
            serde_json::from_str(r#"{"username": "jdoe", "exp": 1767225600}"#).unwrap();
        assert_eq!(claims.username, "jdoe");
    }
}
