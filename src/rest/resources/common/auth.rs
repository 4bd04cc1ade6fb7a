//! Authentication, account and status payloads.

use serde::{Deserialize, Serialize};

use crate::config::{GuestSessionId, SessionId};

/// The generic `{success, status_code, status_message}` reply of mutating
/// endpoints (rating, favorite, add_item, ...).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StatusResponse {
    pub success: Option<bool>,
    pub status_code: Option<i64>,
    pub status_message: Option<String>,
}

/// A request token from `authentication/token/new`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestToken {
    pub success: bool,
    pub expires_at: String,
    pub request_token: String,
}

/// A session from `authentication/session/new`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewSession {
    pub success: bool,
    pub session_id: SessionId,
}

/// A guest session from `authentication/guest_session/new`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewGuestSession {
    pub success: bool,
    pub guest_session_id: GuestSessionId,
    pub expires_at: String,
}

/// The account owning a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccountDetails {
    pub id: u64,
    pub username: Option<String>,
    pub name: Option<String>,
    pub include_adult: Option<bool>,
    pub iso_639_1: Option<String>,
    pub iso_3166_1: Option<String>,
}

/// The reply to `list` creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListCreated {
    pub success: Option<bool>,
    pub status_code: Option<i64>,
    pub status_message: Option<String>,
    pub list_id: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_wraps_session_id() {
        let session: NewSession = serde_json::from_str(
            r#"{"success": true, "session_id": "79191836ddaa0da3df76a5ffef6f07ad6ab0c641"}"#,
        )
        .unwrap();

        assert!(session.success);
        assert_eq!(
            session.session_id.as_ref(),
            "79191836ddaa0da3df76a5ffef6f07ad6ab0c641"
        );
    }

    #[test]
    fn test_new_session_rejects_empty_id() {
        let result: Result<NewSession, _> =
            serde_json::from_str(r#"{"success": true, "session_id": ""}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_list_created_deserialization() {
        let created: ListCreated = serde_json::from_str(
            r#"{"status_message": "The item/record was created successfully.", "success": true, "status_code": 1, "list_id": 5861}"#,
        )
        .unwrap();

        assert_eq!(created.list_id, 5861);
        assert_eq!(created.status_code, Some(1));
    }

    #[test]
    fn test_account_details_ignores_unknown_fields() {
        let account: AccountDetails = serde_json::from_str(
            r#"{"avatar": {"gravatar": {"hash": "c9e9fc152ee756a900db85757c29815d"}}, "id": 548, "iso_639_1": "en", "iso_3166_1": "CA", "name": "Travis Bell", "include_adult": false, "username": "travisbell"}"#,
        )
        .unwrap();

        assert_eq!(account.id, 548);
        assert_eq!(account.username.as_deref(), Some("travisbell"));
    }
}
