//! Backend contract: three calls against the activities service.
//!
//! `ActivityApi` is the seam between the board and the network. The browser
//! build talks HTTP through [`HttpActivityApi`]; tests script replies.

use urlencoding::encode;

use crate::error::ApiError;
use crate::model::{ActivityCatalog, Reply};

mod http;
pub use http::HttpActivityApi;

pub trait ActivityApi {
    /// `GET /activities`
    async fn list_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{name}/signup?email={email}`
    async fn signup(&self, activity: &str, email: &str) -> Result<Reply, ApiError>;

    /// `DELETE /activities/{name}/unregister?email={email}`
    async fn unregister(&self, activity: &str, email: &str) -> Result<Reply, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    List,
    Signup { activity: &'a str, email: &'a str },
    Unregister { activity: &'a str, email: &'a str },
}

impl Endpoint<'_> {
    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::List => "GET",
            Endpoint::Signup { .. } => "POST",
            Endpoint::Unregister { .. } => "DELETE",
        }
    }

    /// Path plus query, with the activity name and email percent-encoded.
    pub fn path(&self) -> String {
        match self {
            Endpoint::List => "/activities".to_string(),
            Endpoint::Signup { activity, email } => {
                format!("/activities/{}/signup?email={}", encode(activity), encode(email))
            }
            Endpoint::Unregister { activity, email } => {
                format!("/activities/{}/unregister?email={}", encode(activity), encode(email))
            }
        }
    }

    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

/// Sorts a mutation response: 2xx with a JSON body is the reply, any other
/// status is a rejection carrying the parsed body. A body that is not JSON is
/// a decode error either way.
pub fn reply_from(status: u16, ok: bool, body: &str) -> Result<Reply, ApiError> {
    let reply: Reply = serde_json::from_str(body)?;
    if ok {
        Ok(reply)
    } else {
        Err(ApiError::Rejected { status, reply })
    }
}

/// Sorts a catalog response. A non-2xx status is a rejection even when the
/// body is not JSON.
pub fn catalog_from(status: u16, ok: bool, body: &str) -> Result<ActivityCatalog, ApiError> {
    if !ok {
        let reply = serde_json::from_str(body).unwrap_or_default();
        return Err(ApiError::Rejected { status, reply });
    }
    Ok(ActivityCatalog::from_json(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_is_plain_path() {
        assert_eq!(Endpoint::List.url(""), "/activities");
        assert_eq!(Endpoint::List.method(), "GET");
    }

    #[test]
    fn encodes_name_and_email() {
        let ep = Endpoint::Signup { activity: "Chess Club", email: "a+b@x.edu" };
        assert_eq!(ep.path(), "/activities/Chess%20Club/signup?email=a%2Bb%40x.edu");
        assert_eq!(ep.method(), "POST");
    }

    #[test]
    fn slash_in_name_stays_in_one_segment() {
        let ep = Endpoint::Unregister { activity: "Art/Craft", email: "m@x.edu" };
        assert_eq!(ep.path(), "/activities/Art%2FCraft/unregister?email=m%40x.edu");
        assert_eq!(ep.method(), "DELETE");
    }

    #[test]
    fn base_trailing_slash_is_trimmed() {
        assert_eq!(
            Endpoint::List.url("https://school.example/api/"),
            "https://school.example/api/activities"
        );
    }

    #[test]
    fn catalog_ok_decodes() {
        let body = r#"{"Yoga": {"description": "d", "schedule": "s", "max_participants": 3, "participants": []}}"#;
        let catalog = catalog_from(200, true, body).unwrap();
        assert_eq!(catalog.names(), vec!["Yoga"]);
    }

    #[test]
    fn catalog_error_status_is_rejected() {
        let err = catalog_from(500, false, "Internal Server Error").unwrap_err();
        assert!(matches!(err, ApiError::Rejected { status: 500, ref reply } if *reply == Reply::default()));

        let err = catalog_from(503, false, r#"{"detail": "maintenance"}"#).unwrap_err();
        let ApiError::Rejected { reply, .. } = err else {
            panic!("expected rejection");
        };
        assert_eq!(reply.detail().as_deref(), Some("maintenance"));
    }

    #[test]
    fn catalog_non_json_is_decode_error() {
        let err = catalog_from(200, true, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn reply_ok_decodes() {
        let reply = reply_from(200, true, r#"{"message": "Signed up a@x.edu for Yoga"}"#).unwrap();
        assert_eq!(reply.message(), Some("Signed up a@x.edu for Yoga"));
    }

    #[test]
    fn reply_error_status_keeps_body() {
        let err = reply_from(400, false, r#"{"detail": "Already signed up"}"#).unwrap_err();
        let ApiError::Rejected { status, reply } = err else {
            panic!("expected rejection");
        };
        assert_eq!(status, 400);
        assert_eq!(reply.detail().as_deref(), Some("Already signed up"));
    }

    #[test]
    fn reply_non_json_is_decode_error() {
        assert!(matches!(reply_from(200, true, "ok"), Err(ApiError::Decode(_))));
        assert!(matches!(reply_from(502, false, "Bad Gateway"), Err(ApiError::Decode(_))));
    }
}
