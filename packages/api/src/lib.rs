//! # API crate — HTTP client for the notice board backend
//!
//! Wraps the four backend endpoints behind [`ApiClient`]:
//!
//! | Method | Endpoint | Body |
//! |--------|----------|------|
//! | [`ApiClient::get_notices`] | `GET /get-notices` | — |
//! | [`ApiClient::create_notice`] | `POST /create-notice` | multipart form |
//! | [`ApiClient::edit_notice`] | `PUT /edit-notice/:id` | JSON `{title, content}` |
//! | [`ApiClient::delete_notice`] | `DELETE /delete-notice/:id` | — |
//!
//! Every response is JSON. A body carrying a non-empty `error` string is an
//! application rejection and fails the call with [`ApiError::Rejected`]
//! before any payload decoding happens; network failures and undecodable
//! bodies surface as [`ApiError::Transport`] and [`ApiError::Decode`].

use serde::de::DeserializeOwned;
use serde::Deserialize;

use board::{Notice, NoticeDraft, NoticeEdit, NoticeId};

/// Failure modes of a backend call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The server answered with `{error: "..."}` instead of a payload.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed (connection, timeout, non-HTTP failure).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The response body was not the expected JSON shape.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// `true` for an application rejection whose message should be shown
    /// verbatim to the user.
    pub fn is_rejected(&self) -> bool {
        matches!(self, ApiError::Rejected(_))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decode a response body, short-circuiting on an `error` field.
fn parse_reply<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    if let Ok(ErrorBody { error }) = serde_json::from_str::<ErrorBody>(body) {
        if !error.is_empty() {
            return Err(ApiError::Rejected(error));
        }
    }
    Ok(serde_json::from_str(body)?)
}

/// Client for the notice board backend.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection
/// pool across clones.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// Build a client against `base` (scheme + host, no trailing slash).
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Fetch the full current notice set.
    pub async fn get_notices(&self) -> Result<Vec<Notice>, ApiError> {
        let body = self
            .http
            .get(self.url("/get-notices"))
            .send()
            .await?
            .text()
            .await?;
        parse_reply(&body)
    }

    /// Submit the creation form; returns the created notice.
    pub async fn create_notice(&self, draft: &NoticeDraft) -> Result<Notice, ApiError> {
        let form = reqwest::multipart::Form::new()
            .text("title", draft.title.clone())
            .text("content", draft.content.clone());
        let body = self
            .http
            .post(self.url("/create-notice"))
            .multipart(form)
            .send()
            .await?
            .text()
            .await?;
        parse_reply(&body)
    }

    /// Update title and content of an existing notice; returns the updated
    /// notice including its new `updated_at`.
    pub async fn edit_notice(&self, id: &NoticeId, edit: &NoticeEdit) -> Result<Notice, ApiError> {
        let body = self
            .http
            .put(self.url(&format!("/edit-notice/{id}")))
            .json(edit)
            .send()
            .await?
            .text()
            .await?;
        parse_reply(&body)
    }

    /// Delete a notice. The confirmation payload is ignored beyond the
    /// `error` check.
    pub async fn delete_notice(&self, id: &NoticeId) -> Result<(), ApiError> {
        let body = self
            .http
            .delete(self.url(&format!("/delete-notice/{id}")))
            .send()
            .await?
            .text()
            .await?;
        parse_reply::<serde_json::Value>(&body).map(|_| ())
    }
}
