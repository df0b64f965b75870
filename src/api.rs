// API client module: a small blocking HTTP client for the two Bluesky XRPC
// procedures this tool needs, `createSession` and `createRecord`. Each call
// is a single request/response round trip; nothing is retried.

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://bsky.social";
pub const CREATE_SESSION: &str = "com.atproto.server.createSession";
pub const CREATE_RECORD: &str = "com.atproto.repo.createRecord";
pub const POST_COLLECTION: &str = "app.bsky.feed.post";

/// Blocking client bound to one PDS host.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Login payload for `createSession`.
#[derive(Serialize, Debug)]
pub struct CreateSessionRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
}

/// The part of a `createSession` response we keep: the bearer token and
/// the account DID that owns the repo we write to.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Session {
    #[serde(rename = "accessJwt")]
    pub access_jwt: String,
    pub did: String,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("access_jwt", &"[REDACTED]")
            .field("did", &self.did)
            .finish()
    }
}

/// XRPC error body. Both fields default to empty so a body that only
/// carries one of them still decodes.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: String,
}

/// A feed post record as stored in the repo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostRecord {
    #[serde(rename = "$type")]
    pub record_type: String,
    pub text: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl PostRecord {
    pub fn new(text: &str, created_at: DateTime<Utc>) -> Self {
        PostRecord {
            record_type: POST_COLLECTION.to_string(),
            text: text.to_string(),
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Body for `createRecord`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CreateRecordRequest {
    pub repo: String,
    pub collection: String,
    pub record: PostRecord,
}

impl CreateRecordRequest {
    /// Wrap a new post by `did` with the given creation time.
    pub fn post(did: &str, text: &str, created_at: DateTime<Utc>) -> Self {
        CreateRecordRequest {
            repo: did.to_string(),
            collection: POST_COLLECTION.to_string(),
            record: PostRecord::new(text, created_at),
        }
    }
}

impl ApiClient {
    /// Client for the public Bluesky PDS.
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for another host, e.g. a self-hosted PDS or a local mock.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build().map_err(Error::Client)?;
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Ok(ApiClient { client, base_url })
    }

    fn xrpc_url(&self, nsid: &str) -> String {
        format!("{}/xrpc/{}", self.base_url, nsid)
    }

    /// Exchange a handle and app password for a [`Session`].
    pub fn authenticate(&self, credentials: &Credentials) -> Result<Session> {
        let body = CreateSessionRequest {
            identifier: &credentials.identifier,
            password: credentials.password.expose_secret(),
        };
        let res = self.post_json("auth", CREATE_SESSION, &body, None)?;
        let session: Session = res
            .json()
            .map_err(|source| Error::Decode { what: "auth", source })?;

        tracing::info!(did = %session.did, "authentication successful");
        Ok(session)
    }

    /// Publish `text` as a new feed post stamped with the current time.
    pub fn create_post(&self, session: &Session, text: &str) -> Result<()> {
        let body = CreateRecordRequest::post(&session.did, text, Utc::now());
        self.post_json("post", CREATE_RECORD, &body, Some(&session.access_jwt))?;

        tracing::info!(did = %session.did, "post successful");
        Ok(())
    }

    /// POST `body` as JSON and return the response if the status is 200.
    /// Any other status is turned into [`Error::Rejected`] (or
    /// [`Error::Decode`] when the error body is unreadable).
    fn post_json<B: Serialize>(
        &self,
        what: &'static str,
        nsid: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<Response> {
        let bytes = serde_json::to_vec(body).map_err(|source| Error::Serialize { what, source })?;
        let url = self.xrpc_url(nsid);
        tracing::debug!(%url, "sending {what} request");

        let mut req = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(bytes);
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }

        let res = req.send().map_err(|source| Error::Transport { what, source })?;
        if res.status() == StatusCode::OK {
            return Ok(res);
        }
        Err(rejection(what, res))
    }
}

fn rejection(what: &'static str, res: Response) -> Error {
    let status = res.status();
    match res.json::<ErrorBody>() {
        Ok(body) => Error::Rejected {
            what,
            status,
            code: body.error,
            message: body.message,
        },
        Err(source) => Error::Decode { what, source },
    }
}
