//! Chat client — handshake, matchmaking, and room calls.

use pairchat_core::{ClientConfig, Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::cookie;
use crate::types::*;

/// Header carrying the CSRF token on mutating requests.
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for the chat-matching service.
///
/// The CSRF token and session key are explicit state on the client value,
/// populated by [`ChatClient::handshake`] or injected directly. There is no
/// ambient token source.
#[derive(Debug, Clone)]
pub struct ChatClient {
    config: ClientConfig,
    http: reqwest::Client,
    csrf_token: Option<String>,
    session_id: Option<String>,
}

impl ChatClient {
    /// Create a client for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
            csrf_token: None,
            session_id: None,
        }
    }

    /// Inject a CSRF token instead of harvesting one via the handshake.
    pub fn with_csrf_token(mut self, token: &str) -> Self {
        self.csrf_token = Some(token.to_string());
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn csrf_token(&self) -> Option<&str> {
        self.csrf_token.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    // ---------------------------------------------------------------
    // Handshake
    // ---------------------------------------------------------------

    /// Fetch the service root and harvest the CSRF and session cookies
    /// from its `Set-Cookie` headers.
    ///
    /// A missing CSRF cookie is not an error here; mutating calls fail
    /// with [`Error::MissingCsrfToken`] when the token is actually needed.
    pub async fn handshake(&mut self) -> Result<()> {
        let url = format!("{}/chat/", self.config.base_url);
        let response = self.http.get(&url).send().await.map_err(http_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        for header in response.headers().get_all(reqwest::header::SET_COOKIE) {
            let Ok(raw) = header.to_str() else { continue };
            if self.csrf_token.is_none() {
                self.csrf_token = cookie::cookie_value(raw, &self.config.csrf_cookie);
            }
            if self.session_id.is_none() {
                self.session_id = cookie::cookie_value(raw, &self.config.session_cookie);
            }
        }

        if self.csrf_token.is_none() {
            warn!(
                "handshake returned no {} cookie",
                self.config.csrf_cookie
            );
        }
        debug!(
            "handshake complete (csrf: {}, session: {})",
            self.csrf_token.is_some(),
            self.session_id.is_some()
        );

        Ok(())
    }

    // ---------------------------------------------------------------
    // Matchmaking
    // ---------------------------------------------------------------

    /// Search for a chat partner. The three filter fields are sent verbatim.
    ///
    /// Transport and decode failures surface as `Err`; everything the
    /// server actually said comes back as a [`SearchOutcome`].
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let url = format!("{}/chat/search", self.config.base_url);
        // The rejection branch arrives with a non-2xx status and a JSON
        // body; read the body regardless of status.
        let (_, body) = self.post_raw(&url, request).await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(interpret_search_response(parsed))
    }

    /// Navigation target for a matched room.
    pub fn room_url(&self, room_id: &str) -> String {
        format!("{}/chat/room/{}", self.config.base_url, room_id)
    }

    // ---------------------------------------------------------------
    // Room surface
    // ---------------------------------------------------------------

    /// Post a message to a room. Returns the stored message id.
    pub async fn post_message(&self, room_id: &str, content: &str) -> Result<String> {
        let session_id = self
            .session_id
            .as_deref()
            .ok_or(Error::MissingSessionKey)?;

        let url = format!("{}/chat/post_message/", self.config.base_url);
        let request = PostMessageRequest {
            room_id: room_id.to_string(),
            session_id: session_id.to_string(),
            content: content.to_string(),
        };

        let response: PostMessageResponse = self.post_json(&url, &request).await?;
        response
            .message_id
            .ok_or_else(|| Error::Malformed("post_message response without message_id".into()))
    }

    /// Fetch room history.
    pub async fn messages(&self, room_id: &str) -> Result<MessagesResponse> {
        let url = format!("{}/chat/get_messages/{}/", self.config.base_url, room_id);
        self.get_json(&url).await
    }

    /// Check whether the second user has joined.
    pub async fn room_status(&self, room_id: &str) -> Result<RoomStatus> {
        let url = format!(
            "{}/chat/api/check_room_status/{}/",
            self.config.base_url, room_id
        );
        self.get_json(&url).await
    }

    /// Announce this user as the room's second participant.
    pub async fn join_room(&self, room_id: &str) -> Result<()> {
        let url = format!("{}/chat/api/join_room/{}/", self.config.base_url, room_id);
        let _: serde_json::Value = self.get_json(&url).await?;
        Ok(())
    }

    /// End the chat in a room.
    pub async fn end_chat(&self, room_id: &str) -> Result<()> {
        let url = format!("{}/chat/api/end_chat/", self.config.base_url);
        let request = EndChatRequest {
            room_id: room_id.to_string(),
        };
        let _: StatusResponse = self.post_json(&url, &request).await?;
        Ok(())
    }

    /// Number of chats currently online. The server answers with an HTML
    /// `<span>` around the count.
    pub async fn users_in_chat(&self) -> Result<u64> {
        let url = format!("{}/chat/api/get_users_in_chat/", self.config.base_url);
        let mut builder = self.http.get(&url);
        if let Some(cookies) = self.cookie_header() {
            builder = builder.header(reqwest::header::COOKIE, cookies);
        }

        let response = builder.send().await.map_err(http_err)?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UnexpectedStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(http_err)?;
        parse_count_span(&body)
            .ok_or_else(|| Error::Malformed(format!("unreadable online count: {body:?}")))
    }

    // ---------------------------------------------------------------
    // Request plumbing
    // ---------------------------------------------------------------

    /// `Cookie` header carrying whatever tokens the handshake produced.
    fn cookie_header(&self) -> Option<String> {
        let mut pairs = Vec::new();
        if let Some(token) = &self.csrf_token {
            pairs.push(format!("{}={}", self.config.csrf_cookie, token));
        }
        if let Some(key) = &self.session_id {
            pairs.push(format!("{}={}", self.config.session_cookie, key));
        }
        if pairs.is_empty() {
            None
        } else {
            Some(pairs.join("; "))
        }
    }

    /// POST JSON with the CSRF header; return status and raw body.
    async fn post_raw(&self, url: &str, body: &impl Serialize) -> Result<(u16, String)> {
        let token = self
            .csrf_token
            .as_deref()
            .ok_or(Error::MissingCsrfToken)?;

        let mut builder = self
            .http
            .post(url)
            .header(CSRF_HEADER, token)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .json(body);
        if let Some(cookies) = self.cookie_header() {
            builder = builder.header(reqwest::header::COOKIE, cookies);
        }

        debug!("POST {}", url);
        let response = builder.send().await.map_err(http_err)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(http_err)?;
        Ok((status, text))
    }

    /// POST JSON and decode a typed 2xx response.
    async fn post_json<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &impl Serialize,
    ) -> Result<T> {
        let (status, text) = self.post_raw(url, body).await?;
        if !(200..300).contains(&status) {
            return Err(server_error(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }

    /// GET and decode a typed 2xx response.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let mut builder = self.http.get(url);
        if let Some(cookies) = self.cookie_header() {
            builder = builder.header(reqwest::header::COOKIE, cookies);
        }

        debug!("GET {}", url);
        let response = builder.send().await.map_err(http_err)?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(http_err)?;
        if !(200..300).contains(&status) {
            return Err(server_error(status, &text));
        }
        Ok(serde_json::from_str(&text)?)
    }
}

/// Map the raw search response onto the outcome enum.
///
/// A rejected search is reported on the error log channel here, so every
/// caller gets the diagnostic without owning it.
fn interpret_search_response(response: SearchResponse) -> SearchOutcome {
    if response.status == "success" {
        match response.room_id {
            Some(room_id) if !room_id.is_empty() => {
                debug!("room id: {}", room_id);
                SearchOutcome::Matched { room_id }
            }
            _ => SearchOutcome::NoRoomFound,
        }
    } else {
        error!(
            "search rejected: {}",
            response.message.as_deref().unwrap_or("unknown error")
        );
        SearchOutcome::Rejected {
            message: response.message,
        }
    }
}

fn http_err(err: reqwest::Error) -> Error {
    Error::Http(err.to_string())
}

/// Error for a non-2xx reply, keeping the server's message when the body
/// carries one (`{"message": ...}` or `{"error": ...}`).
fn server_error(status: u16, body: &str) -> Error {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(|m| m.as_str())
                .map(|m| m.to_string())
        });

    match message {
        Some(m) => Error::Server(m),
        None => Error::UnexpectedStatus(status),
    }
}

/// Pull the integer out of a `<span ...>N</span>` body (plain numbers pass
/// through unchanged).
fn parse_count_span(body: &str) -> Option<u64> {
    let text = match (body.find('>'), body.rfind('<')) {
        (Some(start), Some(end)) if start < end => &body[start + 1..end],
        _ => body,
    };
    text.trim().parse().ok()
}
