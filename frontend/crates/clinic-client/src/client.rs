use crate::{AuthApi, ClientError, ClientResult, DirectoryApi, LoginResponse};

use clinic_core::{Candidate, Credential, DirectoryKind, Identity};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Method, StatusCode, Url};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

const LOGIN_PATH: &str = "/auth/login";
const ME_PATH: &str = "/auth/me";
const STAFF_SEARCH_PATH: &str = "/staff/search";
const USER_SEARCH_PATH: &str = "/users/search";

/// Directory endpoints answer with either a bare array or `{"data": [...]}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CandidateList {
    Bare(Vec<Candidate>),
    Wrapped { data: Vec<Candidate> },
}

impl CandidateList {
    fn into_vec(self) -> Vec<Candidate> {
        match self {
            Self::Bare(candidates) | Self::Wrapped { data: candidates } => candidates,
        }
    }
}

/// HTTP client for the clinic REST API
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "http://127.0.0.1:3000/api")
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    /// Absolute URL for an API path
    fn url(&self, path: &str) -> ClientResult<Url> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ClientError::invalid_url(raw, e.to_string()))
    }

    /// Build a request with an optional bearer credential
    fn request(
        &self,
        method: Method,
        url: Url,
        credential: Option<&Credential>,
    ) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, url);

        if let Some(credential) = credential {
            req = req.bearer_auth(credential.expose());
        }

        req
    }

    /// Execute request, map failure statuses and decode the body
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_from_body(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Translate an error response into a `ClientError`.
    ///
    /// 401 and 403 are authentication failures; everything else is an API error
    /// carrying whatever code/message the body provides.
    fn error_from_body(status: StatusCode, body: &str) -> ClientError {
        let parsed: Value = serde_json::from_str(body).unwrap_or(Value::Null);
        let error = parsed.get("error");

        let message = error
            .and_then(|e| e.get("message"))
            .or_else(|| parsed.get("message"))
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return ClientError::unauthorized(status.as_u16(), message);
        }

        let code = error
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("UNKNOWN");

        ClientError::api_error(status.as_u16(), code, message)
    }

    /// Search URL for a directory kind, with the query string encoded
    fn search_url(&self, kind: DirectoryKind, query: &str) -> ClientResult<Url> {
        let mut url = match kind.staff_role() {
            Some(_) => self.url(STAFF_SEARCH_PATH)?,
            None => self.url(USER_SEARCH_PATH)?,
        };

        {
            let mut pairs = url.query_pairs_mut();
            if let Some(role) = kind.staff_role() {
                pairs.append_pair("role", role);
            }
            pairs.append_pair("q", query);
        }

        Ok(url)
    }
}

#[async_trait]
impl AuthApi for Client {
    async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        #[derive(Serialize)]
        struct LoginRequest<'a> {
            username: &'a str,
            password: &'a str,
        }

        let body = LoginRequest { username, password };
        let req = self
            .request(Method::POST, self.url(LOGIN_PATH)?, None)
            .json(&body);
        self.execute(req).await
    }

    async fn me(&self, credential: &Credential) -> ClientResult<Identity> {
        let req = self.request(Method::GET, self.url(ME_PATH)?, Some(credential));
        self.execute(req).await
    }
}

#[async_trait]
impl DirectoryApi for Client {
    async fn search(
        &self,
        kind: DirectoryKind,
        query: &str,
        credential: Option<&Credential>,
    ) -> ClientResult<Vec<Candidate>> {
        let url = self.search_url(kind, query)?;
        debug!("Directory search {kind}: {url}");

        let req = self.request(Method::GET, url, credential);
        let list: CandidateList = self.execute(req).await?;
        Ok(list.into_vec())
    }
}

#[cfg(test)]
impl Client {
    pub(crate) fn search_url_for_test(&self, kind: DirectoryKind, query: &str) -> ClientResult<Url> {
        self.search_url(kind, query)
    }

    pub(crate) fn error_for_test(status: u16, body: &str) -> ClientError {
        Self::error_from_body(
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
    }
}
