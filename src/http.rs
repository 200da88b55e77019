//! Thin client over `gloo-net` for the finance API.
//!
//! The token is captured when the client is built from the current session, so every
//! call reads the session as it was when the call was issued. Requests without a token
//! are still sent; the server decides whether to reject them.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::config::API_BASE_URL;
use crate::error::ApiError;

#[derive(Clone, Debug, PartialEq)]
pub struct HttpClient {
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(API_BASE_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// Token the client sends, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Value of the `Authorization` header, if the session has a token.
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");
        let resp = self.authorize(Request::get(&url)).send().await?;
        read_json(resp).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let resp = self.send_json(path, body).await?;
        read_json(resp).await
    }

    /// Posts `body` and only checks the status; the response body is ignored.
    pub async fn post_json_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let resp = self.send_json(path, body).await?;
        check_status(&resp)
    }

    /// Posts a multipart body. The browser fills in the boundary header.
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: FormData,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST multipart");
        let resp = self.authorize(Request::post(&url)).body(form)?.send().await?;
        read_json(resp).await
    }

    async fn send_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");
        let resp = self.authorize(Request::post(&url)).json(body)?.send().await?;
        Ok(resp)
    }
}

fn check_status(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        let err = ApiError::from_status(resp.status());
        tracing::warn!(url = %resp.url(), status = resp.status(), "request rejected");
        Err(err)
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    check_status(&resp)?;
    Ok(resp.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_header_only_with_token() {
        let client = HttpClient::with_base_url("/api/", Some("abc".to_string()));
        assert_eq!(client.authorization().as_deref(), Some("Bearer abc"));
        assert_eq!(client.url("/income"), "/api/income");

        let anonymous = HttpClient::with_base_url("/api", None);
        assert_eq!(anonymous.authorization(), None);
    }

    #[test]
    fn empty_token_counts_as_absent() {
        let client = HttpClient::with_base_url("/api", Some(String::new()));
        assert_eq!(client.authorization(), None);
    }
}
