//! [`HttpSend`] implementation backed by [`reqwest`].
//!
//! The client never retries on its own: a transport failure is surfaced to
//! the caller as-is. Configure timeouts on the [`reqwest::Client`] you pass
//! in if you want them.

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use ptvsign_core::{Error, HttpSend, Result};
use reqwest::{Client, Request};

/// HttpSend implementation using a shared [`reqwest::Client`].
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend from a user-built client.
    ///
    /// ```no_run
    /// use ptvsign_http_send_reqwest::ReqwestHttpSend;
    /// use std::time::Duration;
    ///
    /// let client = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .expect("client must build");
    /// let http = ReqwestHttpSend::new(client);
    /// ```
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req)
            .map_err(|e| Error::transport_failed("failed to build outgoing request").with_source(e))?;
        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| Error::transport_failed("failed to send request").with_source(e))?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| Error::transport_failed("failed to read response body").with_source(e))?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
