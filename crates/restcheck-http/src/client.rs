//! Thin blocking HTTP client over a pooled reqwest session.

use std::time::Duration;

use restcheck_config::Settings;
use serde::Serialize;

use crate::error::Result;
use crate::response::ApiResponse;

/// Query parameters as string pairs.
pub type Params<'a> = &'a [(&'a str, &'a str)];
/// Extra request headers as string pairs.
pub type Headers<'a> = &'a [(&'a str, &'a str)];

/// A blocking HTTP client with a shared connection pool and a uniform
/// per-request timeout.
///
/// This layer is a pass-through: no retry and no error classification happen
/// here. Transport faults (connect errors, timeouts) surface as
/// [`HttpError`](crate::HttpError); any HTTP status, including 4xx and 5xx,
/// comes back as a normal [`ApiResponse`].
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Creates a client using the configured uniform timeout.
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_timeout(settings.api_timeout)
    }

    /// Creates a client with an explicit per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self { inner })
    }

    /// Sends a GET request.
    pub fn get(&self, url: &str, params: Params<'_>, headers: Headers<'_>) -> Result<ApiResponse> {
        tracing::info!(method = "GET", url, "sending request");
        let mut request = self.inner.get(url).query(params);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        self.finish(request)
    }

    /// Sends a POST request with an optional JSON body.
    pub fn post<B: Serialize>(
        &self,
        url: &str,
        json: Option<&B>,
        headers: Headers<'_>,
    ) -> Result<ApiResponse> {
        tracing::info!(method = "POST", url, "sending request");
        let mut request = self.inner.post(url);
        if let Some(body) = json {
            request = request.json(body);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        self.finish(request)
    }

    /// Sends a PUT request with an optional JSON body.
    pub fn put<B: Serialize>(
        &self,
        url: &str,
        json: Option<&B>,
        headers: Headers<'_>,
    ) -> Result<ApiResponse> {
        tracing::info!(method = "PUT", url, "sending request");
        let mut request = self.inner.put(url);
        if let Some(body) = json {
            request = request.json(body);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        self.finish(request)
    }

    /// Sends a PATCH request with an optional JSON body.
    pub fn patch<B: Serialize>(
        &self,
        url: &str,
        json: Option<&B>,
        headers: Headers<'_>,
    ) -> Result<ApiResponse> {
        tracing::info!(method = "PATCH", url, "sending request");
        let mut request = self.inner.patch(url);
        if let Some(body) = json {
            request = request.json(body);
        }
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        self.finish(request)
    }

    /// Sends a DELETE request.
    pub fn delete(&self, url: &str, headers: Headers<'_>) -> Result<ApiResponse> {
        tracing::info!(method = "DELETE", url, "sending request");
        let mut request = self.inner.delete(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }
        self.finish(request)
    }

    fn finish(&self, request: reqwest::blocking::RequestBuilder) -> Result<ApiResponse> {
        let response = request.send()?;
        let response = ApiResponse::from_reqwest(response)?;
        tracing::info!(status = response.status_code(), "response received");
        Ok(response)
    }
}
