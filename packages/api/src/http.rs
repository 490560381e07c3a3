//! [`HttpClient`] over `reqwest`. On WASM `reqwest` delegates to the browser's
//! `fetch`, natively it uses its own connection pool.

use crate::error::FetchError;
use crate::fetch::HttpClient;
use crate::request::{Method, RequestOptions, Response};

#[derive(Clone, Debug, Default)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    base_url: Option<String>,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative URLs (e.g. `"/get_reports"`) against `base_url`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    fn resolve(&self, url: &str) -> String {
        match &self.base_url {
            Some(base) if !url.contains("://") => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url.to_string(),
        }
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

impl HttpClient for ReqwestClient {
    async fn send(&self, url: &str, options: RequestOptions) -> Result<Response, FetchError> {
        let url = self.resolve(url);
        tracing::debug!("{} {}", options.method.as_str(), url);

        let mut builder = self.inner.request(reqwest_method(options.method), &url);
        for (name, value) in &options.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = options.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?
            .to_vec();

        Ok(Response {
            status,
            headers,
            body,
        })
    }
}
