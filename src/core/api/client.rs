//! Blocking HTTP client for the GitHub REST API.
//!
//! Every request goes through [`Client::send`], which applies the fixed
//! header set, the redirect and not-found policies and the post-write pause.
//! Any status other than the tolerated ones is an error; there is no retry.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client as HttpClient;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use crate::core::config::Config;
use crate::core::constants;
use crate::error::{ApiError, ConfigError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP methods the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }

    /// Whether the request changes state on the server.
    pub fn is_mutating(self) -> bool {
        !matches!(self, Method::Get)
    }

    fn to_reqwest(self) -> reqwest::Method {
        match self {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// How a GET treats redirects and missing resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Follow 3xx answers. When false, a redirect counts as "no answer".
    /// Transferred or renamed resources answer with a redirect.
    pub follow_redirects: bool,
    /// Treat 404 as "no answer" instead of an error. Used for existence checks.
    pub allow_not_found: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            follow_redirects: true,
            allow_not_found: false,
        }
    }
}

impl ReadOptions {
    /// Options for an existence check: a 404 yields `None`.
    pub fn allow_not_found() -> Self {
        Self {
            allow_not_found: true,
            ..Self::default()
        }
    }

    /// Options that never follow a redirect.
    pub fn no_redirects() -> Self {
        Self {
            follow_redirects: false,
            ..Self::default()
        }
    }
}

/// GitHub REST client.
pub struct Client {
    http: HttpClient,
    no_redirect: HttpClient,
    mutation_delay: Duration,
}

impl Client {
    /// Create a client carrying the token from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidToken` if the token cannot be sent as a
    /// header, or `ApiError::Build` if the TLS backend fails to initialise.
    pub fn new(config: &Config) -> Result<Self> {
        let headers = default_headers(config.token())?;

        let build = |policy: Policy| {
            HttpClient::builder()
                .default_headers(headers.clone())
                .user_agent(constants::USER_AGENT)
                .timeout(REQUEST_TIMEOUT)
                .connect_timeout(CONNECT_TIMEOUT)
                .redirect(policy)
                .build()
                .map_err(ApiError::Build)
        };

        Ok(Self {
            http: build(Policy::default())?,
            no_redirect: build(Policy::none())?,
            mutation_delay: config.mutation_delay(),
        })
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Returns `Ok(None)` for an empty body, for a 404 when
    /// `options.allow_not_found` is set, and for a redirect when
    /// `options.follow_redirects` is unset.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, any other non-2xx status, or
    /// a body that does not decode as `T`.
    pub fn get<T: DeserializeOwned>(&self, url: &str, options: ReadOptions) -> Result<Option<T>> {
        self.send(Method::Get, url, None::<&()>, options)
    }

    /// POST a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx status.
    pub fn post<B, T>(&self, url: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::Post, url, Some(body), ReadOptions::default())
    }

    /// PATCH a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx status.
    pub fn patch<B, T>(&self, url: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::Patch, url, Some(body), ReadOptions::default())
    }

    /// PUT a JSON body, creating or replacing the resource.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx status.
    pub fn put<B, T>(&self, url: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(Method::Put, url, Some(body), ReadOptions::default())
    }

    /// DELETE a resource.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a non-2xx status.
    pub fn delete(&self, url: &str) -> Result<()> {
        self.send::<(), serde::de::IgnoredAny>(Method::Delete, url, None, ReadOptions::default())?;
        Ok(())
    }

    fn send<B, T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        options: ReadOptions,
    ) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let http = if options.follow_redirects {
            &self.http
        } else {
            &self.no_redirect
        };

        let mut request = http.request(method.to_reqwest(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        debug!(method = method.as_str(), url, "sending request");
        let response = request.send().map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;

        if method.is_mutating() {
            thread::sleep(self.mutation_delay);
        }

        let status = response.status();
        debug!(status = status.as_u16(), url, "response received");

        if status.is_redirection() && !options.follow_redirects {
            debug!(url, "redirect not followed");
            return Ok(None);
        }

        if status == StatusCode::NOT_FOUND && options.allow_not_found {
            debug!(url, "resource not found");
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            if status == StatusCode::UNPROCESSABLE_ENTITY {
                error!(url, body = %body, "API responded with validation failed");
            }
            return Err(ApiError::Status {
                method: method.as_str(),
                url: url.to_string(),
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response.text().map_err(|source| ApiError::Request {
            url: url.to_string(),
            source,
        })?;

        if text.trim().is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&text).map(Some).map_err(|source| {
            ApiError::Decode {
                url: url.to_string(),
                source,
            }
            .into()
        })
    }
}

fn default_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static(constants::ACCEPT));
    headers.insert(
        constants::API_VERSION_HEADER,
        HeaderValue::from_static(constants::API_VERSION),
    );

    let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
        .map_err(|_| ConfigError::InvalidToken(constants::TOKEN_ENV))?;
    auth.set_sensitive(true);
    headers.insert(header::AUTHORIZATION, auth);

    Ok(headers)
}
