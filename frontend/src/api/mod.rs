//! REST client for the data quality backend.
//!
//! Each submodule covers one resource and maps a domain operation onto one
//! HTTP request. Reads go through the shared [`QueryCache`]; every successful
//! mutation invalidates the cache entries it affects so the next read hits the
//! server again. There is no retry, timeout or offline handling: any non-2xx
//! answer or transport failure comes back as an [`ApiError`].

use std::cell::RefCell;
use std::rc::Rc;

use common::cache::{QueryCache, QueryKey};
use common::config::ConsoleSettings;
use common::endpoints;
use common::error::ApiErrorBody;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

pub mod clients;
pub mod field_definitions;
pub mod file_definitions;
pub mod record_match_criteria;
pub mod reference;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("server answered {status}: {}", .body.message)]
    Status { status: u16, body: ApiErrorBody },
}

impl ApiError {
    /// Individual messages the server sent back, if any.
    pub fn messages(&self) -> Vec<String> {
        match self {
            ApiError::Status { body, .. } => body.messages(),
            ApiError::Transport(_) => Vec::new(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Handle shared by every screen. Cloning is cheap and all clones share one
/// cache.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: Rc<str>,
    cache: Rc<RefCell<QueryCache>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cache, &other.cache) && self.base_url == other.base_url
    }
}

#[derive(Clone, Copy)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl ApiClient {
    pub fn new(settings: &ConsoleSettings) -> Self {
        Self {
            base_url: Rc::from(settings.api_base_url.as_str()),
            cache: Rc::new(RefCell::new(QueryCache::new())),
        }
    }

    fn url(&self, path: &str) -> String {
        endpoints::join(&self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
    }

    /// Cached GET: answers from the cache when possible, otherwise fetches and
    /// stores the body under `key`.
    async fn query<T>(&self, key: QueryKey, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned + Serialize,
    {
        if let Some(hit) = self.cache.borrow().get::<T>(&key) {
            return Ok(hit);
        }
        let value: T = self.get(path).await?;
        self.cache.borrow_mut().put(key, &value);
        Ok(value)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.builder(Method::Get, path).send().await?;
        parse(response).await
    }

    async fn send<B, T>(&self, method: Method, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.builder(method, path).json(body)?.send().await?;
        parse(response).await
    }

    /// Sends a request whose answer body is ignored.
    async fn send_without_answer<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<()> {
        let builder = self.builder(method, path);
        let response = match body {
            Some(body) => builder.json(body)?.send().await?,
            None => builder.send().await?,
        };
        check(response).await.map(|_| ())
    }

    fn remember<T: Serialize>(&self, key: QueryKey, value: &T) {
        self.cache.borrow_mut().put(key, value);
    }

    fn cache_mut(&self) -> std::cell::RefMut<'_, QueryCache> {
        self.cache.borrow_mut()
    }
}

async fn check(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<ApiErrorBody>(&text)
        .unwrap_or_else(|_| ApiErrorBody { message: text });
    Err(ApiError::Status { status, body })
}

async fn parse<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = check(response).await?;
    Ok(response.json::<T>().await?)
}

/// Fetches the runtime settings published by the console host.
pub async fn load_settings() -> ApiResult<ConsoleSettings> {
    let response = Request::get(common::config::CONSOLE_CONFIG_PATH).send().await?;
    parse(response).await
}
