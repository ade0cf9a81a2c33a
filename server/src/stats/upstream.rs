//! Access to the two stores the aggregator reads from.
//!
//! # Design
//! `Upstream` is the seam handlers depend on. `HttpUpstream` builds requests
//! with the core store clients, executes them with reqwest and hands the
//! response back to the same client for parsing.
//!
//! Only what the summary needs is decoded: each todo's `done` flag and the
//! number of users. A record missing other fields still counts.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use taskboard_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, TodoStatus, TodoStoreClient, UserStoreClient,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn fetch_todos(&self) -> Result<Vec<TodoStatus>, UpstreamError>;

    async fn count_users(&self) -> Result<usize, UpstreamError>;
}

pub struct HttpUpstream {
    http: reqwest::Client,
    todos: TodoStoreClient,
    users: UserStoreClient,
}

impl HttpUpstream {
    pub fn new(
        todo_service_url: &str,
        user_service_url: &str,
        timeout: Duration,
    ) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            todos: TodoStoreClient::new(todo_service_url),
            users: UserStoreClient::new(user_service_url),
        })
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, reqwest::Error> {
        let method = match req.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.http.request(method, &req.path);
        for (name, value) in &req.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = req.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn fetch_todos(&self) -> Result<Vec<TodoStatus>, UpstreamError> {
        let response = self.execute(self.todos.build_list_todos()).await?;
        Ok(self.todos.parse_todo_statuses(response)?)
    }

    async fn count_users(&self) -> Result<usize, UpstreamError> {
        let response = self.execute(self.users.build_list_users()).await?;
        Ok(self.users.parse_user_count(response)?)
    }
}
