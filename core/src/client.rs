//! Stateless HTTP request builders and response parsers for the two stores.
//!
//! # Design
//! `TodoStoreClient` and `UserStoreClient` hold only a `base_url` and carry
//! no mutable state between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. The caller executes the HTTP round-trip.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use url::Url;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, NewUser, Todo, TodoPatch, TodoStatus, User, UserPatch};

/// Client for the todo store API.
#[derive(Debug, Clone)]
pub struct TodoStoreClient {
    base_url: String,
}

impl TodoStoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    pub fn build_list_todos(&self) -> HttpRequest {
        bare_request(HttpMethod::Get, format!("{}/api/list-todo", self.base_url))
    }

    pub fn build_get_todo(&self, id: u64) -> HttpRequest {
        bare_request(HttpMethod::Get, format!("{}/api/todo/{id}", self.base_url))
    }

    pub fn build_create_todo(&self, input: &NewTodo) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, format!("{}/api/todo", self.base_url), input)
    }

    pub fn build_update_todo(&self, id: u64, input: &TodoPatch) -> Result<HttpRequest, ApiError> {
        json_request(
            HttpMethod::Patch,
            format!("{}/api/todo/{id}", self.base_url),
            input,
        )
    }

    pub fn build_delete_todo(&self, id: u64) -> HttpRequest {
        bare_request(HttpMethod::Delete, format!("{}/api/todo/{id}", self.base_url))
    }

    pub fn parse_list_todos(&self, response: HttpResponse) -> Result<Vec<Todo>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    /// Reads a list response keeping only each row's `done` flag.
    pub fn parse_todo_statuses(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<TodoStatus>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_get_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    /// The todo store answers a create with 200, not 201.
    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    /// Succeeds whether or not the todo existed; the store does not report a
    /// missing id on update.
    pub fn parse_update_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }

    pub fn parse_delete_todo(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)
    }
}

/// Client for the user store API.
#[derive(Debug, Clone)]
pub struct UserStoreClient {
    base_url: String,
}

impl UserStoreClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base(base_url),
        }
    }

    pub fn build_list_users(&self) -> HttpRequest {
        bare_request(HttpMethod::Get, format!("{}/api/users", self.base_url))
    }

    pub fn build_get_user(&self, id: u64) -> HttpRequest {
        bare_request(HttpMethod::Get, format!("{}/api/user/{id}", self.base_url))
    }

    /// Usernames are free text, so the segment is percent-encoded.
    pub fn build_get_user_by_username(&self, username: &str) -> Result<HttpRequest, ApiError> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "user", "username", username]);
        Ok(bare_request(HttpMethod::Get, url.to_string()))
    }

    pub fn build_create_user(&self, input: &NewUser) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, format!("{}/api/user", self.base_url), input)
    }

    pub fn build_update_user(&self, id: u64, input: &UserPatch) -> Result<HttpRequest, ApiError> {
        json_request(
            HttpMethod::Patch,
            format!("{}/api/user/{id}", self.base_url),
            input,
        )
    }

    pub fn build_delete_user(&self, id: u64) -> HttpRequest {
        bare_request(HttpMethod::Delete, format!("{}/api/user/{id}", self.base_url))
    }

    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<User>, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    /// Counts the rows of a list response without decoding them.
    pub fn parse_user_count(&self, response: HttpResponse) -> Result<usize, ApiError> {
        check_status(&response, 200)?;
        decode::<Vec<IgnoredAny>>(&response).map(|rows| rows.len())
    }

    pub fn parse_get_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_create_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 201)?;
        decode(&response)
    }

    pub fn parse_update_user(&self, response: HttpResponse) -> Result<User, ApiError> {
        check_status(&response, 200)?;
        decode(&response)
    }

    pub fn parse_delete_user(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)
    }
}

fn normalize_base(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}

fn bare_request(method: HttpMethod, path: String) -> HttpRequest {
    HttpRequest {
        method,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn json_request<T: Serialize>(
    method: HttpMethod,
    path: String,
    input: &T,
) -> Result<HttpRequest, ApiError> {
    let body =
        serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

/// Map unexpected status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    match response.status {
        status if status == expected => Ok(()),
        404 => Err(ApiError::NotFound),
        409 => Err(ApiError::Conflict(response.body.clone())),
        status => Err(ApiError::HttpError {
            status,
            body: response.body.clone(),
        }),
    }
}
