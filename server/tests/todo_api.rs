mod common;

use axum::http::{header, Request, StatusCode};
use common::{body_bytes, body_json, empty_request, json_request};
use taskboard_core::Todo;
use taskboard_server::todo_store::app;
use tower::ServiceExt;

// --- list ---

#[tokio::test]
async fn list_todos_empty() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/list-todo"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todos: Vec<Todo> = body_json(resp).await;
    assert!(todos.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_todo_returns_200_with_assigned_id() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/todo",
            r#"{"id":55,"content":"Buy milk","dueDate":"2024-06-01","done":false}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let todo: Todo = body_json(resp).await;
    assert_eq!(todo.id, 1);
    assert_eq!(todo.content, "Buy milk");
    assert_eq!(todo.due_date.as_deref(), Some("2024-06-01"));
    assert!(!todo.done);
}

#[tokio::test]
async fn create_todo_malformed_json_returns_422() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo", r#"{"not_content":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("content"));
}

#[tokio::test]
async fn create_todo_unparsable_body_returns_json_400() {
    let resp = app()
        .oneshot(json_request("POST", "/api/todo", "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

// --- get ---

#[tokio::test]
async fn get_todo_not_found() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todo/404"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "not found");
}

#[tokio::test]
async fn get_todo_bad_id_returns_400() {
    let resp = app()
        .oneshot(empty_request("GET", "/api/todo/not-a-number"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body["error"].is_string());
}

// --- update / delete on a missing id ---

#[tokio::test]
async fn update_missing_todo_is_a_silent_no_op() {
    let resp = app()
        .oneshot(json_request(
            "PATCH",
            "/api/todo/9",
            r#"{"content":"Nope","done":true}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn delete_missing_todo_returns_200() {
    let resp = app()
        .oneshot(empty_request("DELETE", "/api/todo/9"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn patch_with_null_due_date_clears_it() {
    let app = app();

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/todo",
            r#"{"content":"Renew passport","dueDate":"2024-01-01"}"#,
        ))
        .await
        .unwrap();
    let created: Todo = body_json(resp).await;

    let resp = app
        .clone()
        .oneshot(json_request(
            "PATCH",
            &format!("/api/todo/{}", created.id),
            r#"{"content":"Renew passport","dueDate":null,"done":false}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(empty_request("GET", &format!("/api/todo/{}", created.id)))
        .await
        .unwrap();
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched.due_date, None);
    assert_eq!(fetched.content, "Renew passport");
}

// --- cors ---

#[tokio::test]
async fn preflight_allows_any_origin() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/api/todo/1")
                .header(header::ORIGIN, "http://frontend.local")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn simple_request_carries_cors_header() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/api/list-todo")
                .header(header::ORIGIN, "http://frontend.local")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/todo",
            r#"{"content":"Walk dog","dueDate":"2024-06-02"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let walk: Todo = body_json(resp).await;

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/todo", r#"{"content":"Water plants"}"#))
        .await
        .unwrap();
    let water: Todo = body_json(resp).await;
    assert_eq!(water.id, walk.id + 1);

    // patch only done
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/api/todo/{}", walk.id),
            r#"{"done":true}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // get reflects the patch, other fields untouched
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/todo/{}", walk.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Todo = body_json(resp).await;
    assert_eq!(fetched.content, "Walk dog");
    assert_eq!(fetched.due_date.as_deref(), Some("2024-06-02"));
    assert!(fetched.done);

    // patch a missing id leaves the list unchanged
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", "/api/todo/999", r#"{"content":"ghost"}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/list-todo"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, vec![fetched.clone(), water.clone()]);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("DELETE", &format!("/api/todo/{}", walk.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    // get after delete is 404
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", &format!("/api/todo/{}", walk.id)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // list after delete holds only the second todo
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/list-todo"))
        .await
        .unwrap();
    let todos: Vec<Todo> = body_json(resp).await;
    assert_eq!(todos, vec![water]);
}
