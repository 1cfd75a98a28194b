#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use roster_core::{CapacityPolicy, RosterManager, RosterStore};
use roster_server::{build_router, AppState};
use tower::ServiceExt;

/// Router over a freshly seeded store; every test gets its own roster.
pub fn app() -> Router {
    app_with(RosterStore::seeded(), CapacityPolicy::Unchecked)
}

pub fn app_with(store: RosterStore, policy: CapacityPolicy) -> Router {
    build_router(AppState {
        manager: RosterManager::with_policy(Arc::new(store), policy),
        static_dir: None,
    })
}

pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json")
}

pub async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    (status, read_json(response).await)
}

pub async fn activities(app: &Router) -> serde_json::Value {
    let (status, body) = send(app, "GET", "/activities").await;
    assert_eq!(status, StatusCode::OK);
    body
}

pub fn signup_uri(activity: &str, email: &str) -> String {
    format!("/activities/{}/signup?email={email}", activity.replace(' ', "%20"))
}

pub fn unregister_uri(activity: &str, email: &str) -> String {
    format!("/activities/{}/unregister?email={email}", activity.replace(' ', "%20"))
}

pub fn participants(activity: &serde_json::Value) -> Vec<String> {
    activity["participants"]
        .as_array()
        .expect("participants array")
        .iter()
        .map(|p| p.as_str().expect("email string").to_string())
        .collect()
}
