#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use larder::config::{Config, DatabaseConfig, ObservabilityConfig, ServerConfig, ShoppingConfig};
use serde_json::Value;
use tower::ServiceExt;

pub fn test_config(url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: url.to_owned(),
            max_connections: 1,
        },
        observability: ObservabilityConfig::default(),
        shopping: ShoppingConfig::default(),
    }
}

/// Router backed by a migrated SQLite file inside `dir`.
pub async fn setup_app(dir: &temp_dir::TempDir) -> anyhow::Result<Router> {
    let url = format!("sqlite:{}", dir.child("larder.sqlite3").display());
    let pool = larder::db::create_pool(&url, 1).await?;
    larder_db::migrate(&pool).await?;

    let state = larder::AppState::new(test_config(&url), larder_shared::State::single(pool));

    Ok(larder::router(state))
}

/// Send one request and decode the JSON body, `Value::Null` when empty.
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, json))
}

/// Send a raw body and return the response as text, for non JSON payloads.
pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    user: Option<&str>,
    content_type: Option<&str>,
    body: &str,
) -> anyhow::Result<(StatusCode, HeaderMap, String)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user) = user {
        builder = builder.header("X-User-Id", user);
    }
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }

    let response = app
        .clone()
        .oneshot(builder.body(Body::from(body.to_owned()))?)
        .await?;
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await?.to_bytes();

    Ok((status, headers, String::from_utf8(bytes.to_vec())?))
}
