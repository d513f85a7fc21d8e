#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use dsmovie_api::auth::jwt::{generate_access_token, JwtConfig};
use dsmovie_api::auth::password::hash_password;
use dsmovie_api::config::ServerConfig;
use dsmovie_api::router::build_app_router;
use dsmovie_api::state::AppState;
use dsmovie_db::models::movie::{Movie, MovieInput};
use dsmovie_db::models::user::CreateUser;
use dsmovie_db::repositories::{MovieRepo, RoleRepo, UserRepo};

pub const TEST_PASSWORD: &str = "123456";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router, with the production middleware
/// stack, over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState::new(pool, test_config()))
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user holding `authorities` with password [`TEST_PASSWORD`].
pub async fn create_user(pool: &PgPool, username: &str, authorities: &[&str]) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        },
    )
    .await
    .expect("user creation should succeed");

    for authority in authorities {
        let role = RoleRepo::find_by_authority(pool, authority)
            .await
            .unwrap()
            .expect("role should be seeded");
        UserRepo::add_role(pool, user.id, role.id).await.unwrap();
    }
    user.id
}

/// Insert a movie in the seeded genre 1.
pub async fn create_movie(pool: &PgPool, title: &str) -> Movie {
    MovieRepo::create(pool, &movie_input(title))
        .await
        .expect("movie creation should succeed")
}

pub fn movie_input(title: &str) -> MovieInput {
    MovieInput {
        title: title.to_string(),
        score: 0.0,
        count: 0,
        image: "https://img.example.com/poster.jpg".to_string(),
        genre_id: 1,
    }
}

/// Mint a token directly, bypassing login.
pub fn token_for(username: &str, authorities: &[&str]) -> String {
    generate_access_token(username, authorities, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
