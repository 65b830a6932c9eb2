//! HTTP server: warp routes, error mapping, bind and serve.
//!
//! Routes:
//!
//! | Method | Path          | Success                               |
//! |--------|---------------|---------------------------------------|
//! | GET    | `/api/config` | 200, the stored document (`{}` if none) |
//! | POST   | `/api/config` | 200, `{"status":"success"}`           |
//! | GET    | `/api/health` | 200, `{"status":"ok"}`                    |
//!
//! Every failure answers with a JSON body `{"error": "..."}`:
//!
//! | Failure                         | Status |
//! |---------------------------------|--------|
//! | body not JSON / not an object   | 400    |
//! | unknown path                    | 404    |
//! | wrong method                    | 405    |
//! | no `Content-Length`             | 411    |
//! | body above the configured limit | 413    |
//! | store read/write failure        | 500    |
//!
//! Each request runs in its own Tokio task (warp/hyper spawn them); the store
//! serializes writers.

use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;
use tracing::{error, info, warn};
use warp::http::StatusCode;
use warp::hyper::body::Bytes;
use warp::{Filter, Rejection, Reply};

use crate::application::{ConfigService, ServiceError};
use crate::domain::ServerConfig;
use crate::infrastructure::store::JsonFileStore;

// ── Response bodies ───────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct StatusBody {
    status: &'static str,
}

fn error_reply(status: StatusCode, message: impl Into<String>) -> warp::reply::Response {
    warp::reply::with_status(
        warp::reply::json(&ErrorBody {
            error: message.into(),
        }),
        status,
    )
    .into_response()
}

// ── Routes ────────────────────────────────────────────────────────────────────

/// Builds the complete route tree for `service`.
///
/// The returned filter never rejects: every rejection is turned into a JSON
/// error reply by [`handle_rejection`].
pub fn routes(
    service: Arc<ConfigService>,
    max_body_bytes: u64,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let get_config = warp::path!("api" / "config")
        .and(warp::get())
        .and(with_service(Arc::clone(&service)))
        .and_then(handle_get_config);

    let post_config = warp::path!("api" / "config")
        .and(warp::post())
        .and(warp::body::content_length_limit(max_body_bytes))
        .and(warp::body::bytes())
        .and(with_service(service))
        .and_then(handle_post_config);

    let health = warp::path!("api" / "health")
        .and(warp::get())
        .map(handle_health);

    get_config
        .or(post_config)
        .or(health)
        .recover(handle_rejection)
        .with(warp::trace::request())
}

/// Injects the shared service into a handler.
fn with_service(
    service: Arc<ConfigService>,
) -> impl Filter<Extract = (Arc<ConfigService>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&service))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

async fn handle_get_config(
    service: Arc<ConfigService>,
) -> Result<warp::reply::Response, Rejection> {
    match service.get_document().await {
        Ok(document) => Ok(warp::reply::json(&document).into_response()),
        Err(e) => {
            error!("failed to load configuration: {e}");
            Ok(error_reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to load configuration",
            ))
        }
    }
}

async fn handle_post_config(
    body: Bytes,
    service: Arc<ConfigService>,
) -> Result<warp::reply::Response, Rejection> {
    match service.replace_document(&body).await {
        Ok(()) => Ok(warp::reply::json(&StatusBody { status: "success" }).into_response()),
        Err(e) => {
            let status = status_for(&e);
            if status.is_server_error() {
                error!("failed to save configuration: {e}");
            } else {
                warn!("rejected configuration document: {e}");
            }
            Ok(error_reply(status, e.to_string()))
        }
    }
}

fn handle_health() -> warp::reply::Json {
    warp::reply::json(&StatusBody { status: "ok" })
}

/// Maps a service error onto an HTTP status.
fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::MalformedJson(_) | ServiceError::NotAnObject(_) => StatusCode::BAD_REQUEST,
        ServiceError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

async fn handle_rejection(err: Rejection) -> Result<warp::reply::Response, Infallible> {
    let reply = if err.is_not_found() {
        error_reply(StatusCode::NOT_FOUND, "not found")
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        error_reply(StatusCode::PAYLOAD_TOO_LARGE, "request body too large")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        error_reply(StatusCode::LENGTH_REQUIRED, "content-length required")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        error_reply(StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
    } else {
        error!("unhandled rejection: {err:?}");
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    };
    Ok(reply)
}

// ── Serving ───────────────────────────────────────────────────────────────────

/// Binds the server and returns the bound address plus the future that
/// serves requests until `shutdown` completes.
///
/// Useful when `config.bind_addr` uses port `0`: the caller learns the real
/// port before spawning the server future.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, no
/// permission).
pub fn bind_server<S>(
    config: ServerConfig,
    shutdown: S,
) -> anyhow::Result<(SocketAddr, impl Future<Output = ()>)>
where
    S: Future<Output = ()> + Send + 'static,
{
    let store = Arc::new(JsonFileStore::new(config.data_file.clone()));
    let service = Arc::new(ConfigService::new(store));
    let api = routes(service, config.max_body_bytes);

    let (addr, server) = warp::serve(api)
        .try_bind_with_graceful_shutdown(config.bind_addr, shutdown)
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;

    info!(
        "config server listening on {addr}, data file {}",
        config.data_file.display()
    );
    Ok((addr, server))
}

/// Runs the server until `shutdown` completes.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound.
pub async fn run_server<S>(config: ServerConfig, shutdown: S) -> anyhow::Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let (_addr, server) = bind_server(config, shutdown)?;
    server.await;
    info!("config server stopped");
    Ok(())
}
