use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Basic},
};
use ledger::{AuditCursor, Ledger};

use crate::{audit, documents, entries, payables, search, summary};

/// Everything the server needs besides a listener.
pub struct ServerConfig {
    pub ledger: Ledger,
    /// The club's shared secret; the only credential there is.
    pub secret: String,
    /// Funding-request template on disk.
    pub template_path: PathBuf,
}

#[derive(Clone)]
pub struct ServerState {
    pub ledger: Arc<Mutex<Ledger>>,
    pub audit: Arc<Mutex<AuditCursor>>,
    pub secret: Arc<str>,
    pub template_path: Arc<PathBuf>,
}

impl ServerState {
    fn new(config: ServerConfig) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(config.ledger)),
            audit: Arc::new(Mutex::new(AuditCursor::new())),
            secret: config.secret.into(),
            template_path: Arc::new(config.template_path),
        }
    }
}

/// Locks a state mutex, recovering the data from a poisoned lock.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Constant-time comparison of the presented password against the
/// shared secret; folds over the longer of the two so there is no
/// early exit.
fn secret_matches(candidate: &str, secret: &str) -> bool {
    let a = candidate.as_bytes();
    let b = secret.as_bytes();
    let mut diff = a.len() ^ b.len();
    for i in 0..a.len().max(b.len()) {
        let x = a.get(i).copied().unwrap_or(0);
        let y = b.get(i).copied().unwrap_or(0);
        diff |= usize::from(x ^ y);
    }
    diff == 0
}

/// The access gate: one shared secret for the whole club, carried as
/// the Basic-auth password on every request. The username is ignored
/// (there is no per-user identity), an empty password never matches.
async fn auth(
    auth_header: Option<TypedHeader<Authorization<Basic>>>,
    State(state): State<ServerState>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(auth_header) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };
    if auth_header.password().is_empty() || !secret_matches(auth_header.password(), &state.secret)
    {
        return Err(StatusCode::UNAUTHORIZED);
    }

    Ok(next.run(request).await)
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/summary", get(summary::get))
        .route("/journal", get(summary::journal))
        .route("/entries", post(entries::create))
        .route("/payables", get(payables::list))
        .route("/payables/close", post(payables::close))
        .route("/audit", get(audit::state))
        .route("/audit/verdict", post(audit::verdict))
        .route("/audit/export", get(audit::export))
        .route("/search", get(search::get))
        .route("/documents/funding-request", post(documents::funding_request))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth))
        .with_state(state)
}

pub async fn run_with_listener(
    config: ServerConfig,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(ServerState::new(config))).await
}

pub fn spawn_with_listener(
    config: ServerConfig,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(config, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
