// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

mod session;

use axum::{
    Json, Router,
    extract::{State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use roster_sim_api::{
    ApiError, CatalogResponse, CreateSessionResponse, DEFAULT_MAX_SESSIONS,
    DEFAULT_SESSION_IDLE_TIMEOUT, FireLastResponse, HireRequest, HireResponse, ReportResponse,
    ResetResponse, RosterResponse, SessionRegistry, fire_last, get_catalog, get_report, hire,
    list_roster, reset,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use crate::session::SessionToken;

/// Roster Simulator Server - HTTP boundary for the staffing simulator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Maximum number of sessions that may be open at once
    #[arg(long, default_value_t = DEFAULT_MAX_SESSIONS)]
    max_sessions: usize,

    /// Seconds a session may go unused before it is reclaimed
    #[arg(long, default_value_t = DEFAULT_SESSION_IDLE_TIMEOUT.as_secs())]
    session_idle_timeout_secs: u64,
}

/// Application state shared across handlers.
///
/// Every session's roster lives in the registry; the Mutex serialises
/// requests so each roster only ever has one writer.
#[derive(Clone)]
pub struct AppState {
    /// Open sessions and the roster each one owns.
    sessions: Arc<Mutex<SessionRegistry>>,
}

impl AppState {
    fn new(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(SessionRegistry::new(
                max_sessions,
                idle_timeout,
            ))),
        }
    }
}

/// API response for ending a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct EndSessionResponse {
    /// Success indicator.
    success: bool,
    /// A success message.
    message: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::NothingToRemove { .. } => StatusCode::CONFLICT,
            ApiError::SessionNotFound => StatusCode::UNAUTHORIZED,
            ApiError::SessionLimitReached { .. } => {
                error!(error = %err, "Refusing new session");
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection, "Rejected malformed request body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid request body: {}", rejection.body_text()),
        }
    }
}

/// Handler for GET `/catalog` endpoint.
///
/// Returns the days, requirement table and shift pattern catalog.
#[allow(clippy::unused_async)]
async fn handle_get_catalog() -> Json<CatalogResponse> {
    info!("Handling get_catalog request");
    Json(get_catalog())
}

/// Handler for POST `/sessions` endpoint.
///
/// Opens a session with an empty roster.
async fn handle_create_session(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<CreateSessionResponse>, HttpError> {
    info!("Handling create_session request");

    let mut sessions = app_state.sessions.lock().await;
    let session_token: String = sessions.create_session()?;
    let open_sessions: usize = sessions.len();
    drop(sessions);

    info!(open_sessions, "Successfully created session");

    Ok(Json(CreateSessionResponse {
        session_token,
        message: String::from("Session created"),
    }))
}

/// Handler for DELETE `/sessions` endpoint.
///
/// Ends the caller's session and discards its roster.
async fn handle_end_session(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<EndSessionResponse>, HttpError> {
    info!("Handling end_session request");

    let mut sessions = app_state.sessions.lock().await;
    let roster = sessions.end_session(&token)?;
    drop(sessions);

    info!(discarded_employees = roster.size(), "Successfully ended session");

    Ok(Json(EndSessionResponse {
        success: true,
        message: String::from("Session ended"),
    }))
}

/// Handler for POST `/roster/hire` endpoint.
///
/// Hires one employee on the requested shift pattern.
async fn handle_hire(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
    payload: Result<Json<HireRequest>, JsonRejection>,
) -> Result<Json<HireResponse>, HttpError> {
    let Json(req) = payload?;
    info!(pattern = %req.pattern, "Handling hire request");

    let mut sessions = app_state.sessions.lock().await;
    let response: HireResponse = hire(sessions.roster_mut(&token)?, &req)?;
    drop(sessions);

    info!(
        employee_id = response.employee_id,
        all_met = response.report.all_met,
        "Successfully hired employee"
    );

    Ok(Json(response))
}

/// Handler for POST `/roster/fire_last` endpoint.
///
/// Removes the most recently hired employee.
async fn handle_fire_last(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<FireLastResponse>, HttpError> {
    info!("Handling fire_last request");

    let mut sessions = app_state.sessions.lock().await;
    let response: FireLastResponse = fire_last(sessions.roster_mut(&token)?)?;
    drop(sessions);

    info!(
        employee_id = response.employee_id,
        all_met = response.report.all_met,
        "Successfully fired employee"
    );

    Ok(Json(response))
}

/// Handler for POST `/roster/reset` endpoint.
///
/// Clears the session's roster.
async fn handle_reset(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<ResetResponse>, HttpError> {
    info!("Handling reset request");

    let mut sessions = app_state.sessions.lock().await;
    let response: ResetResponse = reset(sessions.roster_mut(&token)?);
    drop(sessions);

    info!(removed = response.removed, "Successfully reset roster");

    Ok(Json(response))
}

/// Handler for GET `/roster` endpoint.
///
/// Lists the session's employees in hiring order.
async fn handle_list_roster(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<RosterResponse>, HttpError> {
    info!("Handling list_roster request");

    let mut sessions = app_state.sessions.lock().await;
    let response: RosterResponse = list_roster(sessions.roster(&token)?);
    drop(sessions);

    Ok(Json(response))
}

/// Handler for GET `/report` endpoint.
///
/// Returns the coverage report for the session's roster.
async fn handle_get_report(
    AxumState(app_state): AxumState<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<ReportResponse>, HttpError> {
    info!("Handling get_report request");

    let mut sessions = app_state.sessions.lock().await;
    let response: ReportResponse = get_report(sessions.roster(&token)?);
    drop(sessions);

    Ok(Json(response))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/catalog", get(handle_get_catalog))
        .route(
            "/sessions",
            post(handle_create_session).delete(handle_end_session),
        )
        .route("/roster", get(handle_list_roster))
        .route("/roster/hire", post(handle_hire))
        .route("/roster/fire_last", post(handle_fire_last))
        .route("/roster/reset", post(handle_reset))
        .route("/report", get(handle_get_report))
        .with_state(app_state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Roster Simulator Server");
    info!(
        max_sessions = args.max_sessions,
        session_idle_timeout_secs = args.session_idle_timeout_secs,
        "Session registry configured"
    );

    let app: Router = build_router(AppState::new(
        args.max_sessions,
        Duration::from_secs(args.session_idle_timeout_secs),
    ));

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
