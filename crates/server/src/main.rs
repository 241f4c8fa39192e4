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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use duty_roster_api::{
    ApiError, AssignmentResponse, CreateAssignmentRequest, CreateDutyRequest,
    CreatePersonnelRequest, CreateRecurringAssignmentRequest, CreateRecurringAssignmentResponse,
    CreateScheduleDutyRequest, DateFilterQuery, DeletedResponse, DutyGroupConfigResponse,
    DutyResponse, ListDutiesQuery, ListPersonnelQuery, PersonnelResponse,
    ReassignAssignmentRequest, RootResponse, SaveDutyGroupConfigRequest, ScheduleDutyResponse,
    create_assignment, create_duty, create_personnel, create_recurring_assignments,
    create_schedule_duty, delete_assignment, delete_schedule_duty, get_duty_group_config,
    list_assignments, list_duties, list_personnel, list_schedule_duties, reassign_assignment,
    root_message, save_duty_group_config,
};
use duty_roster_persistence::{Persistence, SeedSummary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{info, warn};

/// Duty Roster Server - HTTP server for the duty roster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "ROSTER_DATABASE")]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, env = "ROSTER_PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(long, env = "ROSTER_BIND", default_value = "127.0.0.1")]
    bind: String,

    /// Comma-separated allowed CORS origins, or `*` for any origin
    #[arg(long, env = "CORS_ORIGINS", default_value = "*")]
    cors_origins: String,

    /// Do not seed the duty catalog and personnel on startup
    #[arg(long, env = "ROSTER_SKIP_SEED")]
    skip_seed: bool,
}

/// Application state shared across handlers.
///
/// The single store connection sits behind a mutex, which also serializes
/// writes and counter updates.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// API response for errors.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Occurrences written before a recurring assignment failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    created_count: Option<usize>,
    /// Dates of the occurrences written before a recurring assignment failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dates: Option<Vec<String>>,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Partial progress, for recurring assignments only.
    progress: Option<(usize, Vec<String>)>,
}

impl HttpError {
    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            progress: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (created_count, dates) = match self.progress {
            Some((count, dates)) => (Some(count), Some(dates)),
            None => (None, None),
        };
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            created_count,
            dates,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::DomainRuleViolation { .. } | ApiError::InvalidInput { .. } => {
                Self::new(StatusCode::BAD_REQUEST, err.to_string())
            }
            ApiError::ResourceNotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ApiError::Internal { .. } => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::PartialMaterialization {
                created_count,
                ref dates,
                ..
            } => {
                let progress: (usize, Vec<String>) = (created_count, dates.clone());
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                    progress: Some(progress),
                }
            }
        }
    }
}

/// Handler for GET `/api/` endpoint.
async fn handle_root() -> Json<RootResponse> {
    Json(root_message())
}

/// Handler for GET `/api/duties` endpoint.
async fn handle_list_duties(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListDutiesQuery>,
) -> Result<Json<Vec<DutyResponse>>, HttpError> {
    info!(search = ?query.search, "Handling list_duties request");

    let mut persistence = app_state.persistence.lock().await;
    let duties: Vec<DutyResponse> = list_duties(&mut persistence, &query)?;
    Ok(Json(duties))
}

/// Handler for POST `/api/duties` endpoint.
async fn handle_create_duty(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateDutyRequest>,
) -> Result<Json<DutyResponse>, HttpError> {
    info!(code = %req.code, "Handling create_duty request");

    let mut persistence = app_state.persistence.lock().await;
    let duty: DutyResponse = create_duty(&mut persistence, req)?;
    Ok(Json(duty))
}

/// Handler for GET `/api/personnel` endpoint.
async fn handle_list_personnel(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListPersonnelQuery>,
) -> Result<Json<Vec<PersonnelResponse>>, HttpError> {
    info!(
        search = ?query.search,
        available = ?query.available,
        "Handling list_personnel request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let personnel: Vec<PersonnelResponse> = list_personnel(&mut persistence, &query)?;
    Ok(Json(personnel))
}

/// Handler for POST `/api/personnel` endpoint.
async fn handle_create_personnel(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreatePersonnelRequest>,
) -> Result<Json<PersonnelResponse>, HttpError> {
    info!(callsign = %req.callsign, "Handling create_personnel request");

    let mut persistence = app_state.persistence.lock().await;
    let person: PersonnelResponse = create_personnel(&mut persistence, req)?;
    Ok(Json(person))
}

/// Handler for GET `/api/schedule-duties` endpoint.
async fn handle_list_schedule_duties(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DateFilterQuery>,
) -> Result<Json<Vec<ScheduleDutyResponse>>, HttpError> {
    info!(
        date = ?query.date,
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        "Handling list_schedule_duties request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let schedule_duties: Vec<ScheduleDutyResponse> =
        list_schedule_duties(&mut persistence, &query)?;
    Ok(Json(schedule_duties))
}

/// Handler for POST `/api/schedule-duties` endpoint.
async fn handle_create_schedule_duty(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateScheduleDutyRequest>,
) -> Result<Json<ScheduleDutyResponse>, HttpError> {
    info!(
        duty_code = %req.duty_code,
        date = %req.date,
        "Handling create_schedule_duty request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let schedule_duty: ScheduleDutyResponse = create_schedule_duty(&mut persistence, req)?;
    Ok(Json(schedule_duty))
}

/// Handler for DELETE `/api/schedule-duties/{id}` endpoint.
///
/// Cascades to the duty-group configuration and every assignment.
async fn handle_delete_schedule_duty(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_duty_id): Path<String>,
) -> Result<Json<DeletedResponse>, HttpError> {
    info!(schedule_duty_id = %schedule_duty_id, "Handling delete_schedule_duty request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeletedResponse = delete_schedule_duty(&mut persistence, &schedule_duty_id)?;
    Ok(Json(response))
}

/// Handler for GET `/api/assignments` endpoint.
async fn handle_list_assignments(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DateFilterQuery>,
) -> Result<Json<Vec<AssignmentResponse>>, HttpError> {
    info!(
        date = ?query.date,
        start_date = ?query.start_date,
        end_date = ?query.end_date,
        "Handling list_assignments request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let assignments: Vec<AssignmentResponse> = list_assignments(&mut persistence, &query)?;
    Ok(Json(assignments))
}

/// Handler for POST `/api/assignments` endpoint.
async fn handle_create_assignment(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateAssignmentRequest>,
) -> Result<Json<AssignmentResponse>, HttpError> {
    info!(
        schedule_duty_id = %req.schedule_duty_id,
        personnel_id = %req.personnel_id,
        "Handling create_assignment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let assignment: AssignmentResponse = create_assignment(&mut persistence, req)?;
    Ok(Json(assignment))
}

/// Handler for PUT `/api/assignments/{id}` endpoint.
async fn handle_reassign_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<String>,
    Json(req): Json<ReassignAssignmentRequest>,
) -> Result<Json<AssignmentResponse>, HttpError> {
    info!(
        assignment_id = %assignment_id,
        personnel_id = %req.personnel_id,
        "Handling reassign_assignment request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let assignment: AssignmentResponse =
        reassign_assignment(&mut persistence, &assignment_id, req)?;
    Ok(Json(assignment))
}

/// Handler for DELETE `/api/assignments/{id}` endpoint.
async fn handle_delete_assignment(
    AxumState(app_state): AxumState<AppState>,
    Path(assignment_id): Path<String>,
) -> Result<Json<DeletedResponse>, HttpError> {
    info!(assignment_id = %assignment_id, "Handling delete_assignment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeletedResponse = delete_assignment(&mut persistence, &assignment_id)?;
    Ok(Json(response))
}

/// Handler for GET `/api/duty-group-configs/{schedule_duty_id}` endpoint.
///
/// Responds with JSON `null` when the schedule duty has no configuration.
async fn handle_get_duty_group_config(
    AxumState(app_state): AxumState<AppState>,
    Path(schedule_duty_id): Path<String>,
) -> Result<Json<Option<DutyGroupConfigResponse>>, HttpError> {
    info!(schedule_duty_id = %schedule_duty_id, "Handling get_duty_group_config request");

    let mut persistence = app_state.persistence.lock().await;
    let config: Option<DutyGroupConfigResponse> =
        get_duty_group_config(&mut persistence, &schedule_duty_id)?;
    Ok(Json(config))
}

/// Handler for POST `/api/duty-group-configs` endpoint.
async fn handle_save_duty_group_config(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SaveDutyGroupConfigRequest>,
) -> Result<Json<DutyGroupConfigResponse>, HttpError> {
    info!(
        schedule_duty_id = %req.schedule_duty_id,
        slots = req.duties.len(),
        "Handling save_duty_group_config request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let config: DutyGroupConfigResponse = save_duty_group_config(&mut persistence, &req)?;
    Ok(Json(config))
}

/// Handler for POST `/api/recurring-assignments` endpoint.
///
/// On a storage failure part way through, the 500 body carries
/// `created_count` and `dates` for what was written.
async fn handle_create_recurring_assignments(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateRecurringAssignmentRequest>,
) -> Result<Json<CreateRecurringAssignmentResponse>, HttpError> {
    info!(
        schedule_duty_id = %req.schedule_duty_id,
        personnel_id = %req.personnel_id,
        frequency = %req.recurrence.frequency,
        end_type = %req.recurrence.end_type,
        "Handling create_recurring_assignments request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: CreateRecurringAssignmentResponse =
        create_recurring_assignments(&mut persistence, req)?;
    Ok(Json(response))
}

/// Builds the CORS layer from a comma-separated origin list.
///
/// `*` allows any origin. Origins that are not valid header values are
/// skipped with a warning.
fn build_cors_layer(origins: &str) -> CorsLayer {
    let layer: CorsLayer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.split(',').any(|origin| origin.trim() == "*") {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

fn build_router(app_state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/api", get(handle_root))
        .route("/api/", get(handle_root))
        .route("/api/duties", get(handle_list_duties).post(handle_create_duty))
        .route(
            "/api/personnel",
            get(handle_list_personnel).post(handle_create_personnel),
        )
        .route(
            "/api/schedule-duties",
            get(handle_list_schedule_duties).post(handle_create_schedule_duty),
        )
        .route(
            "/api/schedule-duties/{id}",
            delete(handle_delete_schedule_duty),
        )
        .route(
            "/api/assignments",
            get(handle_list_assignments).post(handle_create_assignment),
        )
        .route(
            "/api/assignments/{id}",
            put(handle_reassign_assignment).delete(handle_delete_assignment),
        )
        .route(
            "/api/duty-group-configs",
            post(handle_save_duty_group_config),
        )
        .route(
            "/api/duty-group-configs/{schedule_duty_id}",
            get(handle_get_duty_group_config),
        )
        .route(
            "/api/recurring-assignments",
            post(handle_create_recurring_assignments),
        )
        .layer(cors)
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Duty Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.skip_seed {
        info!("Skipping seed data");
    } else {
        let summary: SeedSummary = persistence.seed_defaults()?;
        info!(
            duties_inserted = summary.duties_inserted,
            personnel_inserted = summary.personnel_inserted,
            "Seed check complete"
        );
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state, build_cors_layer(&args.cors_origins));

    // Bind to address
    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
