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
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use course_roster_api::{
    ADMIN_ACCESS_DENIED_MESSAGE, AdminHomeResponse, ApiError, AssignInstructorRequest,
    AssignInstructorResponse, CourseDirectoryRequest, CourseDirectoryResponse,
    CreateCourseRequest, CreateCourseResponse, CreateLabRequest, CreateLabResponse,
    RegisterUserRequest, RegisterUserResponse, admin_home, assign_instructor, course_directory,
    create_course, create_lab, register_user, resolve_acting_user,
};
use course_roster_domain::User;
use course_roster_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Course Roster Server - HTTP server for the Course Roster Service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for the roster tables.
    persistence: Arc<Mutex<Persistence>>,
}

/// API request for registering a user.
///
/// This includes the acting username in addition to the user data.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct RegisterUserApiRequest {
    /// The username of the user performing this action.
    acting_username: Option<String>,
    /// The new user's username (unique).
    username: String,
    /// The new user's role tag (case-sensitive: `Admin`, `Instructor`, or `TA`).
    role: String,
    /// The new user's first name.
    first_name: String,
    /// The new user's last name.
    last_name: String,
}

/// API request for creating a course.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateCourseApiRequest {
    /// The username of the user performing this action.
    acting_username: Option<String>,
    /// The course name (unique).
    name: String,
}

/// API request for creating a lab within a course.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateLabApiRequest {
    /// The username of the user performing this action.
    acting_username: Option<String>,
    /// The owning course's canonical identifier.
    course_id: i64,
    /// The lab name (unique within the course).
    name: String,
    /// The username of the TA to assign, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    ta_username: Option<String>,
}

/// API request for assigning an instructor to a course.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AssignInstructorApiRequest {
    /// The username of the user performing this action.
    acting_username: Option<String>,
    /// The course's canonical identifier.
    course_id: i64,
    /// The username of the instructor to assign.
    instructor_username: String,
}

/// Query parameters for the course directory.
#[derive(Debug, Deserialize)]
struct DirectoryQuery {
    /// The username of the viewing user, if any.
    acting_username: Option<String>,
    /// The directory filter; `assigned` selects the restricted view.
    filter: Option<String>,
}

/// Query parameters for the admin home page.
#[derive(Debug, Deserialize)]
struct AdminHomeQuery {
    /// The username of the user requesting the page, if any.
    acting_username: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
    status: String,
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
        match err {
            ApiError::Unauthorized { ref action, .. } => {
                // The admin page denial carries the page's own message
                let message: String = if action == "admin_home" {
                    String::from(ADMIN_ACCESS_DENIED_MESSAGE)
                } else {
                    err.to_string()
                };
                Self {
                    status: StatusCode::FORBIDDEN,
                    message,
                }
            }
            ApiError::DomainRuleViolation { .. } => Self {
                status: StatusCode::CONFLICT,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for POST `/users` endpoint.
///
/// Registers a new user. Admin only.
async fn handle_register_user(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterUserApiRequest>,
) -> Result<Json<RegisterUserResponse>, HttpError> {
    info!(
        acting_username = req.acting_username.as_deref().unwrap_or("<none>"),
        username = %req.username,
        "Handling register_user request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let acting: Option<User> =
        resolve_acting_user(&mut persistence, req.acting_username.as_deref())?;

    let response: RegisterUserResponse = register_user(
        &mut persistence,
        RegisterUserRequest {
            username: req.username,
            role: req.role,
            first_name: req.first_name,
            last_name: req.last_name,
        },
        acting.as_ref(),
    )?;

    Ok(Json(response))
}

/// Handler for POST `/courses` endpoint.
///
/// Creates a new course. Admin only.
async fn handle_create_course(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCourseApiRequest>,
) -> Result<Json<CreateCourseResponse>, HttpError> {
    info!(
        acting_username = req.acting_username.as_deref().unwrap_or("<none>"),
        name = %req.name,
        "Handling create_course request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let acting: Option<User> =
        resolve_acting_user(&mut persistence, req.acting_username.as_deref())?;

    let response: CreateCourseResponse = create_course(
        &mut persistence,
        CreateCourseRequest { name: req.name },
        acting.as_ref(),
    )?;

    Ok(Json(response))
}

/// Handler for POST `/labs` endpoint.
///
/// Creates a new lab within a course. Admin only.
async fn handle_create_lab(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateLabApiRequest>,
) -> Result<Json<CreateLabResponse>, HttpError> {
    info!(
        acting_username = req.acting_username.as_deref().unwrap_or("<none>"),
        course_id = req.course_id,
        name = %req.name,
        "Handling create_lab request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let acting: Option<User> =
        resolve_acting_user(&mut persistence, req.acting_username.as_deref())?;

    let response: CreateLabResponse = create_lab(
        &mut persistence,
        CreateLabRequest {
            course_id: req.course_id,
            name: req.name,
            ta_username: req.ta_username,
        },
        acting.as_ref(),
    )?;

    Ok(Json(response))
}

/// Handler for POST `/courses/instructors` endpoint.
///
/// Assigns an instructor to a course. Admin only.
async fn handle_assign_instructor(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AssignInstructorApiRequest>,
) -> Result<Json<AssignInstructorResponse>, HttpError> {
    info!(
        acting_username = req.acting_username.as_deref().unwrap_or("<none>"),
        course_id = req.course_id,
        instructor_username = %req.instructor_username,
        "Handling assign_instructor request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let acting: Option<User> =
        resolve_acting_user(&mut persistence, req.acting_username.as_deref())?;

    let response: AssignInstructorResponse = assign_instructor(
        &mut persistence,
        AssignInstructorRequest {
            course_id: req.course_id,
            instructor_username: req.instructor_username,
        },
        acting.as_ref(),
    )?;

    Ok(Json(response))
}

/// Handler for GET `/directory` endpoint.
///
/// Returns the course directory visible to the acting user. The full
/// listing is open to everyone; `?filter=assigned` restricts it to the
/// viewer's own courses.
async fn handle_course_directory(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<CourseDirectoryResponse>, HttpError> {
    info!(
        acting_username = query.acting_username.as_deref().unwrap_or("<none>"),
        filter = query.filter.as_deref().unwrap_or("<none>"),
        "Handling course_directory request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let acting: Option<User> =
        resolve_acting_user(&mut persistence, query.acting_username.as_deref())?;

    let response: CourseDirectoryResponse = course_directory(
        &mut persistence,
        &CourseDirectoryRequest {
            filter: query.filter,
        },
        acting.as_ref(),
    )?;

    Ok(Json(response))
}

/// Handler for GET `/admin` endpoint.
///
/// Returns the admin home page content. Admin only.
async fn handle_admin_home(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<AdminHomeQuery>,
) -> Result<Json<AdminHomeResponse>, HttpError> {
    info!(
        acting_username = query.acting_username.as_deref().unwrap_or("<none>"),
        "Handling admin_home request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let acting: Option<User> =
        resolve_acting_user(&mut persistence, query.acting_username.as_deref())?;

    let response: AdminHomeResponse = admin_home(&mut persistence, acting.as_ref())?;

    Ok(Json(response))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/users", post(handle_register_user))
        .route("/courses", post(handle_create_course))
        .route("/labs", post(handle_create_lab))
        .route("/courses/instructors", post(handle_assign_instructor))
        .route("/directory", get(handle_course_directory))
        .route("/admin", get(handle_admin_home))
        .route("/health", get(handle_health))
        .with_state(app_state)
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

    info!("Initializing Course Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
