use axum::Json;
use axum::extract::Path;
use axum::routing::{delete, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tracing::error;

use crate::db::repository::{self, DeleteOutcome};
use crate::error::AppError;
use crate::models::*;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/Course/ListCourses", get(list_courses))
        .route("/api/Course/FindCourse/{id}", get(find_course))
        .route("/api/Course/AddCourse", post(add_course))
        .route("/api/Course/DeleteCourse/{id}", delete(delete_course))
        .route("/api/Student/ListStudents", get(list_students))
        .route("/api/Student/FindStudent/{id}", get(find_student))
        .route("/api/Student/AddStudent", post(add_student))
        .route("/api/Student/DeleteStudent/{id}", delete(delete_student))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    let courses = repository::fetch_courses(&state.db).await?;
    Ok(Json(courses))
}

/// A miss is rendered as an all-default course, matching the documented
/// response shape.
async fn find_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, AppError> {
    let course = repository::find_course(&state.db, id).await?.unwrap_or_default();
    Ok(Json(course))
}

/// Responds with the new course id, or 0 when the insert did not complete.
async fn add_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseRequest>,
) -> Json<i64> {
    match repository::insert_course(&state.db, &req).await {
        Ok(id) => Json(id),
        Err(err) => {
            error!("add course failed: {}", err);
            Json(0)
        }
    }
}

async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, AppError> {
    let outcome = repository::delete_course(&state.db, id).await?;
    Ok(match outcome {
        DeleteOutcome::Removed => {
            format!("The course with given id {id} has been removed from the DB")
        }
        DeleteOutcome::NotFound => format!("The course with given id {id} is not found"),
    })
}

async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = repository::fetch_students(&state.db).await?;
    Ok(Json(students))
}

async fn find_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Student>, AppError> {
    let student = repository::find_student(&state.db, id).await?.unwrap_or_default();
    Ok(Json(student))
}

async fn add_student(
    State(state): State<AppState>,
    Json(req): Json<NewStudentRequest>,
) -> Json<i64> {
    match repository::insert_student(&state.db, &req).await {
        Ok(id) => Json(id),
        Err(err) => {
            error!("add student failed: {}", err);
            Json(0)
        }
    }
}

async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<String, AppError> {
    let outcome = repository::delete_student(&state.db, id).await?;
    Ok(match outcome {
        DeleteOutcome::Removed => {
            format!("The student with given id {id} has been removed from the DB")
        }
        DeleteOutcome::NotFound => format!("The student with given id {id} is not found"),
    })
}
