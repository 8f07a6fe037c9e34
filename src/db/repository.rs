use sqlx::SqlitePool;

use crate::error::AppError;
use crate::models::dates;
use crate::models::{Course, NewCourseRequest, NewStudentRequest, Student};

/// Outcome of a delete statement, decided by the affected row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Removed,
    NotFound,
}

pub async fn fetch_courses(db: &SqlitePool) -> Result<Vec<Course>, AppError> {
    let courses = sqlx::query_as::<_, Course>(
        "SELECT course_id, course_code, teacher_id, start_date, finish_date, course_name FROM courses",
    )
    .fetch_all(db)
    .await?;
    Ok(courses)
}

/// The primary key is unique by construction, so at most one row can match.
pub async fn find_course(db: &SqlitePool, id: i64) -> Result<Option<Course>, AppError> {
    let course = sqlx::query_as::<_, Course>(
        "SELECT course_id, course_code, teacher_id, start_date, finish_date, course_name FROM courses WHERE course_id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(course)
}

/// Inserts the non-key columns and returns the key SQLite assigned.
pub async fn insert_course(db: &SqlitePool, req: &NewCourseRequest) -> Result<i64, AppError> {
    let start_date = dates::parse_course_date(&req.start_date)
        .map_err(|e| AppError::BadRequest(format!("invalid startDate: {e}")))?;
    let finish_date = dates::parse_course_date(&req.finish_date)
        .map_err(|e| AppError::BadRequest(format!("invalid finishDate: {e}")))?;

    let result = sqlx::query(
        "INSERT INTO courses (course_code, teacher_id, start_date, finish_date, course_name) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&req.course_code)
    .bind(req.teacher_id)
    .bind(start_date)
    .bind(finish_date)
    .bind(&req.course_name)
    .execute(db)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_course(db: &SqlitePool, id: i64) -> Result<DeleteOutcome, AppError> {
    let result = sqlx::query("DELETE FROM courses WHERE course_id = ?")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() > 0 {
        Ok(DeleteOutcome::Removed)
    } else {
        Ok(DeleteOutcome::NotFound)
    }
}

pub async fn fetch_students(db: &SqlitePool) -> Result<Vec<Student>, AppError> {
    let students = sqlx::query_as::<_, Student>(
        "SELECT student_id, student_fname, student_lname, student_number, enrol_date FROM students",
    )
    .fetch_all(db)
    .await?;
    Ok(students)
}

pub async fn find_student(db: &SqlitePool, id: i64) -> Result<Option<Student>, AppError> {
    let student = sqlx::query_as::<_, Student>(
        "SELECT student_id, student_fname, student_lname, student_number, enrol_date FROM students WHERE student_id = ?",
    )
    .bind(id)
    .fetch_optional(db)
    .await?;
    Ok(student)
}

/// An empty `enrolDate` is stored as NULL.
pub async fn insert_student(db: &SqlitePool, req: &NewStudentRequest) -> Result<i64, AppError> {
    let enrol_date = dates::parse_enrol_date(&req.enrol_date)
        .map_err(|e| AppError::BadRequest(format!("invalid enrolDate: {e}")))?;

    let result = sqlx::query(
        "INSERT INTO students (student_fname, student_lname, student_number, enrol_date) VALUES (?, ?, ?, ?)",
    )
    .bind(&req.student_fname)
    .bind(&req.student_lname)
    .bind(&req.student_number)
    .bind(enrol_date)
    .execute(db)
    .await?;

    Ok(result.last_insert_rowid())
}

pub async fn delete_student(db: &SqlitePool, id: i64) -> Result<DeleteOutcome, AppError> {
    let result = sqlx::query("DELETE FROM students WHERE student_id = ?")
        .bind(id)
        .execute(db)
        .await?;

    if result.rows_affected() > 0 {
        Ok(DeleteOutcome::Removed)
    } else {
        Ok(DeleteOutcome::NotFound)
    }
}
