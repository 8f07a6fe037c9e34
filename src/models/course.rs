use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::models::dates;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default)]
    pub course_id: i64,
    pub course_code: String,
    pub teacher_id: i64,
    /// Formatted `%Y-%m-%d`.
    pub start_date: String,
    /// Formatted `%Y-%m-%d`.
    pub finish_date: String,
    pub course_name: String,
}

impl FromRow<'_, SqliteRow> for Course {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let start_date = row.try_get("start_date")?;
        let finish_date = row.try_get("finish_date")?;
        Ok(Self {
            course_id: row.try_get("course_id")?,
            course_code: row.try_get("course_code")?,
            teacher_id: row.try_get("teacher_id")?,
            start_date: dates::format_course_date(start_date),
            finish_date: dates::format_course_date(finish_date),
            course_name: row.try_get("course_name")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourseRequest {
    pub course_code: String,
    pub teacher_id: i64,
    pub start_date: String,
    pub finish_date: String,
    pub course_name: String,
}
