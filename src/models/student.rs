use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::models::dates;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(default)]
    pub student_id: i64,
    #[serde(rename = "studentFName")]
    pub student_fname: String,
    #[serde(rename = "studentLName")]
    pub student_lname: String,
    pub student_number: String,
    /// Formatted `%Y/%m/%d`, or empty when no enrolment date is stored.
    pub enrol_date: String,
}

impl FromRow<'_, SqliteRow> for Student {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let enrol_date = row.try_get("enrol_date")?;
        Ok(Self {
            student_id: row.try_get("student_id")?,
            student_fname: row.try_get("student_fname")?,
            student_lname: row.try_get("student_lname")?,
            student_number: row.try_get("student_number")?,
            enrol_date: dates::format_enrol_date(enrol_date),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudentRequest {
    #[serde(rename = "studentFName")]
    pub student_fname: String,
    #[serde(rename = "studentLName")]
    pub student_lname: String,
    pub student_number: String,
    #[serde(default)]
    pub enrol_date: String,
}
