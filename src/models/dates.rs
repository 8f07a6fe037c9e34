use chrono::NaiveDate;

/// Wire format for course dates.
pub const COURSE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Wire format for student enrolment dates.
pub const ENROL_DATE_FORMAT: &str = "%Y/%m/%d";

pub fn format_course_date(date: NaiveDate) -> String {
    date.format(COURSE_DATE_FORMAT).to_string()
}

pub fn parse_course_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, COURSE_DATE_FORMAT)
}

/// A student without an enrolment date carries an empty string on the wire,
/// never a null.
pub fn format_enrol_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(ENROL_DATE_FORMAT).to_string())
        .unwrap_or_default()
}

pub fn parse_enrol_date(s: &str) -> Result<Option<NaiveDate>, chrono::ParseError> {
    if s.is_empty() {
        Ok(None)
    } else {
        NaiveDate::parse_from_str(s, ENROL_DATE_FORMAT).map(Some)
    }
}
