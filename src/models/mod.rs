pub mod course;
pub mod dates;
pub mod student;

pub use course::{Course, NewCourseRequest};
pub use student::{NewStudentRequest, Student};
