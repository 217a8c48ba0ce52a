//! Student grading module (records, grade bands, result output).

pub mod input;
pub mod student;

pub use input::{read_count, read_student};
pub use student::{Grade, ResultSheet, Student};
