use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::student::Student;

fn read_line<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input ended"));
    }
    Ok(line.trim().to_string())
}

/// Prompt until the line parses. A malformed value is reported and the
/// same field is asked for again; end of input is the only fatal case.
fn read_parsed<T, R, W>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<T>
where
    T: FromStr,
    T::Err: core::fmt::Display,
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_line(input, out, prompt)?;
        match line.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(err) => writeln!(out, "Invalid input ({err}), try again.")?,
        }
    }
}

/// Read how many students will be entered.
pub fn read_count<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<usize> {
    read_parsed(input, out, "Enter the number of students: ")
}

/// Read one student record (name, age, score), prompting per field.
pub fn read_student<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    ordinal: usize,
) -> io::Result<Student> {
    writeln!(out, "\nStudent {ordinal}:")?;
    let name = read_line(input, out, "Name: ")?;
    let age = read_parsed(input, out, "Age: ")?;
    let score = read_parsed(input, out, "Score: ")?;
    Ok(Student { name, age, score })
}
