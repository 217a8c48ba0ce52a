use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Letter grade band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a score to its band: 90+ is A, 80+ B, 70+ C, 60+ D, below that F.
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            Grade::A
        } else if score >= 80.0 {
            Grade::B
        } else if score >= 70.0 {
            Grade::C
        } else if score >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl core::fmt::Display for Grade {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let letter = match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        f.write_str(letter)
    }
}

/// One examined student.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub name: String,
    pub age: u32,
    pub score: f64,
}

impl Student {
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}

/// Insertion-ordered result collection with display and file output.
#[derive(Debug, Clone, Default)]
pub struct ResultSheet {
    students: Vec<Student>,
}

impl ResultSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, student: Student) {
        self.students.push(student);
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn format_line(student: &Student) -> String {
        format!(
            "{} ({} years) - Score: {} - Grade: {}",
            student.name,
            student.age,
            student.score,
            student.grade()
        )
    }

    /// One formatted result line per student, in insertion order.
    pub fn lines(&self) -> Vec<String> {
        self.students.iter().map(Self::format_line).collect()
    }

    /// Write the result lines to a text file, one per line.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, age: u32, score: f64) -> Student {
        Student {
            name: name.to_string(),
            age,
            score,
        }
    }

    #[test]
    fn scores_map_to_their_bands() {
        assert_eq!(Grade::from_score(95.0), Grade::A);
        assert_eq!(Grade::from_score(90.0), Grade::A);
        assert_eq!(Grade::from_score(89.9), Grade::B);
        assert_eq!(Grade::from_score(80.0), Grade::B);
        assert_eq!(Grade::from_score(79.9), Grade::C);
        assert_eq!(Grade::from_score(70.0), Grade::C);
        assert_eq!(Grade::from_score(69.9), Grade::D);
        assert_eq!(Grade::from_score(60.0), Grade::D);
        assert_eq!(Grade::from_score(59.9), Grade::F);
        assert_eq!(Grade::from_score(0.0), Grade::F);
    }

    #[test]
    fn result_lines_carry_name_age_score_and_grade() {
        let mut sheet = ResultSheet::new();
        sheet.add(student("Ama Serwaa", 17, 85.5));
        sheet.add(student("Kofi Boateng", 18, 90.0));

        assert_eq!(
            sheet.lines(),
            [
                "Ama Serwaa (17 years) - Score: 85.5 - Grade: B",
                "Kofi Boateng (18 years) - Score: 90 - Grade: A",
            ]
        );
    }

    #[test]
    fn saved_file_holds_one_line_per_student() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        let mut sheet = ResultSheet::new();
        sheet.add(student("Ama Serwaa", 17, 85.5));
        sheet.add(student("Yaw Darko", 16, 52.0));
        sheet.save(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "Ama Serwaa (17 years) - Score: 85.5 - Grade: B\n\
             Yaw Darko (16 years) - Score: 52 - Grade: F\n"
        );
    }
}
