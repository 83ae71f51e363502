//! The interactive menu loop.
//!
//! Reads one line per prompt, dispatches to the [`RecordStore`], and prints
//! every result or diagnostic itself. Only console I/O failures escape
//! [`Shell::run`]; bad numbers and unknown roll numbers are reported and the
//! menu is shown again.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use rollbook_core::{ListingStyle, RecordStore, StoreError, StudentRecord};

use crate::listing::{write_listing, Listing};

const MENU: &str = "
===== Student Management Menu =====
1. Add Student
2. Delete Student by Roll No
3. Update Student (course/marks)
4. Search Student by Roll No
5. View All Students
6. View Students Sorted by Marks (desc)
0. Exit
Enter choice: ";

/// Errors raised while handling a menu action.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Text that does not parse as the number a prompt asked for.
    #[error("invalid {field}: {input:?}")]
    InvalidInput { field: &'static str, input: String },

    /// The store rejected the operation.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Input closed while a prompt was waiting.
    #[error("end of input")]
    EndOfInput,

    /// Reading a prompt or writing output failed.
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

fn parse_roll(input: &str) -> Result<i32, ShellError> {
    input.parse().map_err(|_| ShellError::InvalidInput {
        field: "roll number",
        input: input.to_string(),
    })
}

/// Marks must parse and be finite.
fn parse_marks(input: &str) -> Result<f64, ShellError> {
    match input.parse::<f64>() {
        Ok(marks) if marks.is_finite() => Ok(marks),
        _ => Err(ShellError::InvalidInput {
            field: "marks",
            input: input.to_string(),
        }),
    }
}

/// Menu-driven console over a [`RecordStore`].
pub struct Shell<'a, R, W> {
    store: &'a mut RecordStore,
    input: R,
    output: W,
    style: ListingStyle,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(store: &'a mut RecordStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            style: ListingStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ListingStyle) -> Self {
        self.style = style;
        self
    }

    /// Show the sample records the way the startup screen does. Samples that
    /// are no longer in the store are skipped.
    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        let first = self.store.search(101);
        let second = self.store.search(102);

        if let Some(s) = first {
            write!(self.output, "{}", s.details())?;
        }
        if let Some(s) = second {
            write!(self.output, "{}", s.details_with_note("Research Area: AI"))?;
        }

        writeln!(self.output, "[Note] Overloaded display method:")?;
        if let Some(s) = first {
            write!(self.output, "{}", s.details())?;
        }

        writeln!(self.output, "This is a final method in a final class.")?;
        self.output.flush()
    }

    /// Run the menu until `0` is chosen or input ends.
    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            let choice = match self.prompt(MENU) {
                Ok(choice) => choice,
                Err(ShellError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            };

            let result = match choice.as_str() {
                "1" => self.handle_add(),
                "2" => self.handle_delete(),
                "3" => self.handle_update(),
                "4" => self.handle_search(),
                "5" => self.show(Listing::All),
                "6" => self.show(Listing::ByMarks),
                "0" => {
                    self.say("Exiting. Goodbye!")?;
                    return Ok(());
                }
                other => {
                    tracing::debug!(choice = other, "unrecognised menu choice");
                    self.say("Invalid choice. Try again.")
                }
            };

            match result {
                Ok(()) => {}
                Err(ShellError::EndOfInput) => {
                    tracing::debug!("input closed mid-operation");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn handle_add(&mut self) -> Result<(), ShellError> {
        let result = self.read_new_record().and_then(|record| {
            self.store.add(record)?;
            Ok("Student added successfully.")
        });
        self.report(
            result,
            "Add",
            "Invalid numeric input. Cancelled add operation.",
        )
    }

    fn read_new_record(&mut self) -> Result<StudentRecord, ShellError> {
        let roll = parse_roll(&self.prompt("Enter roll no (int): ")?)?;
        let name = self.prompt("Enter name: ")?;
        let email = self.prompt("Enter email: ")?;
        let course = self.prompt("Enter course: ")?;
        let marks = parse_marks(&self.prompt("Enter marks (double): ")?)?;
        Ok(StudentRecord::new(roll, name, email, course, marks))
    }

    fn handle_delete(&mut self) -> Result<(), ShellError> {
        let result = self
            .prompt("Enter roll no to delete: ")
            .and_then(|input| parse_roll(&input))
            .and_then(|roll| {
                self.store.delete(roll)?;
                Ok("Student deleted successfully.")
            });
        self.report(result, "Delete", "Invalid roll number.")
    }

    fn handle_update(&mut self) -> Result<(), ShellError> {
        let result = self.read_update().and_then(|(roll, course, marks)| {
            let course = (!course.is_empty()).then_some(course.as_str());
            self.store.update(roll, course, marks)?;
            Ok("Student updated successfully.")
        });
        self.report(result, "Update", "Invalid numeric input. Update cancelled.")
    }

    fn read_update(&mut self) -> Result<(i32, String, Option<f64>), ShellError> {
        let roll = parse_roll(&self.prompt("Enter roll no to update: ")?)?;
        let course = self.prompt("Enter new course (or blank to skip): ")?;
        let marks_input = self.prompt("Enter new marks (or blank to skip): ")?;
        let marks = if marks_input.is_empty() {
            None
        } else {
            Some(parse_marks(&marks_input)?)
        };
        Ok((roll, course, marks))
    }

    fn handle_search(&mut self) -> Result<(), ShellError> {
        let roll = match self
            .prompt("Enter roll no to search: ")
            .and_then(|input| parse_roll(&input))
        {
            Ok(roll) => roll,
            Err(ShellError::InvalidInput { .. }) => return self.say("Invalid roll number."),
            Err(e) => return Err(e),
        };

        if let Some(record) = self.store.search(roll) {
            write!(self.output, "{}", record.details())?;
            self.output.flush()?;
            return Ok(());
        }
        self.say("Student not found.")
    }

    fn show(&mut self, listing: Listing) -> Result<(), ShellError> {
        let records = match listing {
            Listing::All => self.store.list_all(),
            Listing::ByMarks => self.store.list_by_marks_desc(),
        };
        write_listing(&mut self.output, listing, self.style, &records)?;
        self.output.flush()?;
        Ok(())
    }

    /// Print the outcome of a mutating action. Parse and store failures are
    /// reported and swallowed; anything else is passed up.
    fn report(
        &mut self,
        result: Result<&'static str, ShellError>,
        action: &str,
        invalid_input: &str,
    ) -> Result<(), ShellError> {
        match result {
            Ok(message) => self.say(message),
            Err(ShellError::InvalidInput { field, input }) => {
                tracing::debug!(field, input = %input, "rejected numeric input");
                self.say(invalid_input)
            }
            Err(ShellError::Store(e)) => {
                tracing::debug!(roll = e.roll_no(), action, "store rejected operation");
                self.say(&format!("{action} failed: {e}"))
            }
            Err(e) => Err(e),
        }
    }

    fn say(&mut self, line: &str) -> Result<(), ShellError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print `text` without a newline and read one trimmed line.
    fn prompt(&mut self, text: &str) -> Result<String, ShellError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rollbook_core::Grade;
    use std::io::Cursor;

    /// Feed `input` to a shell over `store` and return everything printed.
    fn drive(store: &mut RecordStore, input: &str) -> String {
        let mut out = Vec::new();
        Shell::new(store, Cursor::new(input.as_bytes()), &mut out)
            .run()
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sample_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.load_sample_data();
        store
    }

    #[test]
    fn exit_prints_goodbye() {
        let mut store = sample_store();
        let out = drive(&mut store, "0\n");
        assert!(out.contains("===== Student Management Menu ====="));
        assert!(out.ends_with("Enter choice: Exiting. Goodbye!\n"));
    }

    #[test]
    fn end_of_input_stops_quietly() {
        let mut store = sample_store();
        let out = drive(&mut store, "");
        assert!(out.ends_with("Enter choice: "));
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn end_of_input_mid_add_leaves_store_unchanged() {
        let mut store = sample_store();
        drive(&mut store, "1\n103\nNeha\n");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn invalid_choice_reprompts() {
        let mut store = sample_store();
        let out = drive(&mut store, "9\nabc\n0\n");
        assert_eq!(out.matches("Invalid choice. Try again.").count(), 2);
        assert_eq!(out.matches("Enter choice: ").count(), 3);
    }

    #[test]
    fn add_then_list() {
        let mut store = sample_store();
        let out = drive(&mut store, "1\n103\nNeha\nneha@mail.com\nB.Com\n54.99\n5\n0\n");
        assert!(out.contains("Student added successfully."));
        assert!(out.contains("----- All Students (3) -----"));
        assert!(out.contains(
            "Roll: 103 | Name: Neha | Email: neha@mail.com | Course: B.Com | Marks: 54.99 | Grade: D"
        ));
        assert_eq!(store.search(103).unwrap().grade(), Grade::D);
    }

    #[test]
    fn add_duplicate_reports_failure() {
        let mut store = sample_store();
        let out = drive(&mut store, "1\n101\nX\nx@mail.com\nMBA\n10\n0\n");
        assert!(out.contains("Add failed: Duplicate roll number 101"));
        assert!(!out.contains("Student added successfully."));
        assert_eq!(store.search(101).unwrap().name(), "Ankit");
    }

    #[test]
    fn add_with_bad_roll_cancels() {
        let mut store = sample_store();
        let out = drive(&mut store, "1\nabc\n0\n");
        assert!(out.contains("Invalid numeric input. Cancelled add operation."));
        // Cancelled right after the roll prompt; the next line is a menu choice.
        assert!(!out.contains("Enter name: "));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_with_bad_or_non_finite_marks_cancels() {
        let mut store = sample_store();
        let out = drive(
            &mut store,
            "1\n103\nNeha\nn@mail.com\nBA\nninety\n1\n104\nOm\no@mail.com\nBA\nNaN\n0\n",
        );
        assert_eq!(
            out.matches("Invalid numeric input. Cancelled add operation.")
                .count(),
            2
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn delete_paths() {
        let mut store = sample_store();
        let out = drive(&mut store, "2\n101\n2\n101\n2\nx\n0\n");
        assert!(out.contains("Student deleted successfully."));
        assert!(out.contains("Delete failed: roll number 101 not found."));
        assert!(out.contains("Invalid roll number."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_marks_only() {
        let mut store = sample_store();
        let out = drive(&mut store, "3\n101\n\n90\n0\n");
        assert!(out.contains("Enter new course (or blank to skip): "));
        assert!(out.contains("Student updated successfully."));
        let r = store.search(101).unwrap();
        assert_eq!(r.marks(), 90.0);
        assert_eq!(r.grade(), Grade::A);
        assert_eq!(r.course(), "B.Tech");
    }

    #[test]
    fn update_course_only() {
        let mut store = sample_store();
        drive(&mut store, "3\n102\nPh.D\n\n0\n");
        let r = store.search(102).unwrap();
        assert_eq!(r.course(), "Ph.D");
        assert_eq!(r.marks(), 91.0);
        assert_eq!(r.grade(), Grade::A);
    }

    #[test]
    fn update_failures() {
        let mut store = sample_store();
        let out = drive(&mut store, "3\n555\nX\n1\n3\n101\nX\nlots\n0\n");
        assert!(out.contains("Update failed: roll number 555 not found."));
        assert!(out.contains("Invalid numeric input. Update cancelled."));
        assert_eq!(store.search(101).unwrap().course(), "B.Tech");
    }

    #[test]
    fn search_found_and_missing() {
        let mut store = sample_store();
        let out = drive(&mut store, "4\n102\n4\n999\n4\n?\n0\n");
        assert!(out.contains(
            "Student Info:\nRoll No: 102\nName: Riya\nEmail: riya@mail.com\n\
             Course: M.Tech\nMarks: 91.00\nGrade: A\n\n"
        ));
        assert!(out.contains("Student not found."));
        assert!(out.contains("Invalid roll number."));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn sorted_listing_orders_by_marks() {
        let mut store = sample_store();
        let out = drive(&mut store, "6\n0\n");
        let riya = out.find("Roll: 102").unwrap();
        let ankit = out.find("Roll: 101").unwrap();
        assert!(riya < ankit);
        assert!(out.contains("----- Students sorted by marks (high -> low) -----"));
        assert!(out.contains(&format!("\n{}\n", "-".repeat(49))));
    }

    #[test]
    fn table_style_listing() {
        let mut store = sample_store();
        let mut out = Vec::new();
        Shell::new(&mut store, Cursor::new(&b"5\n0\n"[..]), &mut out)
            .with_style(ListingStyle::Table)
            .run()
            .unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Roll No"));
        assert!(out.contains("riya@mail.com"));
        assert!(!out.contains("Roll: 101 |"));
    }

    #[test]
    fn banner_shows_samples() {
        let mut store = sample_store();
        let mut out = Vec::new();
        Shell::new(&mut store, Cursor::new(&b""[..]), &mut out)
            .print_banner()
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("\nStudent Info:\nRoll No: 101\n"));
        assert!(out.contains("Course: M.Tech\nResearch Area: AI\n\n"));
        assert!(out.contains("[Note] Overloaded display method:\nStudent Info:\nRoll No: 101\n"));
        assert!(out.ends_with("This is a final method in a final class.\n"));
        assert_eq!(out.matches("Grade: ").count(), 2);
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_roll("7").unwrap(), 7);
        assert_eq!(parse_roll("+12").unwrap(), 12);
        assert!(parse_roll("1.5").is_err());
        assert_eq!(parse_marks("78.5").unwrap(), 78.5);
        assert!(parse_marks("inf").is_err());
        assert!(parse_marks("").is_err());
    }
}
