//! Console renderers for record listings.

use std::io::{self, Write};

use comfy_table::{Cell, CellAlignment, Table};

use rollbook_core::{format_marks, ListingStyle, StudentRecord};

/// Which listing is being printed; decides the header and closing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Ascending roll number.
    All,
    /// Descending marks.
    ByMarks,
}

impl Listing {
    pub fn header(&self, count: usize) -> String {
        match self {
            Listing::All => format!("----- All Students ({count}) -----"),
            Listing::ByMarks => "----- Students sorted by marks (high -> low) -----".to_string(),
        }
    }

    pub fn footer(&self) -> String {
        match self {
            Listing::All => "-".repeat(32),
            Listing::ByMarks => "-".repeat(49),
        }
    }
}

/// Write a listing between its header and footer rules.
pub fn write_listing<W: Write>(
    out: &mut W,
    listing: Listing,
    style: ListingStyle,
    records: &[&StudentRecord],
) -> io::Result<()> {
    writeln!(out, "{}", listing.header(records.len()))?;
    match style {
        ListingStyle::Plain => {
            for record in records {
                writeln!(out, "{record}")?;
            }
        }
        ListingStyle::Table => {
            if !records.is_empty() {
                writeln!(out, "{}", build_table(records))?;
            }
        }
    }
    writeln!(out, "{}", listing.footer())
}

fn build_table(records: &[&StudentRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Roll No", "Name", "Email", "Course", "Marks", "Grade"]);

    for r in records {
        table.add_row(vec![
            Cell::new(r.roll_no()).set_alignment(CellAlignment::Right),
            Cell::new(r.name()),
            Cell::new(r.email()),
            Cell::new(r.course()),
            Cell::new(format_marks(r.marks())).set_alignment(CellAlignment::Right),
            Cell::new(r.grade()),
        ]);
    }

    table
}

/// Serialize records as a pretty JSON array.
pub fn to_json(records: &[&StudentRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
