//! The `rollbook list` command.

use std::io::{self, Write};

use anyhow::Result;

use rollbook_core::{seed_store, ListingStyle};

use crate::commands::SessionArgs;
use crate::listing::{to_json, write_listing, Listing};

pub fn execute(session: SessionArgs, by_marks: bool, format: Option<String>) -> Result<()> {
    let config = session.load_config()?;
    let store = seed_store(&config);

    let (listing, records) = if by_marks {
        (Listing::ByMarks, store.list_by_marks_desc())
    } else {
        (Listing::All, store.list_all())
    };

    let mut out = io::stdout().lock();
    match format.as_deref() {
        None => write_listing(&mut out, listing, config.listing_style, &records)?,
        Some("json") => writeln!(out, "{}", to_json(&records)?)?,
        Some("table") => write_listing(&mut out, listing, ListingStyle::Table, &records)?,
        Some("text" | "plain") => write_listing(&mut out, listing, ListingStyle::Plain, &records)?,
        Some(other) => anyhow::bail!("unknown format: {other} (expected text, table or json)"),
    }

    Ok(())
}
