use crate::models::ActivityEntry;
use anyhow::Result;
use csv::WriterBuilder;
use std::path::Path;

/// Save the recent-activity report as CSV with header
/// (`Timestamp,Category,Description`), one row per entry.
pub fn save_activity_csv<P: AsRef<Path>>(entries: &[ActivityEntry], path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.serialize(("Timestamp", "Category", "Description"))?;
    for e in entries {
        wtr.serialize((&e.date, &e.category, &e.description))?;
    }
    wtr.flush()?;
    Ok(())
}
