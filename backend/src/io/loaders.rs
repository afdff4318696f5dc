use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use log::{info, warn};

use crate::models::booking::BookingExport;
use crate::models::booking_set::BookingSet;

/// Parse a booking export document.
pub fn parse_export(raw: &str) -> Result<BookingExport> {
    if raw.trim().is_empty() {
        bail!("Booking export is empty");
    }

    let export: BookingExport =
        serde_json::from_str(raw).context("Failed to parse booking export JSON")?;

    if export.total < export.items.len() as i64 {
        warn!(
            "Export reports total={} but contains {} bookings",
            export.total,
            export.items.len()
        );
    }
    Ok(export)
}

/// Parse a booking export straight into a [`BookingSet`].
pub fn parse_export_set(raw: &str) -> Result<BookingSet> {
    parse_export(raw).map(BookingSet::from_export)
}

/// Read the raw text of a `.json` export file.
pub fn read_export_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();

    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => {}
        Some(ext) => bail!(
            "Unsupported booking export format '.{}' for {}",
            ext,
            path.display()
        ),
        None => bail!("Booking export {} has no file extension", path.display()),
    }

    fs::read_to_string(path)
        .with_context(|| format!("Failed to read booking export {}", path.display()))
}

/// Load a booking export from a `.json` file.
pub fn load_export_file<P: AsRef<Path>>(path: P) -> Result<BookingExport> {
    let path = path.as_ref();
    let raw = read_export_file(path)?;
    let export = parse_export(&raw).with_context(|| format!("Invalid export {}", path.display()))?;

    info!(
        "Loaded {} bookings from {}",
        export.items.len(),
        path.display()
    );
    Ok(export)
}
