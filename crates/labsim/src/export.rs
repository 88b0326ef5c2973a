//! CSV export of recorded observations
//!
//! One row per point, two columns named after the lab's independent-variable
//! display name and dependent-variable label. Values are double-quoted and
//! comma-separated. Quoting is naive (no escaping of embedded quotes or
//! commas): column names come from static catalog content, and values are
//! plain numbers, so nothing to escape ever reaches a cell.

use std::io;
use std::path::Path;

use labsim_core::catalog::LabDefinition;
use labsim_core::model::DataPoint;

use crate::util::io::atomic_write;

/// Render the recorded dataset as a CSV document, header row included.
#[must_use]
pub fn csv_document(definition: &LabDefinition, points: &[DataPoint]) -> String {
    let x_name = definition
        .first_variable()
        .map(|v| v.name.as_str())
        .unwrap_or("x");
    let y_name = definition.dependent.label.as_str();

    let mut out = String::new();
    out.push_str(&format!("\"{x_name}\",\"{y_name}\"\n"));
    for point in points {
        out.push_str(&format!("\"{}\",\"{}\"\n", point.x, point.y));
    }
    out
}

/// Export the dataset to a file, atomically.
pub fn write_csv(path: &Path, definition: &LabDefinition, points: &[DataPoint]) -> io::Result<()> {
    let document = csv_document(definition, points);
    atomic_write(path, &document)?;
    tracing::info!(
        "exported {} data points to {}",
        points.len(),
        path.display()
    );
    Ok(())
}
